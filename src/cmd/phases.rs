//! `tagpro-onboard phases` — print the fixed phase sequence.

use console::style;
use tagpro_onboard::phase::Phase;

pub fn cmd_phases() {
    println!("{}", style("Onboarding phases").bold().cyan());
    println!();
    for phase in Phase::SEQUENCE {
        println!(
            "  {}  {:<16} {}",
            style(phase.index() + 1).yellow(),
            phase.as_str(),
            style(phase.title()).dim()
        );
    }
}
