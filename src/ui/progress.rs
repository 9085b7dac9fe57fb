use crate::phase::Phase;
use crate::ui::icons::{CHECK, CROSS, SATELLITE, SPARKLE};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Terminal UI for the onboarding wizard, rendered via `console` styling and
/// `indicatif` spinners.
///
/// Responsibilities:
/// - phase headers with a step indicator (`Step 2/5`)
/// - one-shot success/error toasts (the CLI analogue of the original toast
///   notifications)
/// - the blocking "retrieving vehicle information" overlay shown during the
///   simulated plate-to-VIN lookup
pub struct WizardUI {
    verbose: bool,
}

impl WizardUI {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a full-width cyan separator line (70 `═` characters).
    pub fn print_separator(&self) {
        println!("{}", style("═".repeat(70)).cyan());
    }

    /// Print the header block for a phase before its screen runs.
    pub fn print_phase_header(&self, phase: Phase) {
        println!();
        self.print_separator();
        println!(
            "{} Step {}/{}: {}",
            style("▶").green().bold(),
            style(phase.index() + 1).yellow().bold(),
            Phase::total(),
            phase.title()
        );
        self.print_separator();
        println!();
    }

    /// Success toast: a green check with a title and a one-line description.
    pub fn toast_success(&self, title: &str, description: &str) {
        println!(
            "  {}{} {}",
            CHECK,
            style(title).green().bold(),
            style(description).dim()
        );
    }

    /// Error toast: a red cross with a title and a one-line description.
    /// The wizard stays on the current phase after one of these.
    pub fn toast_error(&self, title: &str, description: &str) {
        println!(
            "  {}{} {}",
            CROSS,
            style(title).red().bold(),
            style(description).dim()
        );
    }

    /// Print a dim informational line, only in verbose mode.
    pub fn note(&self, msg: &str) {
        if self.verbose {
            println!("    {} {}", style("→").dim(), style(msg).dim());
        }
    }

    /// Print a labeled field row, e.g. `License Plate:  7ABC123`.
    pub fn field(&self, label: &str, value: &str) {
        println!("  {:<16} {}", style(label).dim(), style(value).bold());
    }

    /// Blocking overlay for the simulated VIN lookup: spins for `delay` while
    /// describing the fake retrieval steps, then clears itself.
    pub async fn lookup_overlay(&self, delay: Duration) {
        println!(
            "  {}{}",
            SATELLITE,
            style("Retrieving Vehicle Information").bold()
        );
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("    {spinner} {msg}")
                .expect("progress bar template is a valid static string"),
        );
        spinner.set_message("Retrieving VIN from LicensePlateData.com...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        tokio::time::sleep(delay).await;

        spinner.finish_and_clear();
        println!("    {} License plate validated", style("•").green());
        println!("    {} Vehicle information retrieved", style("•").green());
    }

    /// Celebration banner printed on the completion screen.
    pub fn print_complete_banner(&self) {
        println!();
        println!(
            "{}{}",
            SPARKLE,
            style("Your Tag Pro is all set!").green().bold()
        );
    }
}
