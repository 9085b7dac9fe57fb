//! Welcome screen: device/box ID capture.
//!
//! The device ID is printed on the Tag Pro package; this screen shows the
//! captured ID, derives the policy identifier from it, and offers a support
//! callout for information mismatches.

use crate::flow::OnboardingFlow;
use crate::lookup::{derive_policy_id, generate_device_id};
use crate::ui::icons::HELP;
use crate::wizard::{PhaseOutcome, WizardContext};
use anyhow::{Context, Result};
use console::style;
use dialoguer::{Select, theme::ColorfulTheme};

pub fn run(flow: &mut OnboardingFlow, ctx: &WizardContext) -> Result<PhaseOutcome> {
    println!("  Let's get your Tag Pro set up.");
    println!();

    // Device IDs survive a Back/retry; only generate one the first time.
    let device_id = flow
        .record()
        .box_id
        .clone()
        .unwrap_or_else(generate_device_id);
    ctx.ui.field("Device ID:", &device_id);
    println!(
        "  {}",
        style("Device ID from your Tag Pro package").dim()
    );
    println!();

    loop {
        let choice = if ctx.assume_yes {
            0
        } else {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Ready to begin?")
                .items(&[
                    "Confirm & Begin",
                    "Details don't look right? Contact Support",
                    "Quit",
                ])
                .default(0)
                .interact()
                .context("Failed to read welcome selection")?
        };

        match choice {
            0 => {
                let policy_id = derive_policy_id(&device_id);
                flow.set_box_id(&device_id);
                flow.set_policy_id(&policy_id);
                ctx.ui.note(&format!("policy id {}", policy_id));
                return Ok(PhaseOutcome::Next);
            }
            1 => print_support_callout(ctx),
            _ => return Ok(PhaseOutcome::Quit),
        }
    }
}

fn print_support_callout(ctx: &WizardContext) {
    println!();
    println!("  {}{}", HELP, style("Information Mismatch?").bold());
    println!("  If there is an information mismatch, please contact Customer Support:");
    ctx.ui.field("Phone:", &ctx.config.support.phone);
    ctx.ui.field("Email:", &ctx.config.support.email);
    println!();
}
