//! Satisfaction survey screen.
//!
//! A 1–5 rating plus optional free-text feedback, submitted together with the
//! complete vehicle data to the save endpoint. A failed submission keeps the
//! wizard here so the user can resubmit.

use crate::flow::OnboardingFlow;
use crate::integrations::CsatSavePayload;
use crate::ui::icons::STAR;
use crate::wizard::{PhaseOutcome, WizardContext, outcome_after_submit};
use anyhow::{Context, Result};
use dialoguer::{Input, Select, theme::ColorfulTheme};

const RATING_LABELS: [&str; 5] = [
    "1 - Poor",
    "2 - Fair",
    "3 - Good",
    "4 - Very good",
    "5 - Excellent",
];

pub async fn run(flow: &mut OnboardingFlow, ctx: &WizardContext) -> Result<PhaseOutcome> {
    println!("  {}How was your setup experience?", STAR);
    println!();

    let (rating, feedback) = if ctx.assume_yes {
        (5, None)
    } else {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Rate your experience")
            .items(&RATING_LABELS)
            .default(4)
            .interact()
            .context("Failed to read rating")?;
        let rating = (selection + 1) as u8;

        let feedback: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Any feedback for us? (optional)")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read feedback")?;
        let trimmed = feedback.trim();
        let feedback = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        (rating, feedback)
    };

    flow.set_csat(rating, feedback);

    let payload = CsatSavePayload::from_record(flow.record());
    let result = ctx.integrations.save_record(&payload).await;

    match &result {
        Ok(()) => {
            ctx.ui
                .toast_success("Feedback submitted", "Thank you for your feedback!");
        }
        Err(err) => {
            ctx.analytics
                .phase_error(flow.current_phase(), &err.to_string());
            ctx.ui.toast_error(
                "Submission failed",
                "Please try submitting your feedback again.",
            );
        }
    }
    Ok(outcome_after_submit(&result))
}
