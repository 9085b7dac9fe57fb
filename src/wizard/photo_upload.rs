//! Installation-photo screen.
//!
//! Prompts for an image path, reads it, and uploads the base64 payload to the
//! file-upload endpoint. Both the file read and the upload are locally
//! recoverable: on failure the wizard stays here and the user can try again.

use crate::flow::OnboardingFlow;
use crate::integrations::read_photo;
use crate::ui::icons::CAMERA;
use crate::wizard::{PhaseOutcome, WizardContext};
use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

pub async fn run(flow: &mut OnboardingFlow, ctx: &WizardContext) -> Result<PhaseOutcome> {
    println!(
        "  {}Take a photo of your installed Tag Pro and upload it.",
        CAMERA
    );
    println!();

    // A --photo flag short-circuits the prompt; --yes without one passes
    // through without an upload.
    if let Some(path) = ctx.preset_photo.clone() {
        return upload(flow, ctx, path).await;
    }
    if ctx.assume_yes {
        ctx.ui.note("no photo provided, continuing without one");
        return Ok(PhaseOutcome::Next);
    }

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Upload an installation photo?")
        .items(&["Upload a photo", "Skip for now", "Back", "Quit"])
        .default(0)
        .interact()
        .context("Failed to read photo selection")?;

    match choice {
        0 => {
            let path: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Path to the photo")
                .interact_text()
                .context("Failed to read photo path")?;
            upload(flow, ctx, PathBuf::from(path.trim())).await
        }
        1 => {
            println!("  {}", style("You can add a photo later from the app.").dim());
            Ok(PhaseOutcome::Next)
        }
        2 => Ok(PhaseOutcome::Back),
        _ => Ok(PhaseOutcome::Quit),
    }
}

async fn upload(
    flow: &mut OnboardingFlow,
    ctx: &WizardContext,
    path: PathBuf,
) -> Result<PhaseOutcome> {
    let photo = match read_photo(&path).await {
        Ok(photo) => photo,
        Err(err) => {
            ctx.analytics
                .phase_error(flow.current_phase(), &err.to_string());
            ctx.ui
                .toast_error("Could not read photo", &err.to_string());
            return Ok(PhaseOutcome::Stay);
        }
    };

    let plate = flow
        .record()
        .vehicle
        .as_ref()
        .map(|v| v.license_plate.clone())
        .unwrap_or_else(|| "unknown".to_string());

    match ctx.integrations.upload_photo(&photo, &plate).await {
        Ok(link) => {
            flow.set_installation_photo(photo);
            flow.set_photo_link(link);
            ctx.ui.toast_success(
                "Photo uploaded successfully",
                "Your installation photo has been saved.",
            );
            Ok(PhaseOutcome::Next)
        }
        Err(err) => {
            ctx.analytics
                .phase_error(flow.current_phase(), &err.to_string());
            ctx.ui
                .toast_error("Upload failed", "Please try uploading your photo again.");
            Ok(PhaseOutcome::Stay)
        }
    }
}
