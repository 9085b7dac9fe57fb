//! Vehicle-details confirmation screen.
//!
//! Fields are seeded with pseudo-random values rather than real lookups.
//! Picking a different license plate triggers the fixed-delay simulated
//! re-lookup with a blocking overlay, after which state/VIN/make/model are
//! fully replaced. Confirming submits the vehicle record to the save
//! endpoint; a failed save keeps the wizard on this screen.

use crate::flow::OnboardingFlow;
use crate::integrations::VehicleSavePayload;
use crate::lookup::{generate_license_plate, generate_plate_options, generate_vehicle};
use crate::record::VehicleDetails;
use crate::ui::icons::CAR;
use crate::wizard::{PhaseOutcome, WizardContext, outcome_after_submit};
use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

pub async fn run(flow: &mut OnboardingFlow, ctx: &WizardContext) -> Result<PhaseOutcome> {
    println!("  {}Here's what we found for your vehicle.", CAR);
    println!();

    // Seed from the record when returning to this screen, otherwise generate
    // a fresh vehicle around a random plate.
    let mut vehicle = flow
        .record()
        .vehicle
        .clone()
        .unwrap_or_else(|| generate_vehicle(&generate_license_plate()));

    // Plate options are fixed per visit, like the original dropdown.
    let plate_options = generate_plate_options();

    if let (Some(policy), Some(box_id)) = (&flow.record().policy_id, &flow.record().box_id) {
        println!("  {}", style(format!("{} | Box ID: {}", policy, box_id)).dim());
        println!();
    }

    loop {
        print_vehicle(ctx, &vehicle);

        let choice = if ctx.assume_yes {
            0
        } else {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Confirm these vehicle details?")
                .items(&[
                    "Confirm",
                    "Change license plate",
                    "Set vehicle nickname",
                    "Back",
                    "Quit",
                ])
                .default(0)
                .interact()
                .context("Failed to read vehicle confirmation selection")?
        };

        match choice {
            0 => return submit(flow, ctx, vehicle).await,
            1 => {
                if let Some(new_plate) = pick_plate(&plate_options, &vehicle.license_plate)? {
                    vehicle = relookup(ctx, &new_plate).await;
                }
            }
            2 => {
                let nickname: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Vehicle nickname (e.g., My Car, Work Truck)")
                    .allow_empty(true)
                    .interact_text()
                    .context("Failed to read nickname")?;
                let trimmed = nickname.trim();
                vehicle.nickname = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
            3 => return Ok(PhaseOutcome::Back),
            _ => return Ok(PhaseOutcome::Quit),
        }
    }
}

fn print_vehicle(ctx: &WizardContext, vehicle: &VehicleDetails) {
    println!();
    ctx.ui.field("License Plate:", &vehicle.license_plate);
    ctx.ui.field("State:", &vehicle.state);
    ctx.ui.field("VIN:", &vehicle.vin);
    ctx.ui.field("Make:", &vehicle.make);
    ctx.ui.field("Model:", &vehicle.model);
    if let Some(nickname) = &vehicle.nickname {
        ctx.ui.field("Nickname:", nickname);
    }
    println!();
}

/// Offer the plate dropdown. Returns `None` when the selection matches the
/// current plate (no re-lookup needed).
fn pick_plate(options: &[String], current: &str) -> Result<Option<String>> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select plate")
        .items(options)
        .default(0)
        .interact()
        .context("Failed to read plate selection")?;
    let plate = options[selection].clone();
    if plate == current {
        Ok(None)
    } else {
        Ok(Some(plate))
    }
}

/// Run the simulated re-lookup: the blocking overlay and the fake lookup
/// share the same delay, so they are awaited together.
async fn relookup(ctx: &WizardContext, new_plate: &str) -> VehicleDetails {
    let (_, fresh) = tokio::join!(
        ctx.ui.lookup_overlay(ctx.lookup.delay()),
        ctx.lookup.lookup_by_plate(new_plate)
    );
    // Previous values are fully replaced, never merged.
    fresh
}

async fn submit(
    flow: &mut OnboardingFlow,
    ctx: &WizardContext,
    vehicle: VehicleDetails,
) -> Result<PhaseOutcome> {
    flow.set_vehicle(vehicle);

    let payload = VehicleSavePayload::from_record(flow.record());
    let result = ctx.integrations.save_record(&payload).await;

    match &result {
        Ok(()) => {
            ctx.ui.toast_success(
                "Vehicle information saved",
                "Your Tag Pro setup is in progress.",
            );
        }
        Err(err) => {
            ctx.analytics
                .phase_error(flow.current_phase(), &err.to_string());
            ctx.ui
                .toast_error("Save failed", &format!("Error: {}", err));
        }
    }
    Ok(outcome_after_submit(&result))
}
