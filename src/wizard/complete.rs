//! Completion screen: session summary.

use crate::flow::OnboardingFlow;
use crate::wizard::WizardContext;

pub fn run(flow: &OnboardingFlow, ctx: &WizardContext) {
    let record = flow.record();

    ctx.ui.print_complete_banner();
    println!();
    if let Some(box_id) = &record.box_id {
        ctx.ui.field("Device ID:", box_id);
    }
    if let Some(vehicle) = &record.vehicle {
        ctx.ui.field("License Plate:", &vehicle.license_plate);
        if let Some(nickname) = &vehicle.nickname {
            ctx.ui.field("Nickname:", nickname);
        }
    }
    if let Some(link) = &record.photo_link {
        ctx.ui.field("Photo:", link);
    }
    println!();
    println!("  Your Tag Pro will start tracking trips on your next drive.");

    if let Some(box_id) = &record.box_id {
        ctx.analytics.onboarding_complete(box_id);
    }
}
