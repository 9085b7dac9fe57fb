//! Interactive wizard: one view per phase plus the runner loop.
//!
//! Each view reads and writes its slice of the record through the
//! [`OnboardingFlow`] setters and returns a [`PhaseOutcome`] telling the
//! runner where to go. A failed save/upload never advances the phase: the
//! view shows an error toast and returns [`PhaseOutcome::Stay`], so the user
//! can retry the same action.

pub mod complete;
pub mod csat;
pub mod license_confirm;
pub mod photo_upload;
pub mod welcome;

use crate::analytics::Analytics;
use crate::config::OnboardConfig;
use crate::flow::OnboardingFlow;
use crate::integrations::Integrations;
use crate::lookup::VehicleLookup;
use crate::phase::Phase;
use crate::ui::WizardUI;
use anyhow::Result;
use std::path::PathBuf;

/// Where a phase view wants the runner to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// Advance to the next phase
    Next,
    /// Return to the immediately preceding phase
    Back,
    /// Re-run the current phase (used after a failed submission)
    Stay,
    /// Abandon the session
    Quit,
}

/// Everything the phase views need: config, adapters, UI, and the flags from
/// the `run` command.
pub struct WizardContext {
    pub config: OnboardConfig,
    pub integrations: Integrations,
    pub analytics: Analytics,
    pub lookup: VehicleLookup,
    pub ui: WizardUI,
    /// Accept generated defaults without prompting
    pub assume_yes: bool,
    /// Pre-selected installation photo path
    pub preset_photo: Option<PathBuf>,
}

impl WizardContext {
    pub fn new(config: OnboardConfig, verbose: bool, assume_yes: bool, preset_photo: Option<PathBuf>) -> Self {
        let integrations = Integrations::new(&config.endpoints);
        let analytics = Analytics::new(
            config.analytics.enabled,
            config.analytics.collector_url.clone(),
        );
        let lookup = VehicleLookup::new(config.lookup_delay());
        Self {
            config,
            integrations,
            analytics,
            lookup,
            ui: WizardUI::new(verbose),
            assume_yes,
            preset_photo,
        }
    }
}

/// Map a submission result to navigation: success advances, failure stays on
/// the same phase.
pub(crate) fn outcome_after_submit<T, E>(result: &Result<T, E>) -> PhaseOutcome {
    if result.is_ok() {
        PhaseOutcome::Next
    } else {
        PhaseOutcome::Stay
    }
}

/// Apply a view's outcome to the controller. Returns `false` when the session
/// should end.
pub(crate) fn apply_outcome(flow: &mut OnboardingFlow, outcome: PhaseOutcome) -> bool {
    match outcome {
        PhaseOutcome::Next => {
            flow.advance();
            true
        }
        PhaseOutcome::Back => {
            flow.retreat();
            true
        }
        PhaseOutcome::Stay => true,
        PhaseOutcome::Quit => false,
    }
}

/// Run the wizard from the welcome phase to completion (or abandonment).
pub async fn run_wizard(ctx: &WizardContext) -> Result<()> {
    let mut flow = OnboardingFlow::new();
    tracing::info!(session = %flow.record().session_id, "onboarding session started");

    loop {
        let phase = flow.current_phase();
        ctx.ui.print_phase_header(phase);
        ctx.analytics.phase_start(phase);

        let outcome = match phase {
            Phase::Welcome => welcome::run(&mut flow, ctx)?,
            Phase::LicenseConfirm => license_confirm::run(&mut flow, ctx).await?,
            Phase::PhotoUpload => photo_upload::run(&mut flow, ctx).await?,
            Phase::Csat => csat::run(&mut flow, ctx).await?,
            Phase::Complete => {
                complete::run(&flow, ctx);
                break;
            }
        };

        if outcome == PhaseOutcome::Next {
            ctx.analytics.phase_complete(phase);
        }
        // A non-interactive run has no way to retry a failed submission.
        if outcome == PhaseOutcome::Stay && ctx.assume_yes {
            anyhow::bail!("Submission failed during a non-interactive run; see the error above");
        }
        if !apply_outcome(&mut flow, outcome) {
            ctx.analytics.abandon(phase);
            tracing::info!(session = %flow.record().session_id, phase = %phase, "session abandoned");
            return Ok(());
        }
    }

    tracing::info!(session = %flow.record().session_id, "onboarding session complete");
    Ok(())
}
