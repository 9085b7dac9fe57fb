//! `tagpro-onboard run` — run the wizard end to end.

use anyhow::Result;
use std::path::PathBuf;

use tagpro_onboard::config::OnboardConfig;
use tagpro_onboard::wizard::{WizardContext, run_wizard};

pub async fn cmd_run(
    config: OnboardConfig,
    verbose: bool,
    assume_yes: bool,
    photo: Option<PathBuf>,
) -> Result<()> {
    let ctx = WizardContext::new(config, verbose, assume_yes, photo);
    run_wizard(&ctx).await
}
