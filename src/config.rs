//! Configuration for the onboarding wizard.
//!
//! Settings are read from an optional `onboard.toml`, then layered with
//! environment variables (`TAGPRO_*`) and CLI flags:
//!
//! ```toml
//! [endpoints]
//! sheets_url = "https://script.google.com/macros/s/.../exec"
//! drive_url = "https://script.google.com/macros/s/.../exec"
//!
//! [lookup]
//! delay_ms = 4000
//!
//! [analytics]
//! enabled = true
//! collector_url = "https://collector.example.com/events"
//!
//! [support]
//! phone = "1 (800) 290-8711"
//! email = "tagpro_support@cmtelematics.com"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default record-save endpoint (Apps Script deployment).
const DEFAULT_SHEETS_URL: &str = "https://script.google.com/macros/s/AKfycbwh5wsMeY-g1hDbFSjQ6HAgx5FNknlUaJjMEOJQ6vf8yRE7a2aKNp3fT42Psk7XdlN5bw/exec";
/// Default file-upload endpoint (Apps Script deployment).
const DEFAULT_DRIVE_URL: &str = "https://script.google.com/macros/s/AKfycbyPahfS-Q7BXpePuL_YShLpQ-OnE0iU9QW0wdAFnjXqvHC3CHNh0Muk7f-qlrZZCq3pRQ/exec";

/// External endpoint URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Record-save endpoint (URL-encoded form POST, field `data`)
    #[serde(default = "default_sheets_url")]
    pub sheets_url: String,
    /// File-upload endpoint (same form shape, base64 image payload)
    #[serde(default = "default_drive_url")]
    pub drive_url: String,
}

fn default_sheets_url() -> String {
    DEFAULT_SHEETS_URL.to_string()
}

fn default_drive_url() -> String {
    DEFAULT_DRIVE_URL.to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            sheets_url: default_sheets_url(),
            drive_url: default_drive_url(),
        }
    }
}

/// Simulated plate-to-VIN lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Fixed artificial delay shown as a blocking overlay, in milliseconds
    #[serde(default = "default_lookup_delay_ms")]
    pub delay_ms: u64,
}

fn default_lookup_delay_ms() -> u64 {
    4000
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_lookup_delay_ms(),
        }
    }
}

/// Funnel analytics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_analytics_enabled")]
    pub enabled: bool,
    /// Optional collector endpoint; events are only posted when set
    #[serde(default)]
    pub collector_url: Option<String>,
}

fn default_analytics_enabled() -> bool {
    true
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_analytics_enabled(),
            collector_url: None,
        }
    }
}

/// Support contact shown in the help callouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportConfig {
    #[serde(default = "default_support_phone")]
    pub phone: String,
    #[serde(default = "default_support_email")]
    pub email: String,
}

fn default_support_phone() -> String {
    "1 (800) 290-8711".to_string()
}

fn default_support_email() -> String {
    "tagpro_support@cmtelematics.com".to_string()
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            phone: default_support_phone(),
            email: default_support_email(),
        }
    }
}

/// Top-level wizard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub support: SupportConfig,
}

impl OnboardConfig {
    /// Load configuration: file (if present) → environment overrides.
    ///
    /// When `path` is `None`, `onboard.toml` in the current directory is used
    /// if it exists; otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new("onboard.toml");
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a config file, failing loudly on a missing or malformed file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply `TAGPRO_*` environment variable overrides on top of the file.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("TAGPRO_SHEETS_URL") {
            self.endpoints.sheets_url = url;
        }
        if let Ok(url) = std::env::var("TAGPRO_DRIVE_URL") {
            self.endpoints.drive_url = url;
        }
        if let Ok(ms) = std::env::var("TAGPRO_LOOKUP_DELAY_MS") {
            if let Ok(ms) = ms.parse() {
                self.lookup.delay_ms = ms;
            }
        }
        if let Ok(url) = std::env::var("TAGPRO_ANALYTICS_URL") {
            self.analytics.collector_url = Some(url);
        }
        if let Ok(v) = std::env::var("TAGPRO_ANALYTICS_ENABLED") {
            self.analytics.enabled = v != "0" && !v.eq_ignore_ascii_case("false");
        }
    }

    /// The simulated lookup delay as a `Duration`.
    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup.delay_ms)
    }

    /// Validate the configuration, returning warnings (not hard errors).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (name, url) in [
            ("endpoints.sheets_url", &self.endpoints.sheets_url),
            ("endpoints.drive_url", &self.endpoints.drive_url),
        ] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                warnings.push(format!("{} does not look like an HTTP(S) URL: {}", name, url));
            }
        }
        if let Some(url) = &self.analytics.collector_url {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                warnings.push(format!(
                    "analytics.collector_url does not look like an HTTP(S) URL: {}",
                    url
                ));
            }
        }
        if self.lookup.delay_ms > 30_000 {
            warnings.push(format!(
                "lookup.delay_ms of {} will block the wizard for a long time",
                self.lookup.delay_ms
            ));
        }
        warnings
    }

    /// Write a starter `onboard.toml` with the current (default) values.
    pub fn write_starter_file(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
