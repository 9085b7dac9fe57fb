//! Shared UI icons and emojis.
//!
//! Common emoji constants used across the wizard screens for consistent
//! visual styling, with plain-text fallbacks for dumb terminals.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "*");

// Wizard indicators
pub static CAR: Emoji<'_, '_> = Emoji("🚗 ", "[CAR]");
pub static CAMERA: Emoji<'_, '_> = Emoji("📷 ", "[PHOTO]");
pub static SATELLITE: Emoji<'_, '_> = Emoji("📡 ", "[LOOKUP]");
pub static STAR: Emoji<'_, '_> = Emoji("⭐ ", "*");
pub static HELP: Emoji<'_, '_> = Emoji("❓ ", "[?]");
