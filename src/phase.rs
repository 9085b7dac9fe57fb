//! Phase enumeration for the onboarding wizard.
//!
//! The wizard is a fixed five-step sequence. This module provides:
//! - `Phase` — the closed, ordered enumeration of wizard screens
//! - `Phase::SEQUENCE` — the canonical order
//! - `next`/`previous` stepping, `Display`/`FromStr`, and serde support

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One screen/step in the fixed onboarding sequence.
///
/// The order is `welcome → license-confirm → photo-upload → csat → complete`.
/// No phase is skippable and there are no cycles; `previous` only steps back
/// to the immediately preceding phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Device/box ID capture
    Welcome,
    /// Vehicle-details confirmation with simulated plate-to-VIN lookup
    LicenseConfirm,
    /// Installation-photo capture and upload
    PhotoUpload,
    /// Satisfaction survey
    Csat,
    /// Completion summary
    Complete,
}

impl Phase {
    /// The canonical phase order.
    pub const SEQUENCE: [Phase; 5] = [
        Phase::Welcome,
        Phase::LicenseConfirm,
        Phase::PhotoUpload,
        Phase::Csat,
        Phase::Complete,
    ];

    /// Zero-based position of this phase in the sequence.
    pub fn index(self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|p| *p == self)
            .expect("every phase appears in SEQUENCE")
    }

    /// Total number of phases.
    pub fn total() -> usize {
        Self::SEQUENCE.len()
    }

    /// The phase after this one, or `None` at the end of the sequence.
    pub fn next(self) -> Option<Phase> {
        Self::SEQUENCE.get(self.index() + 1).copied()
    }

    /// The phase before this one, or `None` at the start of the sequence.
    pub fn previous(self) -> Option<Phase> {
        self.index().checked_sub(1).map(|i| Self::SEQUENCE[i])
    }

    /// Kebab-case wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Welcome => "welcome",
            Phase::LicenseConfirm => "license-confirm",
            Phase::PhotoUpload => "photo-upload",
            Phase::Csat => "csat",
            Phase::Complete => "complete",
        }
    }

    /// Human-readable title shown in phase headers.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Welcome => "Welcome",
            Phase::LicenseConfirm => "Confirm Vehicle Details",
            Phase::PhotoUpload => "Installation Photo",
            Phase::Csat => "How Did We Do?",
            Phase::Complete => "Setup Complete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(Phase::Welcome),
            "license-confirm" => Ok(Phase::LicenseConfirm),
            "photo-upload" => Ok(Phase::PhotoUpload),
            "csat" => Ok(Phase::Csat),
            "complete" => Ok(Phase::Complete),
            _ => anyhow::bail!(
                "Unknown phase '{}'. Valid phases: welcome, license-confirm, photo-upload, csat, complete",
                s
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================
    // Sequence tests
    // =========================================

    #[test]
    fn test_sequence_is_exactly_the_five_phases_in_order() {
        let names: Vec<&str> = Phase::SEQUENCE.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "welcome",
                "license-confirm",
                "photo-upload",
                "csat",
                "complete"
            ]
        );
    }

    #[test]
    fn test_four_next_steps_from_welcome_reach_complete() {
        let mut phase = Phase::Welcome;
        for _ in 0..4 {
            phase = phase.next().unwrap();
        }
        assert_eq!(phase, Phase::Complete);
    }

    #[test]
    fn test_next_from_complete_is_none() {
        assert_eq!(Phase::Complete.next(), None);
    }

    #[test]
    fn test_previous_from_welcome_is_none() {
        assert_eq!(Phase::Welcome.previous(), None);
    }

    #[test]
    fn test_previous_returns_immediately_preceding_phase() {
        assert_eq!(Phase::LicenseConfirm.previous(), Some(Phase::Welcome));
        assert_eq!(Phase::PhotoUpload.previous(), Some(Phase::LicenseConfirm));
        assert_eq!(Phase::Csat.previous(), Some(Phase::PhotoUpload));
        assert_eq!(Phase::Complete.previous(), Some(Phase::Csat));
    }

    #[test]
    fn test_next_and_previous_are_inverse_in_the_interior() {
        for phase in Phase::SEQUENCE {
            if let Some(next) = phase.next() {
                assert_eq!(next.previous(), Some(phase));
            }
        }
    }

    #[test]
    fn test_index_and_total() {
        assert_eq!(Phase::Welcome.index(), 0);
        assert_eq!(Phase::Complete.index(), 4);
        assert_eq!(Phase::total(), 5);
    }

    // =========================================
    // Display / FromStr / serde tests
    // =========================================

    #[test]
    fn test_display_matches_as_str() {
        for phase in Phase::SEQUENCE {
            assert_eq!(phase.to_string(), phase.as_str());
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for phase in Phase::SEQUENCE {
            let parsed: Phase = phase.as_str().parse().unwrap();
            assert_eq!(parsed, phase);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_phase() {
        let result = "installation".parse::<Phase>();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown phase"));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Phase::LicenseConfirm).unwrap();
        assert_eq!(json, "\"license-confirm\"");

        let parsed: Phase = serde_json::from_str("\"photo-upload\"").unwrap();
        assert_eq!(parsed, Phase::PhotoUpload);
    }

    #[test]
    fn test_titles_are_non_empty() {
        for phase in Phase::SEQUENCE {
            assert!(!phase.title().is_empty());
        }
    }
}
