//! Session-scoped onboarding record.
//!
//! The record is a mutable accumulator: created empty at session start, built
//! up monotonically as the user moves through the phases, and discarded when
//! the session ends. There is no durable storage of in-progress state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Vehicle details collected (or regenerated by the simulated lookup) during
/// the license-confirm phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
    /// Two-letter US state code
    pub state: String,
    pub license_plate: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    /// Optional friendly name, e.g. "Work Truck"
    pub nickname: Option<String>,
}

/// Installation photo captured during the photo-upload phase.
///
/// Holds the raw bytes in memory; the record is session-scoped so nothing is
/// ever written back to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallationPhoto {
    pub path: PathBuf,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Satisfaction survey response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsatResponse {
    /// Rating from 1 (poor) to 5 (excellent)
    pub rating: u8,
    pub feedback: Option<String>,
}

/// The accumulated, session-scoped onboarding data.
///
/// All fields are optional at the type level; each phase fills in its slice
/// and later phases never revalidate earlier fields.
#[derive(Debug, Clone)]
pub struct OnboardingRecord {
    /// Correlation id for logs and analytics, generated per session
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    /// User-visible identifier of the physical hardware unit
    pub box_id: Option<String>,
    pub policy_id: Option<String>,
    pub vehicle: Option<VehicleDetails>,
    pub installation_photo: Option<InstallationPhoto>,
    pub csat: Option<CsatResponse>,
    /// View link returned by the file-upload endpoint, shown on completion
    pub photo_link: Option<String>,
}

impl OnboardingRecord {
    /// Create an empty record at session start.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            box_id: None,
            policy_id: None,
            vehicle: None,
            installation_photo: None,
            csat: None,
            photo_link: None,
        }
    }
}

impl Default for OnboardingRecord {
    fn default() -> Self {
        Self::new()
    }
}
