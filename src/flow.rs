//! Phase controller for the onboarding wizard.
//!
//! `OnboardingFlow` holds the current phase and the accumulated record, and
//! advances/retreats through the fixed phase sequence. No validation gate
//! blocks a transition: every record field is optional and the controller
//! never rejects a move. Calling `advance` on the last phase or `retreat` on
//! the first is a no-op.

use crate::phase::Phase;
use crate::record::{CsatResponse, InstallationPhoto, OnboardingRecord, VehicleDetails};

/// Holds the current phase name and accumulated record.
#[derive(Debug)]
pub struct OnboardingFlow {
    phase: Phase,
    record: OnboardingRecord,
}

impl OnboardingFlow {
    /// Start a new session at the welcome phase with an empty record.
    pub fn new() -> Self {
        Self {
            phase: Phase::Welcome,
            record: OnboardingRecord::new(),
        }
    }

    pub fn current_phase(&self) -> Phase {
        self.phase
    }

    pub fn record(&self) -> &OnboardingRecord {
        &self.record
    }

    /// Move one position forward; no-op at the last phase.
    pub fn advance(&mut self) {
        if let Some(next) = self.phase.next() {
            tracing::debug!(from = %self.phase, to = %next, "phase transition");
            self.phase = next;
        }
    }

    /// Move one position back; no-op at the first phase.
    pub fn retreat(&mut self) {
        if let Some(previous) = self.phase.previous() {
            tracing::debug!(from = %self.phase, to = %previous, "phase transition");
            self.phase = previous;
        }
    }

    // Per-field setters. Each merges its slice into the record; fields set by
    // earlier phases are left untouched unless explicitly overwritten.

    pub fn set_box_id(&mut self, box_id: impl Into<String>) {
        self.record.box_id = Some(box_id.into());
    }

    pub fn set_policy_id(&mut self, policy_id: impl Into<String>) {
        self.record.policy_id = Some(policy_id.into());
    }

    pub fn set_vehicle(&mut self, vehicle: VehicleDetails) {
        self.record.vehicle = Some(vehicle);
    }

    pub fn set_installation_photo(&mut self, photo: InstallationPhoto) {
        self.record.installation_photo = Some(photo);
    }

    pub fn set_photo_link(&mut self, link: impl Into<String>) {
        self.record.photo_link = Some(link.into());
    }

    pub fn set_csat(&mut self, rating: u8, feedback: Option<String>) {
        self.record.csat = Some(CsatResponse { rating, feedback });
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle() -> VehicleDetails {
        VehicleDetails {
            state: "MA".to_string(),
            license_plate: "7ABC123".to_string(),
            vin: "1HGCM82633A004352".to_string(),
            make: "Honda".to_string(),
            model: "Accord".to_string(),
            nickname: None,
        }
    }

    // =========================================
    // Transition tests
    // =========================================

    #[test]
    fn test_new_flow_starts_at_welcome() {
        let flow = OnboardingFlow::new();
        assert_eq!(flow.current_phase(), Phase::Welcome);
    }

    #[test]
    fn test_advance_walks_the_full_sequence() {
        let mut flow = OnboardingFlow::new();
        flow.advance();
        assert_eq!(flow.current_phase(), Phase::LicenseConfirm);
        flow.advance();
        assert_eq!(flow.current_phase(), Phase::PhotoUpload);
        flow.advance();
        assert_eq!(flow.current_phase(), Phase::Csat);
        flow.advance();
        assert_eq!(flow.current_phase(), Phase::Complete);
    }

    #[test]
    fn test_advance_at_complete_is_a_noop() {
        let mut flow = OnboardingFlow::new();
        for _ in 0..10 {
            flow.advance();
        }
        assert_eq!(flow.current_phase(), Phase::Complete);
    }

    #[test]
    fn test_retreat_at_welcome_is_a_noop() {
        let mut flow = OnboardingFlow::new();
        flow.retreat();
        assert_eq!(flow.current_phase(), Phase::Welcome);
    }

    #[test]
    fn test_retreat_returns_to_immediately_preceding_phase() {
        let mut flow = OnboardingFlow::new();
        flow.advance();
        flow.advance();
        flow.retreat();
        assert_eq!(flow.current_phase(), Phase::LicenseConfirm);
    }

    // =========================================
    // Record accumulation tests
    // =========================================

    #[test]
    fn test_fields_set_in_earlier_phases_persist_through_later_phases() {
        let mut flow = OnboardingFlow::new();
        flow.set_box_id("Tag_Pro-AB12CD");
        flow.set_policy_id("Policy_042137_Tag_Pro-AB12CD");
        flow.advance();

        flow.set_vehicle(sample_vehicle());
        flow.advance();
        flow.advance();

        flow.set_csat(5, Some("great".to_string()));
        flow.advance();

        let record = flow.record();
        assert_eq!(record.box_id.as_deref(), Some("Tag_Pro-AB12CD"));
        assert_eq!(
            record.policy_id.as_deref(),
            Some("Policy_042137_Tag_Pro-AB12CD")
        );
        assert_eq!(record.vehicle.as_ref().unwrap().make, "Honda");
        assert_eq!(record.csat.as_ref().unwrap().rating, 5);
    }

    #[test]
    fn test_setters_overwrite_when_called_again() {
        let mut flow = OnboardingFlow::new();
        flow.set_vehicle(sample_vehicle());

        let mut replacement = sample_vehicle();
        replacement.make = "Toyota".to_string();
        replacement.model = "Camry".to_string();
        flow.set_vehicle(replacement);

        let vehicle = flow.record().vehicle.as_ref().unwrap();
        assert_eq!(vehicle.make, "Toyota");
        assert_eq!(vehicle.model, "Camry");
        // Untouched slices survive the overwrite of this one
        assert_eq!(vehicle.state, "MA");
    }

    #[test]
    fn test_transitions_never_clear_the_record() {
        let mut flow = OnboardingFlow::new();
        flow.set_box_id("Tag_Pro-XY99ZZ");
        flow.advance();
        flow.retreat();
        assert_eq!(flow.record().box_id.as_deref(), Some("Tag_Pro-XY99ZZ"));
    }
}
