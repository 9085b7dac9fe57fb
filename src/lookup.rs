//! Identifier generation and the simulated plate-to-VIN lookup.
//!
//! The lookup is a deliberate fake-latency UX pattern, not a real
//! integration: picking a different plate waits a fixed delay and then
//! regenerates the vehicle fields from scratch. The generators mirror the
//! data shapes a real lookup would return — 17-character VINs, a fixed
//! make/model table, US state codes, 6–8 character plates.

use crate::record::VehicleDetails;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::time::Duration;

/// Characters valid in VINs and plates (I, O and Q are excluded from VINs).
const VIN_CHARS: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

/// Characters valid in device IDs.
const DEVICE_ID_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Two-letter US state codes.
pub const STATE_CODES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Vehicle makes and their models, keyed in parallel.
const MAKES: [(&str, [&str; 6]); 15] = [
    ("Toyota", ["Camry", "Corolla", "RAV4", "Highlander", "Prius", "Sienna"]),
    ("Honda", ["Civic", "Accord", "CR-V", "Pilot", "Fit", "HR-V"]),
    ("Ford", ["F-150", "Explorer", "Escape", "Mustang", "Edge", "Expedition"]),
    ("Chevrolet", ["Silverado", "Equinox", "Malibu", "Tahoe", "Traverse", "Camaro"]),
    ("Nissan", ["Altima", "Sentra", "Rogue", "Pathfinder", "Murano", "Frontier"]),
    ("BMW", ["3 Series", "5 Series", "X3", "X5", "7 Series", "i3"]),
    ("Mercedes-Benz", ["C-Class", "E-Class", "S-Class", "GLC", "GLE", "A-Class"]),
    ("Audi", ["A4", "A6", "Q5", "Q7", "A3", "TT"]),
    ("Hyundai", ["Elantra", "Sonata", "Tucson", "Santa Fe", "Accent", "Palisade"]),
    ("Kia", ["Forte", "Optima", "Sportage", "Sorento", "Soul", "Telluride"]),
    ("Mazda", ["Mazda3", "Mazda6", "CX-5", "CX-9", "MX-5", "CX-30"]),
    ("Subaru", ["Outback", "Forester", "Impreza", "Legacy", "Crosstrek", "Ascent"]),
    ("Volkswagen", ["Jetta", "Passat", "Tiguan", "Atlas", "Golf", "Arteon"]),
    ("Lexus", ["ES", "IS", "RX", "GX", "LS", "NX"]),
    ("Acura", ["TLX", "ILX", "RDX", "MDX", "NSX", "RLX"]),
];

fn random_chars(charset: &[u8], len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

/// Generate a device/box ID in the format printed on the Tag Pro package:
/// `Tag_Pro-` followed by 6 alphanumeric characters.
pub fn generate_device_id() -> String {
    format!("Tag_Pro-{}", random_chars(DEVICE_ID_CHARS, 6))
}

/// Derive a policy identifier from a box ID:
/// `Policy_<6-digit-number>_<box_id>`.
pub fn derive_policy_id(box_id: &str) -> String {
    let number: u32 = rand::rng().random_range(0..1_000_000);
    format!("Policy_{:06}_{}", number, box_id)
}

/// Generate a 17-character VIN following the VIN format: `1` for a North
/// American manufacturer, a decimal check digit at position 9, and the
/// I/O/Q-free charset throughout.
pub fn generate_vin() -> String {
    let mut rng = rand::rng();
    let mut vin = String::with_capacity(17);
    vin.push('1');
    for _ in 0..7 {
        vin.push(VIN_CHARS[rng.random_range(0..VIN_CHARS.len())] as char);
    }
    vin.push(char::from_digit(rng.random_range(0..10), 10).expect("digit below 10"));
    for _ in 0..8 {
        vin.push(VIN_CHARS[rng.random_range(0..VIN_CHARS.len())] as char);
    }
    vin
}

/// Pick a random vehicle make from the fixed table.
pub fn generate_make() -> &'static str {
    MAKES.choose(&mut rand::rng()).expect("table is non-empty").0
}

/// Pick a model belonging to the given make, or a placeholder for an unknown
/// make.
pub fn generate_model(make: &str) -> &'static str {
    let mut rng = rand::rng();
    MAKES
        .iter()
        .find(|(name, _)| *name == make)
        .map(|(_, models)| *models.choose(&mut rng).expect("six models per make"))
        .unwrap_or("Unknown Model")
}

/// Pick a random US state code.
pub fn generate_state_code() -> &'static str {
    STATE_CODES.choose(&mut rand::rng()).expect("table is non-empty")
}

/// Generate a random license plate of 6–8 characters.
pub fn generate_license_plate() -> String {
    let len = rand::rng().random_range(6..=8);
    random_chars(VIN_CHARS, len)
}

/// Generate 3–10 unique license plate options for the user to choose from.
pub fn generate_plate_options() -> Vec<String> {
    let count = rand::rng().random_range(3..=10);
    let mut options = HashSet::new();
    while options.len() < count {
        options.insert(generate_license_plate());
    }
    options.into_iter().collect()
}

/// Generate a complete random vehicle seeded around the given plate.
pub fn generate_vehicle(license_plate: &str) -> VehicleDetails {
    let make = generate_make();
    VehicleDetails {
        state: generate_state_code().to_string(),
        license_plate: license_plate.to_string(),
        vin: generate_vin(),
        make: make.to_string(),
        model: generate_model(make).to_string(),
        nickname: None,
    }
}

/// Simulated license-plate-to-VIN lookup.
///
/// Waits a fixed configurable delay and regenerates the vehicle fields. The
/// previous values are fully replaced, never merged.
#[derive(Debug, Clone)]
pub struct VehicleLookup {
    delay: Duration,
}

impl VehicleLookup {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// "Re-look-up" the vehicle for a plate: sleep the configured delay, then
    /// return a fresh `VehicleDetails` with new state/VIN/make/model.
    pub async fn lookup_by_plate(&self, license_plate: &str) -> VehicleDetails {
        tracing::debug!(plate = license_plate, delay_ms = self.delay.as_millis() as u64, "simulated vin lookup");
        tokio::time::sleep(self.delay).await;
        generate_vehicle(license_plate)
    }
}
