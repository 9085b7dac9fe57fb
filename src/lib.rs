pub mod analytics;
pub mod config;
pub mod errors;
pub mod flow;
pub mod integrations;
pub mod lookup;
pub mod phase;
pub mod record;
pub mod ui;
pub mod wizard;
