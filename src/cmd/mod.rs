//! CLI command implementations.
//!
//! | Module   | Commands handled |
//! |----------|------------------|
//! | `run`    | `Run`            |
//! | `phases` | `Phases`         |
//! | `config` | `Config`         |

pub mod config;
pub mod phases;
pub mod run;

pub use config::cmd_config;
pub use phases::cmd_phases;
pub use run::cmd_run;
