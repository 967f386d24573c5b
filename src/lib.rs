pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::StdoutReporter, CliConfig};
pub use crate::core::{dispatch::bike_is_working, fleet::FleetEngine};
pub use crate::domain::model::{Bike, Station};
pub use crate::domain::ports::{Reporter, Working};
pub use crate::utils::error::{DuckError, Result};
