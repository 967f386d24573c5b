use crate::domain::ports::Working;
use crate::utils::error::{DuckError, Result};

#[derive(Debug, Clone, Default)]
pub struct Station;

impl Station {
    pub fn new() -> Self {
        Station
    }

    // Delegates to a `release` action that is deliberately left undefined.
    // The call always surfaces the missing capability instead of guessing
    // an implementation.
    pub fn release_bike(&self) -> Result<Bike> {
        Err(DuckError::CapabilityMissing {
            receiver: "DockingStation".to_string(),
            capability: "release".to_string(),
        })
    }
}

impl Working for Station {
    fn working(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bike;

impl Bike {
    pub fn new() -> Self {
        Bike
    }
}

impl Working for Bike {
    fn working(&self) -> bool {
        false
    }
}
