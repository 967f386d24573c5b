use crate::core::dispatch::bike_is_working_dyn;
use crate::core::{Bike, Reporter, Result, Station, Working};

pub struct FleetEngine<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> FleetEngine<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub fn run(&mut self) -> Result<()> {
        let fleet: Vec<Box<dyn Working>> = vec![Box::new(Station::new()), Box::new(Bike::new())];

        for unit in &fleet {
            let verdict = bike_is_working_dyn(unit.as_ref());
            tracing::debug!("working check answered {}", verdict);
            self.reporter.report(verdict)?;
        }

        Ok(())
    }
}
