use crate::core::Reporter;
use crate::utils::error::Result;
use clap::Parser;
use std::io::Write;

#[derive(Debug, Clone, Parser)]
#[command(name = "duck-dock")]
#[command(about = "Duck-typed working checks for a docking station and a bike")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Default)]
pub struct StdoutReporter;

impl StdoutReporter {
    pub fn new() -> Self {
        StdoutReporter
    }
}

impl Reporter for StdoutReporter {
    fn report(&mut self, verdict: bool) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", verdict)?;
        Ok(())
    }
}
