// src/bin/trigger_sweep.rs
// Run with:
//   cargo run --release --bin trigger_sweep > trigger_data.csv

use std::io::{self, Write};

use anyhow::{Context, Result};
use crit_boost::mechanics::stoch;
use crit_boost::report::Layout;
use crit_boost::{Sweep, SweepConfig};

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = stoch::from_entropy();
    let sweep = Sweep::new(&mut rng, SweepConfig::trigger_sweep()).context("invalid sweep config")?;

    let layout = Layout::Trigger;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    layout.write_header(&mut out).context("writing header")?;
    for row in sweep {
        layout.write_row(&mut out, &row).context("writing row")?;
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}
