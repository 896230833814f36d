// src/bin/cap_sweep.rs
// Run with:
//   RUST_LOG=info cargo run --release --bin cap_sweep > cap_data.csv

use std::io::{self, Write};

use anyhow::{Context, Result};
use crit_boost::mechanics::stoch;
use crit_boost::report::Layout;
use crit_boost::{Sweep, SweepConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cfg = SweepConfig::cap_sweep();
    let layout = Layout::capped(&cfg.grid.caps);

    let mut rng = stoch::from_entropy();
    let sweep = Sweep::new(&mut rng, cfg).context("invalid sweep config")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    layout.write_header(&mut out).context("writing header")?;
    for (i, row) in sweep.enumerate() {
        layout.write_row(&mut out, &row).context("writing row")?;
        log::info!("row {} done (trigger rate {:.1})", i + 1, row.trigger_rate);
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}
