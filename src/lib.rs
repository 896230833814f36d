/*!
`crit_boost` — Monte Carlo estimate of a boost-then-crit mechanic.

What it does
- Simulates a 7-day cycle of meal periods. Random triggers accumulate an
  additive crit-chance boost (capped); each meal period rolls one crit, and a
  crit pays the day's multiplier and spends the boost.
- Sweeps a grid of trigger rate × boost cap, averages many independent weeks
  per cell, and reports net gain over the closed-form no-boost baseline.

How to use (call surface only)
- Seed a generator: `mechanics::stoch::from_entropy()` or `seeded(u64)`.
- One week: `systems::week::simulate_week(&mut rng, &SimulationConfig)`.
- A sweep: `systems::sweep::Sweep::new(&mut rng, SweepConfig::cap_sweep())?`
  yields one `SweepRow` per trigger rate; `report::Layout` renders CSV.

What it does NOT do
- No persistence, no concurrency, no significance testing. The generator is
  always passed in explicitly; nothing here holds global state.
*/

pub mod error;
pub mod mechanics;
pub mod report;
pub mod systems;

pub use error::ConfigError;
pub use systems::baseline::{baseline, saturated};
pub use systems::sweep::{CellResult, Sweep, SweepConfig, SweepRow};
pub use systems::week::{Granularity, SimulationConfig, WeekOutcome, simulate_week};
