//! Sweep driver: Cartesian grid over trigger rate × boost cap.
//!
//! Each grid cell runs a fixed number of independent weeks, averages the
//! weekly multiplier and rest rate, and subtracts the no-boost baseline.
//! [`Sweep`] yields one [`SweepRow`] per trigger rate (row-major: outer rate,
//! inner cap) so callers can stream output as rows complete.

use rand_core::RngCore;

use crate::error::ConfigError;
use crate::mechanics::day::DAYS_PER_WEEK;
use crate::systems::baseline::baseline;
use crate::systems::week::{Granularity, SimulationConfig, simulate_week};

pub const SIMULATION_WEEKS: u32 = 100_000;

/// Discretized range `origin + i * step` for `i` in `start..=end`.
/// Integer indices keep grid values free of accumulated float drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub name: &'static str,
    pub origin: f64,
    pub step: f64,
    pub start: u32,
    pub end: u32,
}

impl Axis {
    /// `start/10 ..= end/10` in steps of 0.1.
    pub const fn tenths(name: &'static str, start: u32, end: u32) -> Self {
        Self { name, origin: 0.0, step: 0.1, start, end }
    }

    /// A single value.
    pub const fn fixed(name: &'static str, value: f64) -> Self {
        Self { name, origin: value, step: 0.0, start: 0, end: 0 }
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (self.start..=self.end).map(move |i| self.origin + f64::from(i) * self.step)
    }

    pub fn len(&self) -> usize {
        if self.start > self.end { 0 } else { (self.end - self.start) as usize + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Errors
    ///
    /// Returns `ConfigError` for an inverted index range or a bad step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start > self.end {
            return Err(ConfigError::EmptyAxis { axis: self.name, start: self.start, end: self.end });
        }
        if !(self.step >= 0.0 && self.step.is_finite()) {
            return Err(ConfigError::RangeViolation {
                field: self.name,
                min: 0.0,
                max: f64::MAX,
                value: self.step,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub rates: Axis,
    pub caps: Axis,
}

impl Grid {
    /// All `(trigger_rate, boost_cap)` cells, outer loop over rate.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rates.values().flat_map(move |r| self.caps.values().map(move |c| (r, c)))
    }

    pub fn len(&self) -> usize {
        self.rates.len() * self.caps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub grid: Grid,
    pub weeks_per_cell: u32,
    /// Template for every cell; rate and cap are overwritten from the grid.
    pub sim: SimulationConfig,
}

impl SweepConfig {
    /// Trigger rate 0.1..=10.0, cap fixed at 0.70, one decision point per meal.
    pub fn trigger_sweep() -> Self {
        Self {
            grid: Grid {
                rates: Axis::tenths("trigger_rate", 1, 100),
                caps: Axis::fixed("boost_cap", crate::systems::week::DEFAULT_BOOST_CAP),
            },
            weeks_per_cell: SIMULATION_WEEKS,
            sim: SimulationConfig { granularity: Granularity::PerMeal, ..SimulationConfig::default() },
        }
    }

    /// Trigger rate 2.0..=6.0 × cap 0.3..=0.7, 100 sub-iterations per meal.
    pub fn cap_sweep() -> Self {
        Self {
            grid: Grid {
                rates: Axis::tenths("trigger_rate", 20, 60),
                caps: Axis::tenths("boost_cap", 3, 7),
            },
            weeks_per_cell: SIMULATION_WEEKS,
            sim: SimulationConfig { granularity: Granularity::FINE, ..SimulationConfig::default() },
        }
    }

    pub fn with_weeks(self, weeks_per_cell: u32) -> Self {
        Self { weeks_per_cell, ..self }
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if an axis is malformed, `weeks_per_cell` is 0,
    /// or any grid cell yields an invalid [`SimulationConfig`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.rates.validate()?;
        self.grid.caps.validate()?;
        if self.weeks_per_cell == 0 {
            return Err(ConfigError::ZeroCount { field: "weeks_per_cell" });
        }
        self.sim.validate()?;
        for r in self.grid.rates.values() {
            self.sim.with_rate(r)?;
        }
        for c in self.grid.caps.values() {
            self.sim.with_cap(c)?;
        }
        Ok(())
    }
}

/// Aggregated estimate for one grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellResult {
    pub trigger_rate: f64,
    pub boost_cap: f64,
    pub avg_multiplier: f64,
    pub net_gain: f64,
    pub rest_rate: f64,
    /// `None` when the week has no triggers to normalize by.
    pub value_per_trigger: Option<f64>,
}

/// All cells sharing one trigger rate, in cap order.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRow {
    pub trigger_rate: f64,
    pub cells: Vec<CellResult>,
}

/// Net gain per weekly trigger; undefined for a zero rate.
pub fn value_per_trigger(net_gain: f64, triggers_per_day: f64) -> Option<f64> {
    let triggers_per_week = triggers_per_day * DAYS_PER_WEEK as f64;
    if triggers_per_week > 0.0 { Some(net_gain / triggers_per_week) } else { None }
}

/// Average `weeks` independent trials of `sim` against `base`.
pub fn run_cell<R: RngCore + ?Sized>(
    rng: &mut R,
    sim: &SimulationConfig,
    weeks: u32,
    base: f64,
) -> CellResult {
    let mut multiplier_sum = 0.0;
    let mut rest_sum = 0.0;
    for _ in 0..weeks {
        let w = simulate_week(rng, sim);
        multiplier_sum += w.total_multiplier;
        rest_sum += w.rest_rate;
    }
    let n = f64::from(weeks.max(1));
    let avg_multiplier = multiplier_sum / n;
    let net_gain = avg_multiplier - base;
    CellResult {
        trigger_rate: sim.triggers_per_day,
        boost_cap: sim.boost_cap,
        avg_multiplier,
        net_gain,
        rest_rate: rest_sum / n,
        value_per_trigger: value_per_trigger(net_gain, sim.triggers_per_day),
    }
}

/// Lazy sweep over a validated [`SweepConfig`], one row per trigger rate.
pub struct Sweep<'a, R: RngCore + ?Sized> {
    rng: &'a mut R,
    cfg: SweepConfig,
    baseline: f64,
    caps: Vec<f64>,
    rates: std::vec::IntoIter<f64>,
}

impl<'a, R: RngCore + ?Sized> Sweep<'a, R> {
    /// # Errors
    ///
    /// Returns `ConfigError` when `cfg` fails validation.
    pub fn new(rng: &'a mut R, cfg: SweepConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let baseline = baseline(cfg.sim.meals_per_day);
        let caps: Vec<f64> = cfg.grid.caps.values().collect();
        for &c in &caps {
            let sim = SimulationConfig { boost_cap: c, ..cfg.sim };
            if sim.cap_overflows() {
                log::warn!("boost cap {c:.2} pushes crit chance past 1.0; rolls saturate at 1.0");
            }
        }
        log::info!(
            "sweep: {} cells × {} weeks, {:?}, baseline {:.4}",
            cfg.grid.len(),
            cfg.weeks_per_cell,
            cfg.sim.granularity,
            baseline
        );
        let rates: Vec<f64> = cfg.grid.rates.values().collect();
        Ok(Self { rng, cfg, baseline, caps, rates: rates.into_iter() })
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn config(&self) -> &SweepConfig {
        &self.cfg
    }
}

impl<R: RngCore + ?Sized> Iterator for Sweep<'_, R> {
    type Item = SweepRow;

    fn next(&mut self) -> Option<SweepRow> {
        let rate = self.rates.next()?;
        let mut cells = Vec::with_capacity(self.caps.len());
        for &cap in &self.caps {
            let sim = SimulationConfig { triggers_per_day: rate, boost_cap: cap, ..self.cfg.sim };
            let cell = run_cell(&mut *self.rng, &sim, self.cfg.weeks_per_cell, self.baseline);
            log::debug!(
                "rate {:.1} cap {:.1}: avg {:.4} net {:.4} rest {:.4}",
                rate,
                cap,
                cell.avg_multiplier,
                cell.net_gain,
                cell.rest_rate
            );
            cells.push(cell);
        }
        Some(SweepRow { trigger_rate: rate, cells })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rates.size_hint()
    }
}

/// Run the whole sweep and collect every row.
///
/// # Errors
///
/// Returns `ConfigError` when `cfg` fails validation.
pub fn collect_sweep<R: RngCore + ?Sized>(
    rng: &mut R,
    cfg: SweepConfig,
) -> Result<Vec<SweepRow>, ConfigError> {
    Ok(Sweep::new(rng, cfg)?.collect())
}
