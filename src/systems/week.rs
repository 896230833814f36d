//! Week simulator: one stochastic trial of the boost-then-crit cycle.
//!
//! A week is 7 days × `meals_per_day` meal periods × `n` decision points,
//! where `n` comes from [`Granularity`]. At every decision point the boost
//! either rests (already at cap) or draws `Poisson(rate / (meals · n))`
//! triggers and accumulates them. Each meal period resolves exactly one crit
//! roll: as soon as the boost saturates, or on its last decision point.
//!
//! `Granularity::PerMeal` (n = 1) is the coarse model: one draw and one roll
//! per meal. `Granularity::Subdivided(n)` spreads the day's triggers across
//! `n` sub-iterations per meal, so a saturated boost can be spent early and
//! rebuilt before the next meal.

use rand_core::RngCore;

use crate::error::ConfigError;
use crate::mechanics::{Boost, DayConfig, day, stoch};
use crate::systems::sdk::{MealResolution, Tick, WeekObserver};

pub const SKILL_BOOST_PERCENT: f64 = 0.10;
pub const DEFAULT_BOOST_CAP: f64 = 0.70;
pub const MEALS_PER_DAY: u32 = 3;
pub const ITERATIONS_BETWEEN_MEALS: u32 = 100;

/// Decision points per meal period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    PerMeal,
    Subdivided(u32),
}

impl Granularity {
    pub const FINE: Self = Granularity::Subdivided(ITERATIONS_BETWEEN_MEALS);

    #[inline]
    pub fn iterations_per_meal(self) -> u32 {
        match self {
            Granularity::PerMeal => 1,
            Granularity::Subdivided(n) => n,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub triggers_per_day: f64,
    pub boost_cap: f64,
    pub skill_boost: f64,
    pub meals_per_day: u32,
    pub granularity: Granularity,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            triggers_per_day: 0.0,
            boost_cap: DEFAULT_BOOST_CAP,
            skill_boost: SKILL_BOOST_PERCENT,
            meals_per_day: MEALS_PER_DAY,
            granularity: Granularity::FINE,
        }
    }
}

impl SimulationConfig {
    /// Default constants with the two decision variables set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a negative rate or a cap outside [0,1].
    pub fn new(triggers_per_day: f64, boost_cap: f64) -> Result<Self, ConfigError> {
        let cfg = Self { triggers_per_day, boost_cap, ..Self::default() };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_rate(self, triggers_per_day: f64) -> Result<Self, ConfigError> {
        let cfg = Self { triggers_per_day, ..self };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_cap(self, boost_cap: f64) -> Result<Self, ConfigError> {
        let cfg = Self { boost_cap, ..self };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_granularity(self, granularity: Granularity) -> Result<Self, ConfigError> {
        let cfg = Self { granularity, ..self };
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when any field violates its documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.triggers_per_day >= 0.0 && self.triggers_per_day.is_finite()) {
            return Err(ConfigError::NegativeRate {
                field: "triggers_per_day",
                value: self.triggers_per_day,
            });
        }
        if !(0.0..=1.0).contains(&self.boost_cap) {
            return Err(ConfigError::RangeViolation {
                field: "boost_cap",
                min: 0.0,
                max: 1.0,
                value: self.boost_cap,
            });
        }
        if !(0.0..=1.0).contains(&self.skill_boost) {
            return Err(ConfigError::RangeViolation {
                field: "skill_boost",
                min: 0.0,
                max: 1.0,
                value: self.skill_boost,
            });
        }
        if self.meals_per_day == 0 {
            return Err(ConfigError::ZeroCount { field: "meals_per_day" });
        }
        let n = self.granularity.iterations_per_meal();
        if n == 0 {
            return Err(ConfigError::ZeroCount { field: "iterations_per_meal" });
        }
        // Weekly decision points are counted in u32.
        let max_n = u32::MAX / day::DAYS_PER_WEEK as u32 / self.meals_per_day;
        if n > max_n {
            return Err(ConfigError::RangeViolation {
                field: "iterations_per_meal",
                min: 1.0,
                max: f64::from(max_n),
                value: f64::from(n),
            });
        }
        Ok(())
    }

    /// Decision points in one week. Exact for a validated config; saturates otherwise.
    pub fn points_per_week(&self) -> u32 {
        (day::DAYS_PER_WEEK as u32)
            .saturating_mul(self.meals_per_day)
            .saturating_mul(self.granularity.iterations_per_meal())
    }

    /// Poisson mean for a single decision point.
    pub fn rate_per_point(&self) -> f64 {
        let points_per_day = f64::from(self.meals_per_day) * f64::from(self.granularity.iterations_per_meal());
        if points_per_day == 0.0 {
            return 0.0;
        }
        self.triggers_per_day / points_per_day
    }

    /// Whether some day's base chance plus the cap exceeds 1.
    /// The roll saturates at 1 in that case.
    pub fn cap_overflows(&self) -> bool {
        day::week().any(|(_, dc)| self.boost_cap > dc.headroom())
    }
}

/// Result of one simulated week.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeekOutcome {
    pub total_multiplier: f64,
    /// Share of decision points spent at cap, in [0,1].
    pub rest_rate: f64,
    pub meals_resolved: u32,
    pub crits: u32,
}

/// Simulate one week with no observer.
pub fn simulate_week<R: RngCore + ?Sized>(rng: &mut R, cfg: &SimulationConfig) -> WeekOutcome {
    simulate_week_observed(rng, cfg, &mut ())
}

/// Simulate one week, reporting every tick and meal resolution to `obs`.
pub fn simulate_week_observed<R, O>(rng: &mut R, cfg: &SimulationConfig, obs: &mut O) -> WeekOutcome
where
    R: RngCore + ?Sized,
    O: WeekObserver + ?Sized,
{
    let n = cfg.granularity.iterations_per_meal() as usize;
    let meals = cfg.meals_per_day as usize;
    let triggers = stoch::PoissonCount::new(cfg.rate_per_point());

    let mut boost = Boost::new(cfg.boost_cap);
    let mut out = WeekOutcome::default();
    let mut rests: u32 = 0;

    for (day, dc) in day::week() {
        for meal in 0..meals {
            let mut hungry = true;
            for iteration in 0..n {
                let rested = boost.is_saturated();
                if rested {
                    rests += 1;
                } else {
                    boost.add(triggers.sample(rng), cfg.skill_boost);
                }
                obs.on_tick(&Tick { day, meal, iteration, boost: boost.value(), rested });

                if hungry && (boost.is_saturated() || iteration + 1 == n) {
                    hungry = false;
                    let m = resolve_meal(rng, &dc, &mut boost, day, meal, iteration);
                    out.total_multiplier += m.payoff;
                    out.meals_resolved += 1;
                    if m.crit {
                        out.crits += 1;
                    }
                    obs.on_meal(&m);
                }
            }
        }
    }

    let points = cfg.points_per_week();
    out.rest_rate = if points > 0 { f64::from(rests) / f64::from(points) } else { 0.0 };
    out
}

/// One crit roll against the current boost; a crit spends the boost.
fn resolve_meal<R: RngCore + ?Sized>(
    rng: &mut R,
    dc: &DayConfig,
    boost: &mut Boost,
    day: usize,
    meal: usize,
    iteration: usize,
) -> MealResolution {
    let boost_before = boost.value();
    let chance = dc.chance_with(boost_before);
    let crit = stoch::bernoulli(rng, chance);
    let payoff = if crit {
        boost.reset();
        dc.crit_multiplier
    } else {
        1.0
    };
    MealResolution { day, meal, iteration, boost_before, chance, crit, payoff }
}
