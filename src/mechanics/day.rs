/// Day-type table: base crit chance and crit multiplier per day of the cycle.

/// Days in one simulated cycle.
pub const DAYS_PER_WEEK: usize = 7;

/// Index of the designated rest day (the 7th day).
pub const REST_DAY_INDEX: usize = DAYS_PER_WEEK - 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayConfig {
    pub base_crit_chance: f64,
    pub crit_multiplier: f64,
}

pub const WEEKDAY: DayConfig = DayConfig { base_crit_chance: 0.10, crit_multiplier: 2.0 };
pub const REST_DAY: DayConfig = DayConfig { base_crit_chance: 0.30, crit_multiplier: 3.0 };

impl DayConfig {
    /// Config for day `day` (0-based) of the cycle.
    #[inline]
    pub fn for_day(day: usize) -> Self {
        if day % DAYS_PER_WEEK == REST_DAY_INDEX { REST_DAY } else { WEEKDAY }
    }

    /// Crit chance with `boost` added, saturated at 1.
    #[inline]
    pub fn chance_with(&self, boost: f64) -> f64 {
        (self.base_crit_chance + boost).clamp(0.0, 1.0)
    }

    /// Expected payoff of one meal period at crit chance `p`.
    #[inline]
    pub fn expected_payoff(&self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        p * self.crit_multiplier + (1.0 - p)
    }

    /// Largest boost cap that keeps the crit chance at or below 1.
    #[inline]
    pub fn headroom(&self) -> f64 {
        (1.0 - self.base_crit_chance).max(0.0)
    }
}

/// The whole cycle, day 0 first.
pub fn week() -> impl Iterator<Item = (usize, DayConfig)> {
    (0..DAYS_PER_WEEK).map(|d| (d, DayConfig::for_day(d)))
}
