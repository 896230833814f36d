/// Closed-form weekly expectations used as reference points for net gain.
use crate::mechanics::day;

/// Expected weekly multiplier with the boost pinned at 0.
pub fn baseline(meals_per_day: u32) -> f64 {
    expected_week(meals_per_day, 0.0)
}

/// Expected weekly multiplier with the boost pinned at `boost_cap`:
/// the limit as the trigger rate grows without bound.
pub fn saturated(boost_cap: f64, meals_per_day: u32) -> f64 {
    expected_week(meals_per_day, boost_cap.max(0.0))
}

fn expected_week(meals_per_day: u32, boost: f64) -> f64 {
    day::week()
        .map(|(_, dc)| f64::from(meals_per_day) * dc.expected_payoff(dc.chance_with(boost)))
        .sum()
}
