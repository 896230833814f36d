// src/systems/sdk.rs

//! # Week observer protocol
//!
//! The week simulator is a closed loop over decision points. Observers let
//! callers watch it without touching the loop: invariant checks in tests,
//! debug tracing, histograms of crit timing, etc.
//!
//! ## Hooks
//! Implement [`WeekObserver`]; every method has a no-op default.
//!
//! - `on_tick(&Tick)`
//!   Called once per decision point, after accumulation and before the meal
//!   (if any) resolves. `boost` is the accumulator value at that moment.
//!
//! - `on_meal(&MealResolution)`
//!   Called once per meal period when the crit roll resolves. `boost_before`
//!   is the value the roll was made against.
//!
//! Observers must not influence the outcome; they only see copies.
//! The unit type `()` is the null observer.

/// One decision point (a sub-iteration inside a meal period).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub day: usize,
    pub meal: usize,
    pub iteration: usize,
    pub boost: f64,
    /// The accumulator was already at cap, so no triggers were drawn.
    pub rested: bool,
}

/// A resolved meal period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MealResolution {
    pub day: usize,
    pub meal: usize,
    /// Sub-iteration the roll happened on.
    pub iteration: usize,
    pub boost_before: f64,
    pub chance: f64,
    pub crit: bool,
    pub payoff: f64,
}

pub trait WeekObserver {
    fn on_tick(&mut self, _tick: &Tick) {}
    fn on_meal(&mut self, _meal: &MealResolution) {}
}

impl WeekObserver for () {}

impl<O: WeekObserver + ?Sized> WeekObserver for &mut O {
    fn on_tick(&mut self, tick: &Tick) {
        (**self).on_tick(tick);
    }
    fn on_meal(&mut self, meal: &MealResolution) {
        (**self).on_meal(meal);
    }
}

/// Fan a week out to several observers.
impl WeekObserver for [Box<dyn WeekObserver>] {
    fn on_tick(&mut self, tick: &Tick) {
        for o in self.iter_mut() {
            o.on_tick(tick);
        }
    }
    fn on_meal(&mut self, meal: &MealResolution) {
        for o in self.iter_mut() {
            o.on_meal(meal);
        }
    }
}

/// Logs every resolution at `trace` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceMeals;

impl WeekObserver for TraceMeals {
    fn on_meal(&mut self, m: &MealResolution) {
        log::trace!(
            "day {} meal {} iter {}: boost {:.2} chance {:.2} crit {} payoff {}",
            m.day,
            m.meal,
            m.iteration,
            m.boost_before,
            m.chance,
            m.crit,
            m.payoff
        );
    }
}
