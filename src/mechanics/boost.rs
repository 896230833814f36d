/// Boost accumulator: additive crit bonus, clamped to [0, cap], reset on crit.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boost {
    value: f64,
    cap: f64,
}

impl Boost {
    /// Empty accumulator; a negative cap collapses to 0.
    pub fn new(cap: f64) -> Self {
        Self { value: 0.0, cap: cap.max(0.0) }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn cap(&self) -> f64 {
        self.cap
    }

    /// At (or past) the cap: further triggers are wasted.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.value >= self.cap
    }

    /// Add `triggers * step`, clamped to the cap.
    #[inline]
    pub fn add(&mut self, triggers: u32, step: f64) {
        self.value = (self.value + f64::from(triggers) * step).clamp(0.0, self.cap);
    }

    #[inline]
    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
