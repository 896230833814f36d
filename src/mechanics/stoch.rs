/// Stochastic mechanics: uniform draws, Bernoulli rolls and Poisson counts.
/// Note: every helper takes the generator by `&mut`, so the caller owns the
/// stream and decides how it is seeded. Call order defines the sequence.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use rand_distr::{Distribution, Poisson};

/// Means at or above this flood the boost in a single draw; kept well below
/// the largest mean `rand_distr::Poisson` accepts.
const MAX_DRAWN_RATE: f64 = 1.0e18;

/// Generator seeded from OS entropy (production runs, no reproducibility).
pub fn from_entropy() -> WyRand {
    WyRand::from_os_rng()
}

/// Deterministic generator for tests and replays.
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform [0,1) from the top 53 bits.
#[inline]
pub fn uniform<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p); `p` outside [0,1] saturates.
#[inline]
pub fn bernoulli<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    uniform(rng) < p.clamp(0.0, 1.0)
}

/// Poisson count sampler for one fixed mean.
///
/// Build it once per mean and draw many times; `rand_distr` precomputes its
/// method constants on construction.
#[derive(Clone, Debug)]
pub struct PoissonCount(Count);

#[derive(Clone, Debug)]
enum Count {
    /// Non-positive or non-finite mean: always 0, no draw.
    Never,
    Draw(Poisson<f64>),
    /// Mean at or above [`MAX_DRAWN_RATE`]: every count saturates, no draw.
    Flood,
}

impl PoissonCount {
    pub fn new(rate: f64) -> Self {
        if !(rate > 0.0 && rate.is_finite()) {
            return Self(Count::Never);
        }
        if rate >= MAX_DRAWN_RATE {
            return Self(Count::Flood);
        }
        match Poisson::new(rate) {
            Ok(d) => Self(Count::Draw(d)),
            Err(_) => Self(Count::Flood),
        }
    }

    /// One count. Counts past `u32::MAX` saturate.
    #[inline]
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> u32 {
        match &self.0 {
            Count::Never => 0,
            Count::Draw(d) => {
                let k: f64 = d.sample(rng);
                k as u32
            }
            Count::Flood => u32::MAX,
        }
    }

    /// Whether [`sample`](Self::sample) ever consumes the generator.
    pub fn draws(&self) -> bool {
        matches!(self.0, Count::Draw(_))
    }
}

/// Single Poisson(rate) count. A non-positive or non-finite rate yields 0 and
/// leaves the generator untouched.
pub fn poisson<R: RngCore + ?Sized>(rng: &mut R, rate: f64) -> u32 {
    PoissonCount::new(rate).sample(rng)
}
