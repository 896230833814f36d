// tests/mechanics.rs
use crit_boost::mechanics::stoch::{PoissonCount, bernoulli, poisson, seeded, uniform};
use crit_boost::mechanics::{Boost, REST_DAY, WEEKDAY, week};
use crit_boost::systems::week::MEALS_PER_DAY;
use crit_boost::{baseline, saturated};
use rand_core::RngCore;

/// Sample mean, variance and skewness of `n` counts.
fn moments(draw: &mut impl FnMut() -> u32, n: u32) -> (f64, f64, f64) {
    let xs: Vec<f64> = (0..n).map(|_| f64::from(draw())).collect();
    let len = f64::from(n);
    let mean = xs.iter().sum::<f64>() / len;
    let m2 = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / len;
    let m3 = xs.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / len;
    (mean, m2, m3 / m2.powf(1.5))
}

/* ──────────────────────────────────────────────────────────────────────────
1) Random source
────────────────────────────────────────────────────────────────────────── */

#[test]
fn uniform_stays_in_unit_interval() {
    let mut rng = seeded(7);
    for _ in 0..10_000 {
        let u = uniform(&mut rng);
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn bernoulli_saturates() {
    let mut rng = seeded(3);
    assert!((0..1_000).all(|_| bernoulli(&mut rng, 1.3)));
    assert!((0..1_000).all(|_| !bernoulli(&mut rng, 0.0)));
}

#[test]
fn poisson_zero_rate_consumes_nothing() {
    let mut a = seeded(11);
    let mut b = seeded(11);
    assert_eq!(poisson(&mut a, 0.0), 0);
    assert_eq!(poisson(&mut a, -1.0), 0);
    assert_eq!(poisson(&mut a, f64::NAN), 0);
    assert_eq!(poisson(&mut a, f64::INFINITY), 0);
    assert!(!PoissonCount::new(0.0).draws());
    assert_eq!(a.next_u64(), b.next_u64());
}

#[test]
fn poisson_mean_tracks_rate() {
    let mut rng = seeded(42);
    for &rate in &[0.01, 1.0, 3.3, 45.0] {
        let n = 20_000;
        let sum: u64 = (0..n).map(|_| u64::from(poisson(&mut rng, rate))).sum();
        let mean = sum as f64 / f64::from(n);
        let tol = 4.0 * (rate / f64::from(n)).sqrt() + 0.01;
        assert!((mean - rate).abs() < tol, "mean {mean} far from rate {rate}");
    }
}

/// Poisson(λ) has variance λ and skewness 1/√λ at every mean, including
/// the large per-point means a per-meal sweep reaches at high daily rates.
#[test]
fn poisson_shape_holds_at_large_means() {
    let mut rng = seeded(0x5EED);
    let n = 200_000;
    for &rate in &[2.0, 29.9, 30.0, 45.0, 100.0] {
        let counts = PoissonCount::new(rate);
        assert!(counts.draws());
        let (mean, var, skew) = moments(&mut || counts.sample(&mut rng), n);
        let expect_skew = 1.0 / rate.sqrt();

        assert!((mean - rate).abs() < 5.0 * (rate / f64::from(n)).sqrt(), "rate {rate}: mean {mean}");
        assert!((var - rate).abs() < 0.05 * rate, "rate {rate}: variance {var}");
        assert!((skew - expect_skew).abs() < 0.04, "rate {rate}: skew {skew} vs {expect_skew}");
    }
}

#[test]
fn poisson_counts_saturate_past_the_sampler_range() {
    let mut rng = seeded(1);
    assert_eq!(poisson(&mut rng, 1e30), u32::MAX);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Day table and boost accumulator
────────────────────────────────────────────────────────────────────────── */

#[test]
fn only_the_seventh_day_rests() {
    let rest: Vec<usize> = week().filter(|(_, c)| *c == REST_DAY).map(|(d, _)| d).collect();
    assert_eq!(rest, vec![6]);
}

#[test]
fn chance_saturates_at_one() {
    assert_eq!(REST_DAY.chance_with(0.9), 1.0);
    assert!((WEEKDAY.chance_with(0.3) - 0.4).abs() < 1e-12);
}

#[test]
fn add_clamps_to_cap() {
    let mut b = Boost::new(0.5);
    b.add(3, 0.1);
    assert!((b.value() - 0.3).abs() < 1e-12);
    assert!(!b.is_saturated());
    b.add(9, 0.1);
    assert_eq!(b.value(), 0.5);
    assert!(b.is_saturated());
    b.reset();
    assert_eq!(b.value(), 0.0);
}

#[test]
fn zero_cap_is_always_saturated() {
    let mut b = Boost::new(0.0);
    assert!(b.is_saturated());
    b.add(100, 0.1);
    assert_eq!(b.value(), 0.0);
    b.add(u32::MAX, 0.1);
    assert_eq!(b.value(), 0.0);
}

/* ──────────────────────────────────────────────────────────────────────────
3) Closed forms
────────────────────────────────────────────────────────────────────────── */

#[test]
fn baseline_matches_closed_form() {
    let expect = (0.10 * 2.0 + 0.90 * 1.0) * 3.0 * 6.0 + (0.30 * 3.0 + 0.70 * 1.0) * 3.0;
    assert!((baseline(MEALS_PER_DAY) - expect).abs() < 1e-9);
    assert!((baseline(MEALS_PER_DAY) - 24.6).abs() < 1e-9);
}

#[test]
fn saturated_clamps_chance_at_one() {
    // Rest day hits 1.0 at cap 0.7; weekdays at 0.8.
    let expect = (0.8 * 2.0 + 0.2) * 3.0 * 6.0 + 3.0 * 3.0;
    assert!((saturated(0.7, MEALS_PER_DAY) - expect).abs() < 1e-9);
    assert!((saturated(0.0, MEALS_PER_DAY) - baseline(MEALS_PER_DAY)).abs() < 1e-12);
}
