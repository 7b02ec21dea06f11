//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

/// Seedable pseudo-random number generator (xorshift64).
///
/// The float helpers fold a symmetric sample into the positive range
/// (`|2u - 1|`) so sequences line up with content tuned against that scheme.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound). Returns 0 for an empty range.
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform sample in [0, 1) with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Folded sample `|u * 2 - 1|` in [0, 1].
    pub fn random_float(&mut self) -> f32 {
        (self.next_f64() * 2.0 - 1.0).abs() as f32
    }

    /// Folded sample rescaled to `min..max`.
    pub fn random_float_range(&mut self, min: f32, max: f32) -> f32 {
        self.random_float() * (max - min) + min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_int(1000), rng2.next_int(1000));
            assert_eq!(rng1.random_float(), rng2.random_float());
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        // Should not panic or loop forever
        let _ = rng.next_int(100);
    }

    #[test]
    fn next_int_empty_range_is_zero() {
        let mut rng = Rng::new(5);
        assert_eq!(rng.next_int(0), 0);
    }

    #[test]
    fn random_float_stays_in_unit_range() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.random_float();
            assert!((0.0..=1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn random_float_range_respects_bounds() {
        let mut rng = Rng::new(99);
        for _ in 0..10_000 {
            let v = rng.random_float_range(-5.0, 15.0);
            assert!((-5.0..=15.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn folded_sample_mean_is_centered() {
        let mut rng = Rng::new(12345);
        let n = 20_000;
        let sum: f32 = (0..n).map(|_| rng.random_float()).sum();
        let mean = sum / n as f32;
        assert!((mean - 0.5).abs() < 0.02, "mean was {}", mean);
    }
}
