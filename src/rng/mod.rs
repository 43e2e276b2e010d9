// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The game's 31-bit pseudo-random generator.
//!
//! This is a Lehmer-style linear congruential generator evaluated with
//! Schrage's decomposition (multiplier 16807, factor 127773), but implemented
//! exactly the way the game implements it: the recurrence runs in unsigned
//! 32-bit arithmetic, the subtraction is allowed to wrap through zero, and a
//! single conditional reduction by 2^31 follows. The wraparound is observable
//! in the output stream, so the arithmetic must stay in wrapping `u32`
//! operations. Widening to `u64`, or reducing modulo 2^31 - 1 the way a
//! textbook MINSTD would, produces a different stream and therefore wrong
//! recipes for every seed.
//!
//! There is deliberately no general-purpose RNG surface here. The only job of
//! this type is to reproduce one external generator bit for bit.

/// Stateful generator over a single `u32` state word.
///
/// One instance lives per draw sequence and is discarded afterwards; no state
/// persists across seeds.
#[derive(Debug, Clone)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a generator with the given initial state.
    pub fn new(state: u32) -> Self {
        Self { state }
    }

    /// Advance the state and return it.
    ///
    /// The recurrence is `hi = state / 127773`, `lo = state % 127773`,
    /// `state = 16807 * lo - 2836 * hi`, all in wrapping `u32` arithmetic.
    /// A wrapped result at or above 2^31 is reduced once by 2^31, so every
    /// returned value fits in 31 bits.
    pub fn next_value(&mut self) -> u32 {
        let hi = self.state / 127773;
        let lo = self.state % 127773;
        let mut next = 16807u32
            .wrapping_mul(lo)
            .wrapping_sub(2836u32.wrapping_mul(hi));
        if next >= 1 << 31 {
            next -= 1 << 31;
        }
        self.state = next;
        next
    }

    /// Scale the next draw into `[0, max)`.
    ///
    /// Matches the game's floating-point path exactly: the 31-bit draw is
    /// divided by 2^31 as an `f64` and the product with `max` is truncated
    /// toward zero. `max = 0` yields 0.
    pub fn rand_int(&mut self, max: u32) -> u32 {
        let x = f64::from(self.next_value()) / f64::from(1u32 << 31);
        (x * f64::from(max)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference sequences captured from a trusted run of the original
    // generator. These pin the exact arithmetic, including the unsigned
    // wraparound; "looks random" is not the property under test.

    #[test]
    fn test_sequence_from_state_one() {
        let mut rng = GameRng::new(1);
        let outputs: Vec<u32> = (0..8).map(|_| rng.next_value()).collect();
        assert_eq!(
            outputs,
            [
                16807, 282475249, 1622650073, 984943658, 1144108930, 470211272, 101027544,
                1457850878
            ]
        );
    }

    #[test]
    fn test_sequence_from_state_1323() {
        // 1323 is the derived state for seed 1.
        let mut rng = GameRng::new(1323);
        let outputs: Vec<u32> = (0..8).map(|_| rng.next_value()).collect();
        assert_eq!(
            outputs,
            [
                22235661, 52599849, 1429883226, 1705369452, 1827626902, 1466738873, 515454598,
                296396588
            ]
        );
    }

    #[test]
    fn test_sequence_from_state_above_two_to_31() {
        // Initial states above 2^31 exercise the unsigned division path.
        let mut rng = GameRng::new(0xDEAD_BEEF);
        let outputs: Vec<u32> = (0..8).map(|_| rng.next_value()).collect();
        assert_eq!(
            outputs,
            [
                1624420127, 669470178, 1118455013, 949041300, 1176082831, 984653629, 564558821,
                957352101
            ]
        );
    }

    #[test]
    fn test_outputs_fit_in_31_bits() {
        let mut rng = GameRng::new(0xFFFF_FFFF);
        for _ in 0..1000 {
            assert!(rng.next_value() < 1 << 31);
        }
    }

    #[test]
    fn test_rand_int_reference_values() {
        let mut rng = GameRng::new(12345);
        let draws: Vec<u32> = (0..10).map(|_| rng.rand_int(22)).collect();
        assert_eq!(draws, [2, 18, 20, 0, 0, 1, 16, 12, 20, 17]);
    }

    #[test]
    fn test_rand_int_zero_max() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.rand_int(0), 0);
        // The draw is still consumed.
        assert_eq!(rng.next_value(), 282475249);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameRng::new(987654321);
        let mut b = GameRng::new(987654321);
        for _ in 0..100 {
            assert_eq!(a.next_value(), b.next_value());
        }
    }
}
