//! Serve-angle random number generator
//!
//! A 32-bit linear congruential generator. It is seeded with a fixed constant
//! so every run serves the same sequence of angles.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::consts::{LCG_A, LCG_C};

/// Deterministic LCG used only to pick the vertical serve direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeRng {
    state: u32,
}

impl ServeRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Raw generator state
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_A).wrapping_add(LCG_C);
        self.state
    }

    /// Advance once and return bits 16-18 of the new state, in `0..=7`
    pub fn draw(&mut self) -> u32 {
        (self.step() >> 16) & 0x7
    }

    /// Pick a vertical serve velocity in {-1, 1}.
    ///
    /// The draw is reduced modulo 3 to {-1, 0, 1}; a zero is replaced by
    /// `fallback` instead of drawing again, so the fallback direction is
    /// favoured (roughly 5 draws in 8).
    pub fn serve_dy(&mut self, fallback: i32) -> i32 {
        debug_assert!(fallback == 1 || fallback == -1);
        let dy = (self.draw() % 3) as i32 - 1;
        if dy == 0 { fallback } else { dy }
    }
}

impl Default for ServeRng {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_SEED)
    }
}

impl RngCore for ServeRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for ServeRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_draws_from_default_seed() {
        let mut rng = ServeRng::new(12345);
        // 12345 * 1103515245 + 12345 (mod 2^32)
        let expected = 12345u32.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let draw = rng.draw();
        assert_eq!(rng.state(), expected);
        assert_eq!(draw, (expected >> 16) & 7);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ServeRng::new(777);
        let mut b = ServeRng::new(777);
        for _ in 0..64 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_draw_range() {
        let mut rng = ServeRng::default();
        for _ in 0..1000 {
            assert!(rng.draw() <= 7);
        }
    }

    #[test]
    fn test_serve_dy_never_zero() {
        let mut rng = ServeRng::default();
        for _ in 0..1000 {
            let up = rng.serve_dy(-1);
            let down = rng.serve_dy(1);
            assert!(up == 1 || up == -1);
            assert!(down == 1 || down == -1);
        }
    }

    #[test]
    fn test_serve_dy_uses_fallback_on_zero() {
        // Find a seed whose first draw reduces to zero
        let seed = (0u32..)
            .find(|&s| ServeRng::new(s).draw() % 3 == 1)
            .unwrap();
        assert_eq!(ServeRng::new(seed).serve_dy(1), 1);
        assert_eq!(ServeRng::new(seed).serve_dy(-1), -1);
    }

    #[test]
    fn test_rng_core_matches_state() {
        let mut rng = ServeRng::from_seed(12345u32.to_le_bytes());
        let raw = rng.next_u32();
        assert_eq!(raw, rng.state());
        let mut bytes = [0u8; 6];
        rng.fill_bytes(&mut bytes);
        assert_ne!(bytes, [0u8; 6]);
    }
}
