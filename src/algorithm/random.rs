//! Mulberry32 generator reproduced bit for bit
//!
//! Seeded fixtures were recorded against this exact mixing sequence, so the
//! arithmetic below must stay wrapping 32-bit throughout.

use rand::{RngCore, SeedableRng};

/// Odd increment added to the state before every draw
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
/// Scale mapping a `u32` onto `[0, 1)`
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Small sequential generator driven by a 32-bit seed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a seed
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Next raw mixed value
    pub const fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / UNIT_SCALE
    }

    /// Advance the stream without using the values
    pub fn discard(&mut self, draws: usize) {
        for _ in 0..draws {
            self.next_raw();
        }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_raw());
        let high = u64::from(self.next_raw());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            for (slot, byte) in chunk.iter_mut().zip(bytes) {
                *slot = byte;
            }
        }
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
