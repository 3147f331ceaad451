//! Deterministic random number generation.
//!
//! RULE: No generator may call a platform RNG.
//! All randomness flows through GenRng instances, either built directly
//! from a seed (tests, one-off calls) or derived from the master seed
//! held by an RngBank.
//!
//! Each generator family gets its own stream, seeded from
//! (master_seed XOR slot_index * golden-ratio constant). This means:
//!   - Adding a new slot never changes the existing streams.
//!   - Customer output does not shift when review generation changes.

use crate::error::{GenError, GenResult};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream.
#[derive(Debug, Clone)]
pub struct GenRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GenRng {
    /// Stand-alone stream seeded directly.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            name: "adhoc",
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Stream for a stable slot index derived from the master seed.
    /// The index must never change once assigned.
    pub fn derived(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n). Slight modulo bias is acceptable for seed data.
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Uniform integer in [lo, hi], both ends inclusive.
    pub fn range_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        lo + self.next_u64_below(hi - lo + 1)
    }

    /// Uniform float in [lo, hi).
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform pick from a slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> GenResult<&'a T> {
        if items.is_empty() {
            return Err(GenError::invalid(format!(
                "cannot pick from an empty list (stream '{}')",
                self.name
            )));
        }
        let index = self.next_u64_below(items.len() as u64) as usize;
        Ok(&items[index])
    }

    /// Fill `n` ASCII digits, each uniform 0-9.
    pub fn digits(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| char::from(b'0' + self.next_u64_below(10) as u8))
            .collect()
    }

    /// UUID with the v4 layout, drawn from this stream so ids replay with the seed.
    pub fn uuid(&mut self) -> uuid::Uuid {
        let mut bytes = [0u8; 16];
        self.inner.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

impl RngCore for GenRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// All generator streams for one seed, indexed by stable slot.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_slot(&self, slot: GeneratorSlot) -> GenRng {
        GenRng::derived(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorSlot {
    Customer = 0,
    Review = 1,
    Batch = 2,
    Timestamp = 3,
    Sampler = 4,
}

impl GeneratorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Review => "review",
            Self::Batch => "batch",
            Self::Timestamp => "timestamp",
            Self::Sampler => "sampler",
        }
    }
}
