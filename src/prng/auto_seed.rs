use byteorder::{ByteOrder, LittleEndian};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed value reserved to request seeding from the clock.
pub const AUTO_SEED: u32 = 0xFFFF_FFFF;

/// Where a generator takes its seed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Explicit(u32),
    Auto,
}

impl From<u32> for SeedSource {
    fn from(seed: u32) -> SeedSource {
        if seed == AUTO_SEED {
            SeedSource::Auto
        } else {
            SeedSource::Explicit(seed)
        }
    }
}

/// Entropy for auto-seeding: two 32-bit readings that move over time.
pub trait Clock {
    fn seconds(&self) -> u32;
    fn ticks(&self) -> u32;
}

/// Wall-clock seconds and milliseconds since the epoch, truncated to 32 bits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn seconds(&self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as u32)
            .unwrap_or(0)
    }

    fn ticks(&self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u32)
            .unwrap_or(0)
    }
}

/// Mixes two clock readings into a seed.
///
/// Every call bumps an internal counter that is folded into the result, so
/// seeds taken in quick succession from a coarse clock still differ.
#[derive(Debug, Default)]
pub struct SeedHasher {
    counter: AtomicU32,
}

/// Hasher behind `RandomSuper::new(AUTO_SEED)`. Lives for the whole process.
pub static GLOBAL_HASHER: SeedHasher = SeedHasher::new();

impl SeedHasher {
    pub const fn new() -> SeedHasher {
        SeedHasher {
            counter: AtomicU32::new(0),
        }
    }

    pub fn hash(&self, val1: u32, val2: u32) -> u32 {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        let hash1 = byte_hash(val1);
        let hash2 = byte_hash(val2);

        (hash2 ^ hash1.wrapping_add(count as i32)) as u32
    }

    /// Number of hashes taken so far.
    pub fn calls(&self) -> u32 {
        self.counter.load(Ordering::Relaxed)
    }
}

fn byte_hash(val: u32) -> i32 {
    let mut bytes = [0u8; 4];
    LittleEndian::write_u32(&mut bytes, val);

    bytes
        .iter()
        .fold(0i32, |hash, &b| hash.wrapping_mul(257).wrapping_add(i32::from(b)))
}

pub fn auto_seed<C: Clock>(clock: &C, hasher: &SeedHasher) -> u32 {
    hasher.hash(clock.seconds(), clock.ticks())
}
