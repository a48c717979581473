//! `rand` integration, so a `RandomSuper` can drive anything written against
//! `RngCore` (distributions, shuffles, `gen_range`).

use super::auto_seed::SeedSource;
use super::super_twister::RandomSuper;
use super::Prng;
use byteorder::{ByteOrder, LittleEndian};
use rand::{Error, RngCore, SeedableRng};

impl RngCore for RandomSuper {
    fn next_u32(&mut self) -> u32 {
        self.random_uint32_uniform()
    }

    /// Low word is drawn first.
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.random_uint32_uniform());
        let high = u64::from(self.random_uint32_uniform());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut word = [0u8; 4];
        for chunk in dest.chunks_mut(4) {
            LittleEndian::write_u32(&mut word, self.random_uint32_uniform());
            let len = chunk.len();
            chunk.copy_from_slice(&word[..len]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for RandomSuper {
    type Seed = [u8; 4];

    /// Always seeds explicitly, even when the bytes spell `AUTO_SEED`.
    fn from_seed(seed: [u8; 4]) -> RandomSuper {
        RandomSuper::with_source(SeedSource::Explicit(LittleEndian::read_u32(&seed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn next_u64_packs_low_word_first() {
        let mut rng = RandomSuper::new(0xDEADBEEF);
        assert_eq!(rng.next_u64(), 0x150fcfb1563b95f8);
    }

    #[test]
    fn fill_bytes_truncates_last_word() {
        let mut rng = RandomSuper::new(0xDEADBEEF);
        let mut buf = [0u8; 6];
        rng.fill_bytes(&mut buf);
        assert_eq!(buf, [248, 149, 59, 86, 177, 207]);

        // the partial word is still consumed
        assert_eq!(rng.next_u32(), 0x35f4cdce);
    }

    #[test]
    fn try_fill_bytes_never_fails() {
        let mut rng = RandomSuper::new(5);
        let mut buf = vec![0u8; 4096];
        assert!(rng.try_fill_bytes(&mut buf).is_ok());
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn from_seed_is_little_endian_and_explicit() {
        let a = RandomSuper::from_seed([0xef, 0xbe, 0xad, 0xde]);
        assert_eq!(a, RandomSuper::new(0xDEADBEEF));

        let b = RandomSuper::from_seed([0xff; 4]);
        let c = RandomSuper::from_seed([0xff; 4]);
        assert_eq!(b, c);
    }

    #[test]
    fn drives_rand_helpers() {
        let mut rng = RandomSuper::new(0xDEADBEEF);
        for _ in 0..1000 {
            let v = rng.gen_range(10, 20);
            assert!(v >= 10 && v < 20);
        }

        let mut deck: Vec<u32> = (0..52).collect();
        rng.shuffle(&mut deck);
        let mut sorted = deck.clone();
        sorted.sort();
        assert_eq!(sorted, (0..52).collect::<Vec<u32>>());
    }
}
