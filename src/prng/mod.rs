pub mod auto_seed;
pub mod rng;
pub mod super_twister;

/// Scale applied to a signed draw by `random_double_uniform`, roughly `2^-32`.
pub const UINT32_TO_UNIT: f64 = 2.328306436538696e-10;

pub trait Prng {
    fn new(seed: u32) -> Self
    where
        Self: Sized;

    /// One tempered 32-bit word, uniform over the whole range.
    fn random_uint32_uniform(&mut self) -> u32;

    /// Multiply-high scaling into `[0, scale)`. A zero scale always yields 0
    /// but still consumes a draw.
    fn random_uint32_scaled(&mut self, scale: u32) -> u32 {
        let draw = u64::from(self.random_uint32_uniform());
        ((u64::from(scale) * draw) >> 32) as u32
    }

    /// `min + random_uint32_scaled(max - min)`.
    ///
    /// Callers must keep `max >= min`. Otherwise the width wraps to a large
    /// unsigned value and the result wraps with it.
    fn random_sint32_range_uniform(&mut self, min: i32, max: i32) -> i32 {
        let width = max.wrapping_sub(min) as u32;
        min.wrapping_add(self.random_uint32_scaled(width) as i32)
    }

    /// The draw is read as a signed word, so results land in `[0, 1)`.
    fn random_double_uniform(&mut self) -> f64 {
        let draw = self.random_uint32_uniform() as i32;
        f64::from(draw) * UINT32_TO_UNIT + 0.5
    }

    fn random_double_range_uniform(&mut self, min: f64, max: f64) -> f64 {
        self.random_double_uniform() * (max - min) + min
    }
}
