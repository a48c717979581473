#![cfg_attr(
    feature = "cargo-clippy",
    allow(clippy::unreadable_literal)
)]

extern crate byteorder;
extern crate rand;

#[cfg(test)]
extern crate itertools;
#[cfg(test)]
extern crate rayon;

pub mod utils;

pub mod prng;

pub use prng::auto_seed::{Clock, SeedHasher, SeedSource, SystemClock, AUTO_SEED};
pub use prng::super_twister::RandomSuper;
pub use prng::Prng;
pub use utils::errors::{Error, Result};
