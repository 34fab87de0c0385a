use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Draws one seed per climber from the master stream, in population order.
///
/// Climber `i` always gets the `i`-th draw, whichever thread ends up running it.
pub fn climber_seeds<R: RngCore + ?Sized>(master: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| master.gen::<u64>()).collect()
}

pub fn master_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

pub fn climber_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
