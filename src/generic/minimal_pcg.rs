/*!
A simple pseudorandom number generator.

Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/> implemented to satisfy the [RngCore](rand_core::RngCore) trait.

PCG(32) was chosen as the default source of entropy as it is simple, fast, seedable, and has some nice supporting documentation.
Entropy drawn by opcode 15 comes from whichever generator the [context](crate::context::GenericContext) is parameterised to, and a [Context](crate::context::Context) fixes this to [MinimalPCG32] seeded from the [configuration](crate::config::Config::rng_seed).
Determinism matters more than quality here: tests of programs which draw entropy stay stable across runs, and a host wanting cryptographic bytes parameterises the context differently.
*/

use rand_core::{impls, Error, RngCore, SeedableRng};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// The increment suggested by the PCG paper's minimal implementation.
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn zero_seed() {
        let mut zero_seed = MinimalPCG32::from_seed(0_u64.to_le_bytes());

        assert_eq!(zero_seed.next_u32(), 1613493245);
        assert_eq!(zero_seed.next_u32(), 3894649422);
        assert_eq!(zero_seed.next_u32(), 2055130073);
        assert_eq!(zero_seed.next_u32(), 2315086854);
        assert_eq!(zero_seed.next_u32(), 2925816488);
    }

    #[test]
    fn seven_seed() {
        let mut seven_seed = MinimalPCG32::from_seed(7_u64.to_le_bytes());

        assert_eq!(seven_seed.next_u32(), 1613493245);
        assert_eq!(seven_seed.next_u32(), 1273465047);
        assert_eq!(seven_seed.next_u32(), 4201302492);
        assert_eq!(seven_seed.next_u32(), 1760530922);
        assert_eq!(seven_seed.next_u32(), 3811196712);
    }

    #[test]
    fn same_seed_same_bytes() {
        let mut first = MinimalPCG32::from_seed(21_u64.to_le_bytes());
        let mut second = MinimalPCG32::from_seed(21_u64.to_le_bytes());

        let mut first_buffer = [0_u8; 24];
        let mut second_buffer = [0_u8; 24];
        first.fill_bytes(&mut first_buffer);
        second.fill_bytes(&mut second_buffer);

        assert_eq!(first_buffer, second_buffer);
    }
}
