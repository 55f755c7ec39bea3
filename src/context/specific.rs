use crate::{config::Config, generic::minimal_pcg::MinimalPCG32};

use rand_core::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as its source of entropy.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration, entropy seeded from the configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.rng_seed.to_le_bytes());
        Self::from_config_and_rng(config, rng)
    }
}
