use crate::{
    config::{Config, StepCount},
    db::{hash::HashDB, key::KeyDB},
};

use super::Counters;

/// A generic context, parameterised to a source of entropy.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default](std::default::Default).
///
/// # Example
///
/// ```rust
/// # use burl::config::Config;
/// # use burl::context::GenericContext;
/// # use burl::generic::minimal_pcg::MinimalPCG32;
/// # use rand_core::SeedableRng;
/// let rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());
/// let the_context = GenericContext::from_config_and_rng(Config::default(), rng);
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context.
    pub counters: Counters,

    /// The hash store.
    /// See [db::hash](crate::db::hash) for details.
    pub hash_db: HashDB,

    /// The key store.
    /// See [db::key](crate::db::key) for details.
    pub key_db: KeyDB,

    /// The source of entropy for opcode 15.
    pub rng: R,

    /// Steps left in the current evaluation's budget, refilled by [eval](GenericContext::eval).
    pub(crate) fuel: StepCount,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context from a configuration and a given source of entropy.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            fuel: config.step_limit,

            counters: Counters::default(),

            hash_db: HashDB::new(),
            key_db: KeyDB::new(),

            config,

            rng,
        }
    }
}
