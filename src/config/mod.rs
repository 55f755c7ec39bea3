/*!
Configuration of a context.

All configuration for a context is contained within the context, fixed when the context is built.
Each field is a plain value with a documented default.
The defaults are chosen to give deterministic results on a library of tests while keeping a runaway program from exhausting the host.
*/

/// Representation used for the reduction step budget.
pub type StepCount = u64;

/// Representation used for byte ceilings.
pub type ByteCount = usize;

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The number of reduction steps an [eval](crate::context::GenericContext::eval) call may take, with `0` read as unbounded.
    ///
    /// The budget is refilled by `eval` and drained once per trip around the reduction loop.
    pub step_limit: StepCount,

    /// The most bytes a single entropy draw (opcode 15) may request.
    pub random_ceiling: ByteCount,

    /// The most bytes a single splice (opcode 16) may consume from the flattened buffer.
    pub splice_ceiling: ByteCount,

    /// The seed for the default source of entropy.
    ///
    /// Two contexts built from equal configurations draw identical entropy, which keeps programs using opcode 15 reproducible.
    pub rng_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            step_limit: 0,

            random_ceiling: 1_000_000,

            splice_ceiling: 10_000_000,

            rng_seed: 0,
        }
    }
}
