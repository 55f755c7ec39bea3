//! Counters over the lifetime of a context.

/// Running totals, never reset by the library.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// Trips around the reduction loop, across every evaluation.
    pub reductions: u64,

    /// Hash store reads which found an entry.
    pub hash_hits: u64,

    /// Hash store reads which found nothing.
    pub hash_misses: u64,

    /// Key store reads which found an entry.
    pub key_hits: u64,

    /// Key store reads which found nothing.
    pub key_misses: u64,

    /// Bytes drawn from the entropy source.
    pub random_bytes: u64,
}
