//! Generic structures with no particular tie to nouns.

pub mod minimal_pcg;
