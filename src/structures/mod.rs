//! Structures, abstract and concrete, of nouns.

pub mod noun;
