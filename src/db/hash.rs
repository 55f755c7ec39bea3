//! The hash store: nouns addressed by their own content digest.

use std::collections::HashMap;

use crate::misc::log::targets::{self};
use crate::structures::noun::{Digest, Noun};

/// A mapping from content digests to the nouns carrying them.
///
/// Insertion is idempotent: a digest fixes its noun up to structural equality, so storing under a present digest changes nothing observable.
#[derive(Default)]
pub struct HashDB {
    entries: HashMap<Digest, Noun>,
}

impl HashDB {
    pub fn new() -> Self {
        HashDB {
            entries: HashMap::new(),
        }
    }

    /// Stores `noun` under its own digest.
    pub fn insert(&mut self, digest: Digest, noun: Noun) {
        log::info!(target: targets::MEMO, "Hash store: {:02x}{:02x}…", digest[0], digest[1]);
        self.entries.entry(digest).or_insert(noun);
    }

    /// The noun stored under `digest`, if any.
    pub fn get(&self, digest: &Digest) -> Option<&Noun> {
        self.entries.get(digest)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
