//! The key store: nouns addressed by key nouns, compared structurally.

use std::collections::HashMap;

use crate::misc::log::targets::{self};
use crate::structures::noun::{Digest, Noun};

/// A mapping from key nouns to value nouns.
///
/// Keys are compared by structural equality.
/// Internally entries are addressed by the key's content digest and carry the key alongside the value; a read whose stored key fails the structural comparison is treated as absent rather than served, which confines a digest collision to a miss.
#[derive(Default)]
pub struct KeyDB {
    entries: HashMap<Digest, (Noun, Noun)>,
}

impl KeyDB {
    pub fn new() -> Self {
        KeyDB {
            entries: HashMap::new(),
        }
    }

    /// Stores `value` under `key`, displacing any value stored under an equal key.
    pub fn insert(&mut self, key: Noun, value: Noun) {
        let digest = key.digest();
        log::info!(target: targets::MEMO, "Key store: {:02x}{:02x}…", digest[0], digest[1]);
        self.entries.insert(digest, (key, value));
    }

    /// The value stored under a key structurally equal to `key`, if any.
    pub fn get(&self, key: &Noun) -> Option<&Noun> {
        let digest = key.digest();
        match self.entries.get(&digest) {
            None => None,

            Some((stored_key, value)) => {
                if stored_key == key {
                    Some(value)
                } else {
                    log::error!(target: targets::MEMO, "Digest collision in the key store");
                    None
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
