/*!
The content digest of a noun.

The digest is a function of the noun's structural equality class: equal nouns digest equal, and the digest is deterministic within (and across) processes.
It is defined recursively over the tree, with the atom and cell cases domain-separated by a leading tag byte:

```none
digest(atom b)     = blake3(0x00 ‖ b)
digest(cell l r)   = blake3(0x01 ‖ digest(l) ‖ digest(r))
```

A cell's preimage is always 65 bytes and an atom's preimage never starts with the cell tag, so distinct trees collide only if blake3 does.
The walk is post-order with an explicit stack, as noun depth is not bounded by the native stack.

Digests key both [memo stores](crate::db) and are surfaced to programs by opcode 10 as 32-byte atoms.
*/

use super::{Noun, NounKind};

/// A content digest, as fixed-width bytes.
pub type Digest = [u8; 32];

/// The tag byte prefixed to an atom's bytes.
const ATOM_TAG: u8 = 0x00;

/// The tag byte prefixed to a cell's child digests.
const CELL_TAG: u8 = 0x01;

enum Walk<'n> {
    Visit(&'n Noun),
    Combine,
}

impl Noun {
    /// The content digest of this noun.
    pub fn digest(&self) -> Digest {
        let mut walk = vec![Walk::Visit(self)];
        let mut digests: Vec<Digest> = Vec::new();

        while let Some(task) = walk.pop() {
            match task {
                Walk::Visit(noun) => match noun.kind() {
                    NounKind::Atom(bytes) => {
                        let mut hasher = blake3::Hasher::new();
                        hasher.update(&[ATOM_TAG]);
                        hasher.update(bytes);
                        digests.push(*hasher.finalize().as_bytes());
                    }

                    NounKind::Cell(left, right) => {
                        walk.push(Walk::Combine);
                        walk.push(Walk::Visit(right));
                        walk.push(Walk::Visit(left));
                    }
                },

                Walk::Combine => {
                    let right = digests.pop().expect("! digest stack imbalance");
                    let left = digests.pop().expect("! digest stack imbalance");
                    let mut hasher = blake3::Hasher::new();
                    hasher.update(&[CELL_TAG]);
                    hasher.update(&left);
                    hasher.update(&right);
                    digests.push(*hasher.finalize().as_bytes());
                }
            }
        }

        digests.pop().expect("! digest stack imbalance")
    }

    /// The content digest as a 32-byte atom, the form opcode 10 returns.
    pub fn digest_atom(&self) -> Noun {
        Noun::atom(&self.digest()[..])
    }
}

/// Reads an atom's bytes back as a digest, when exactly digest-width.
pub fn digest_from_bytes(bytes: &[u8]) -> Option<Digest> {
    bytes.try_into().ok()
}
