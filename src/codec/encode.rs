//! Encoding nouns for the wire.

use crate::structures::noun::{Noun, NounKind};
use crate::types::err::{self};

use super::{LITERAL_LIMIT, LONG_LENGTH_SENTINEL, SHORT_LENGTH_MAX};

/// Structure bits, packed low bit first.
struct BitWriter {
    bytes: Vec<u8>,
    write_bit: u8,
}

impl BitWriter {
    fn new() -> Self {
        BitWriter {
            bytes: Vec::new(),
            write_bit: 0,
        }
    }

    fn push(&mut self, bit: bool) {
        if self.write_bit == 0 {
            self.bytes.push(0);
        }

        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << self.write_bit;
        }

        self.write_bit = (self.write_bit + 1) & 7;
    }
}

/// Accumulates the atom bodies and structure bits of one noun.
struct Encoder {
    atoms: Vec<u8>,
    structure: BitWriter,
    atom_budget: usize,
}

impl Encoder {
    fn new(atom_budget: usize) -> Self {
        Encoder {
            atoms: Vec::new(),
            structure: BitWriter::new(),
            atom_budget,
        }
    }

    fn push_atom(&mut self, bytes: &[u8]) -> Result<(), err::EncodeError> {
        if bytes.len() == 1 && bytes[0] < LITERAL_LIMIT {
            self.atoms.push(bytes[0]);
        } else if bytes.len() <= SHORT_LENGTH_MAX {
            self.atoms.push(LITERAL_LIMIT + bytes.len() as u8);
            self.atoms.extend_from_slice(bytes);
        } else {
            self.atoms.push(LONG_LENGTH_SENTINEL);

            let mut remaining = bytes.len();
            while remaining >= 0x80 {
                self.atoms.push((remaining & 0x7F) as u8 | 0x80);
                remaining >>= 7;
            }
            self.atoms.push(remaining as u8);

            self.atoms.extend_from_slice(bytes);
        }

        if self.atoms.len() > self.atom_budget {
            return Err(err::EncodeError::AtomBudgetExceeded);
        }

        Ok(())
    }

    /// Preorder walk of the noun: a `1` bit per cell, a `0` bit and an atom body per atom.
    fn push_noun(&mut self, noun: &Noun) -> Result<(), err::EncodeError> {
        let mut pending = vec![noun];

        while let Some(next) = pending.pop() {
            match next.kind() {
                NounKind::Cell(left, right) => {
                    self.structure.push(true);
                    pending.push(right);
                    pending.push(left);
                }

                NounKind::Atom(bytes) => {
                    self.structure.push(false);
                    self.push_atom(bytes)?;
                }
            }
        }

        Ok(())
    }
}

/// The self-delimiting encoding of a lone atom.
///
/// This is the form atoms take inside the body region of an encoded noun; it carries no structure bits.
pub fn encode_atom(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = Encoder::new(usize::MAX);
    // The budget is unbounded, so pushing cannot fail.
    let _ = encoder.push_atom(bytes);
    encoder.atoms
}

/// Encodes a noun, bounding the byte length of the concatenated atom bodies.
///
/// The bound roughly caps the memory the encoding takes; exceeding it abandons the encoding.
pub fn encode_bounded(noun: &Noun, atom_budget: usize) -> Result<Vec<u8>, err::EncodeError> {
    let mut encoder = Encoder::new(atom_budget);
    encoder.push_noun(noun)?;

    let header = encode_atom(&usize_bytes(encoder.atoms.len()));

    log::trace!(
        target: crate::misc::log::targets::CODEC,
        "Encoded: {} header, {} atom, {} structure bytes",
        header.len(),
        encoder.atoms.len(),
        encoder.structure.bytes.len()
    );

    let mut wire = header;
    wire.extend_from_slice(&encoder.atoms);
    wire.extend_from_slice(&encoder.structure.bytes);
    Ok(wire)
}

/// Encodes a noun without an atom-body bound.
pub fn encode(noun: &Noun) -> Result<Vec<u8>, err::EncodeError> {
    encode_bounded(noun, usize::MAX)
}

/// The shortest little-endian bytes reading as `value`, empty for zero.
fn usize_bytes(mut value: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    while value != 0 {
        bytes.push((value & 0xFF) as u8);
        value >>= 8;
    }
    bytes
}
