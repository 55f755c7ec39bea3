/*!
Byte-level operators over nouns.

Three operators treat a noun as a flat buffer of bytes:

- *flatten* reads a noun left to right as the concatenation of its atoms' bytes;
- *cut* partitions an atom's bytes by a tree-shaped specifier, each atom leaf of the specifier consuming its numeric value in bytes, and yields the shaped prefix paired with the unconsumed tail;
- *splice* is cut over the flattened bytes of any noun, with the tail discarded.

Splice streams bytes out of the tree lazily rather than flattening up front: shared subtrees make a noun's flattened size exponential in its depth, while a splice only ever touches the bytes its specifier asks for.
Consumption is bounded by an allocation ceiling, configured per context for opcode 16.
*/

use std::mem::size_of;

use crate::misc::log::targets::{self};
use crate::structures::noun::{Noun, NounKind};
use crate::types::err::{self};

/// An allocation budget for one carve.
struct Allowance {
    remaining: usize,
}

impl Allowance {
    fn charge(&mut self, amount: usize) -> Result<(), err::EvalError> {
        match self.remaining.checked_sub(amount) {
            Some(left) => {
                self.remaining = left;
                Ok(())
            }
            None => {
                log::trace!(target: targets::SPLICE, "Allocation ceiling exhausted");
                Err(err::EvalError::SpliceCeiling)
            }
        }
    }
}

/// The atoms of a noun, left to right, as one lazy stream of bytes.
struct ByteStream<'n> {
    pending: Vec<&'n Noun>,
    current: &'n [u8],
}

impl<'n> ByteStream<'n> {
    fn new(noun: &'n Noun) -> Self {
        ByteStream {
            pending: vec![noun],
            current: &[],
        }
    }

    /// Moves exactly `count` bytes into `into`, erring if the stream runs dry first.
    fn take(&mut self, count: usize, into: &mut Vec<u8>) -> Result<(), err::EvalError> {
        let mut needed = count;

        while needed > 0 {
            if self.current.is_empty() {
                let Some(next) = self.pending.pop() else {
                    return Err(err::EvalError::SpliceShort);
                };
                match next.kind() {
                    NounKind::Cell(left, right) => {
                        self.pending.push(right);
                        self.pending.push(left);
                    }
                    NounKind::Atom(bytes) => self.current = bytes,
                }
                continue;
            }

            let grabbed = needed.min(self.current.len());
            into.extend_from_slice(&self.current[..grabbed]);
            self.current = &self.current[grabbed..];
            needed -= grabbed;
        }

        Ok(())
    }

    /// Moves everything left in the stream into `into`.
    fn drain(&mut self, into: &mut Vec<u8>) {
        into.extend_from_slice(self.current);
        self.current = &[];

        while let Some(next) = self.pending.pop() {
            match next.kind() {
                NounKind::Cell(left, right) => {
                    self.pending.push(right);
                    self.pending.push(left);
                }
                NounKind::Atom(bytes) => into.extend_from_slice(bytes),
            }
        }
    }
}

enum Walk<'n> {
    Visit(&'n Noun),
    Combine,
}

/// Builds a noun shaped like `specifier`, each atom leaf filled with its own value's worth of bytes from `stream`.
fn carve(
    stream: &mut ByteStream,
    specifier: &Noun,
    allowance: &mut Allowance,
) -> Result<Noun, err::EvalError> {
    let mut walk = vec![Walk::Visit(specifier)];
    let mut built: Vec<Noun> = Vec::new();

    while let Some(task) = walk.pop() {
        match task {
            Walk::Visit(part) => {
                allowance.charge(size_of::<Noun>())?;

                match part.kind() {
                    NounKind::Cell(left, right) => {
                        walk.push(Walk::Combine);
                        walk.push(Walk::Visit(right));
                        walk.push(Walk::Visit(left));
                    }

                    NounKind::Atom(_) => {
                        let length = part.as_usize().ok_or(err::EvalError::InvalidLength)?;
                        allowance.charge(length)?;

                        let mut bytes = Vec::with_capacity(length);
                        stream.take(length, &mut bytes)?;
                        built.push(Noun::atom(bytes));
                    }
                }
            }

            Walk::Combine => {
                let right = built.pop().expect("! carve stack imbalance");
                let left = built.pop().expect("! carve stack imbalance");
                built.push(Noun::cell(left, right));
            }
        }
    }

    Ok(built.pop().expect("! carve stack imbalance"))
}

/// The flattened bytes of a noun: an atom's bytes, or the flattening of both halves of a cell, left first.
///
/// Materialises the whole buffer; shared subtrees are copied once per occurrence, so the result may dwarf the noun itself.
pub fn flatten(noun: &Noun) -> Vec<u8> {
    let mut bytes = Vec::new();
    ByteStream::new(noun).drain(&mut bytes);
    bytes
}

/// Partitions the atom `data` by the shape of `specifier`, yielding `[shaped tail]`.
pub fn cut(data: &Noun, specifier: &Noun, ceiling: usize) -> Result<Noun, err::EvalError> {
    if data.is_cell() {
        return Err(err::EvalError::MalformedArgument);
    }

    let mut stream = ByteStream::new(data);
    let mut allowance = Allowance { remaining: ceiling };

    let shaped = carve(&mut stream, specifier, &mut allowance)?;

    let mut tail = Vec::new();
    stream.drain(&mut tail);

    Ok(Noun::cell(shaped, Noun::atom(tail)))
}

/// Flattens `data` and carves it to the shape of `specifier`, discarding the unconsumed tail.
pub fn splice(data: &Noun, specifier: &Noun, ceiling: usize) -> Result<Noun, err::EvalError> {
    let mut stream = ByteStream::new(data);
    let mut allowance = Allowance { remaining: ceiling };

    carve(&mut stream, specifier, &mut allowance)
}

#[cfg(test)]
mod splice_tests {
    use super::*;
    use crate::structures::noun::IntoNoun;

    fn roomy() -> usize {
        1_000_000
    }

    #[test]
    fn cut_splits_an_atom() {
        assert_eq!(
            splice(
                &(&[1, 2, 3, 4, 5][..]).into_noun(),
                &(2_u8, 3_u8).into_noun(),
                roomy()
            ),
            Ok((&[1, 2][..], &[3, 4, 5][..]).into_noun())
        );
    }

    #[test]
    fn join_across_leaves() {
        assert_eq!(
            splice(
                &(&[1, 2][..], &[3, 4, 5][..]).into_noun(),
                &5_u8.into_noun(),
                roomy()
            ),
            Ok((&[1, 2, 3, 4, 5][..]).into_noun())
        );
    }

    #[test]
    fn join_across_empty_leaves() {
        assert_eq!(
            splice(
                &(&[1, 2][..], &[][..], &[3, 4, 5][..], &[][..]).into_noun(),
                &5_u8.into_noun(),
                roomy()
            ),
            Ok((&[1, 2, 3, 4, 5][..]).into_noun())
        );
    }

    #[test]
    fn rearrange_boundaries() {
        assert_eq!(
            splice(
                &(&[1, 2][..], &[3, 4, 5][..]).into_noun(),
                &(3_u8, 2_u8).into_noun(),
                roomy()
            ),
            Ok((&[1, 2, 3][..], &[4, 5][..]).into_noun())
        );
    }

    #[test]
    fn short_data_fails() {
        assert_eq!(
            splice(
                &(&[1, 2][..], &[3, 4, 5][..]).into_noun(),
                &6_u8.into_noun(),
                roomy()
            ),
            Err(err::EvalError::SpliceShort)
        );
    }

    #[test]
    fn ceiling_bounds_consumption() {
        // Fifty doublings of a byte: a terabyte-scale flattening, never materialised.
        let mut data = 1_u8.into_noun();
        for _ in 0..50 {
            data = Noun::cell(data.clone(), data.clone());
        }

        assert_eq!(
            splice(&data, &(&2_000_000_usize.to_le_bytes()[..]).into_noun(), roomy()),
            Err(err::EvalError::SpliceCeiling)
        );
    }

    #[test]
    fn flatten_concatenates_leaves() {
        assert_eq!(
            flatten(&(&[1, 2][..], &[][..], &[3][..]).into_noun()),
            vec![1, 2, 3]
        );
        assert_eq!(flatten(&(&[][..]).into_noun()), Vec::<u8>::new());
    }

    #[test]
    fn cut_keeps_the_tail() {
        assert_eq!(
            cut(
                &(&[1, 2, 3, 4, 5][..]).into_noun(),
                &2_u8.into_noun(),
                roomy()
            ),
            Ok(((&[1, 2][..]).into_noun(), (&[3, 4, 5][..]).into_noun()).into_noun())
        );
        assert_eq!(
            cut(
                &(1_u8, 2_u8).into_noun(),
                &1_u8.into_noun(),
                roomy()
            ),
            Err(err::EvalError::MalformedArgument)
        );
    }
}
