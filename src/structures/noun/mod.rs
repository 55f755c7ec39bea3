/*!
(The representation of) a noun.

A noun is either an *atom* --- an immutable, possibly empty, ordered sequence of bytes --- or a *cell* of two nouns.
Surface notation is right-associative: `[a b c]` denotes `[a [b c]]`.

Atoms carry no canonical numeric reading.
Where an operation needs a number (an opcode, an axis, a length) the atom is read as an unsigned little-endian integer, so trailing zero bytes do not change the numeric value.
Equality is byte-exact: `[0x05]` and `[0x05 0x00]` are *different* atoms which read as the same number.

# Sharing

Subtrees are shared through [Rc], so a noun may appear inside many parents without copies.
Cloning a noun is cheap, and nouns produced by the codec or the evaluator freely alias one another.
Nouns are finite trees; no cycle can be constructed through the public surface.

Because deep nouns arrive from the wire, structural equality and the [content digest](crate::structures::noun::Digest) walk with explicit stacks rather than native recursion.
*/

use std::fmt;
use std::rc::Rc;

mod build;
pub use build::IntoNoun;

mod hash;
pub use hash::{digest_from_bytes, Digest};

/// A noun: an atom of bytes, or a cell of two nouns.
#[derive(Clone)]
pub enum Noun {
    /// An immutable sequence of bytes.
    Atom(Rc<[u8]>),

    /// An ordered pair of nouns.
    Cell(Rc<Noun>, Rc<Noun>),
}

/// A borrowed view of a noun, convenient for matching.
pub enum NounKind<'n> {
    Atom(&'n [u8]),
    Cell(&'n Noun, &'n Noun),
}

impl Noun {
    /// An atom with the given bytes.
    pub fn atom(bytes: impl Into<Rc<[u8]>>) -> Self {
        Noun::Atom(bytes.into())
    }

    /// A cell of the given nouns.
    pub fn cell(left: Noun, right: Noun) -> Self {
        Noun::Cell(Rc::new(left), Rc::new(right))
    }

    /// The single-byte atom holding `value`.
    pub fn from_u8(value: u8) -> Self {
        Noun::atom(&[value][..])
    }

    /// The shortest little-endian atom reading as `value`, with zero as the empty atom.
    pub fn from_usize(mut value: usize) -> Self {
        let mut bytes = Vec::new();
        while value != 0 {
            bytes.push((value & 0xFF) as u8);
            value >>= 8;
        }
        Noun::atom(bytes)
    }

    /// The single-byte answer atom: `0` for yes, `1` for no.
    ///
    /// The dispatch table reads `0` as affirmative, so cell tests, equality tests, and branch conditions all use this convention.
    pub fn from_bool(answer: bool) -> Self {
        Noun::from_u8(if answer { 0 } else { 1 })
    }

    /// A borrowed view for matching.
    pub fn kind(&self) -> NounKind<'_> {
        match self {
            Noun::Atom(bytes) => NounKind::Atom(bytes),
            Noun::Cell(left, right) => NounKind::Cell(left, right),
        }
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Noun::Cell(_, _))
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Noun::Atom(_))
    }

    /// The atom's bytes, if an atom.
    pub fn atom_bytes(&self) -> Option<&[u8]> {
        match self {
            Noun::Atom(bytes) => Some(bytes),
            Noun::Cell(_, _) => None,
        }
    }

    /// Borrows of both children, if a cell.
    pub fn as_cell(&self) -> Option<(&Noun, &Noun)> {
        match self {
            Noun::Cell(left, right) => Some((left, right)),
            Noun::Atom(_) => None,
        }
    }

    /// Both children by (cheap) clone, if a cell.
    pub fn into_cell(self) -> Option<(Noun, Noun)> {
        match &self {
            Noun::Cell(left, right) => Some(((**left).clone(), (**right).clone())),
            Noun::Atom(_) => None,
        }
    }

    /// The numeric reading of an atom which fits in a byte.
    ///
    /// `None` for cells and for atoms whose bytes past the first are not all zero.
    pub fn as_u8(&self) -> Option<u8> {
        let bytes = self.atom_bytes()?;
        match bytes.split_first() {
            None => Some(0),
            Some((first, rest)) => {
                if rest.iter().all(|byte| *byte == 0) {
                    Some(*first)
                } else {
                    None
                }
            }
        }
    }

    /// The numeric reading of an atom which fits in memory-index range.
    ///
    /// `None` for cells and for atoms whose numeric reading overflows.
    pub fn as_usize(&self) -> Option<usize> {
        let bytes = self.atom_bytes()?;
        let mut value: u64 = 0;
        for (position, byte) in bytes.iter().enumerate() {
            if position < 8 {
                value |= (*byte as u64) << (8 * position);
            } else if *byte != 0 {
                return None;
            }
        }
        usize::try_from(value).ok()
    }
}

impl Drop for Noun {
    /// Cells whose children are shared or shallow drop as derived.
    /// A uniquely owned chain of cells is torn down with an explicit stack, as its depth may exceed the native stack.
    fn drop(&mut self) {
        let (left, right) = match self {
            Noun::Cell(left, right) => (left, right),
            Noun::Atom(_) => return,
        };

        let unique_cell = |child: &Rc<Noun>| child.is_cell() && Rc::strong_count(child) == 1;
        if !unique_cell(left) && !unique_cell(right) {
            return;
        }

        let placeholder: Rc<Noun> = Rc::new(Noun::Atom(Rc::from(&[][..])));
        let mut pending = vec![
            std::mem::replace(left, placeholder.clone()),
            std::mem::replace(right, placeholder.clone()),
        ];

        while let Some(node) = pending.pop() {
            if let Ok(mut owned) = Rc::try_unwrap(node) {
                if let Noun::Cell(left, right) = &mut owned {
                    pending.push(std::mem::replace(left, placeholder.clone()));
                    pending.push(std::mem::replace(right, placeholder.clone()));
                }
            }
        }
    }
}

/// Byte-exact structural equality, with a pointer shortcut for shared subtrees.
impl PartialEq for Noun {
    fn eq(&self, other: &Noun) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Noun::Atom(a_bytes), Noun::Atom(b_bytes)) => {
                    if a_bytes != b_bytes {
                        return false;
                    }
                }

                (Noun::Cell(a_left, a_right), Noun::Cell(b_left, b_right)) => {
                    if Rc::ptr_eq(a_left, b_left) && Rc::ptr_eq(a_right, b_right) {
                        continue;
                    }
                    pending.push((a_right, b_right));
                    pending.push((a_left, b_left));
                }

                _ => return false,
            }
        }

        true
    }
}

impl Eq for Noun {}

impl fmt::Display for Noun {
    /// Surface notation: cells bracketed and flattened rightward, atoms decimal when at most eight bytes and little-endian hex otherwise.
    ///
    /// The decimal reading is not injective --- `[0x05]` and `[0x05 0x00]` both print as `5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            NounKind::Atom(bytes) => {
                if bytes.len() <= 8 {
                    let mut value: u64 = 0;
                    for (position, byte) in bytes.iter().enumerate() {
                        value |= (*byte as u64) << (8 * position);
                    }
                    write!(f, "{value}")
                } else {
                    write!(f, "0x")?;
                    for byte in bytes.iter().rev() {
                        write!(f, "{byte:02x}")?;
                    }
                    Ok(())
                }
            }

            NounKind::Cell(left, right) => {
                write!(f, "[{left}")?;
                let mut tail: &Noun = right;
                loop {
                    match tail.kind() {
                        NounKind::Cell(next_left, next_right) => {
                            write!(f, " {next_left}")?;
                            tail = next_right;
                        }
                        NounKind::Atom(_) => {
                            write!(f, " {tail}")?;
                            break;
                        }
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Debug for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
