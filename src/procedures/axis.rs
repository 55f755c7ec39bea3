/*!
Axis selection: `/[1 x]` is `x` itself, and `/[2n x]`, `/[2n+1 x]` are the left and right children of `/[n x]`.

Equivalently, the binary digits of the axis below its most significant set bit spell the path from the root, `0` stepping left and `1` stepping right.
The walk below reads the axis atom that way: bits most significant first, leading zeros skipped.
An axis of zero has no set bit and selects nothing.
*/

use crate::structures::noun::{Noun, NounKind};
use crate::types::err::{self};

/// The part of `subject` at axis `index`.
pub fn axis(subject: &Noun, index: &Noun) -> Result<Noun, err::EvalError> {
    let index_bytes = match index.kind() {
        NounKind::Atom(bytes) => bytes,
        NounKind::Cell(_, _) => return Err(err::EvalError::CellAxis),
    };

    // Atoms are little-endian, so the walk runs from the last byte down.
    let mut bits = index_bytes
        .iter()
        .rev()
        .flat_map(|byte| (0..8).rev().map(move |position| byte & (1 << position) != 0));

    loop {
        match bits.next() {
            None => return Err(err::EvalError::AxisOutOfRange),
            Some(true) => break,
            Some(false) => {}
        }
    }

    let mut trace = subject;
    for step_right in bits {
        match trace.kind() {
            NounKind::Cell(left, right) => trace = if step_right { right } else { left },
            NounKind::Atom(_) => return Err(err::EvalError::AxisOutOfRange),
        }
    }

    Ok(trace.clone())
}
