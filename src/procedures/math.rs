//! Numeric operations on atoms.

use crate::structures::noun::Noun;
use crate::types::err::{self};

/// The atom reading as one more than `noun`, which must be an atom.
///
/// Bytes are kept as given and widened only when the carry runs off the end, so the result always has enough bytes to hold the incremented value.
pub fn increment(noun: &Noun) -> Result<Noun, err::EvalError> {
    let bytes = noun
        .atom_bytes()
        .ok_or(err::EvalError::IncrementOnCell)?;

    let mut incremented = bytes.to_vec();
    let mut position = 0;
    while position < incremented.len() {
        let (sum, wrapped) = incremented[position].overflowing_add(1);
        incremented[position] = sum;
        if !wrapped {
            break;
        }
        position += 1;
    }
    if position == incremented.len() {
        incremented.push(1);
    }

    Ok(Noun::atom(incremented))
}
