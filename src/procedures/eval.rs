/*!
Evaluation of a program noun.

# Overview

A program is a cell `[subject formula]` and its product is written `*[subject formula]`.
The formula's head picks a row of the [opcode table](crate::procedures::opcode), except that a cell head reads by the *autocons* rule: both halves are formulas against the same subject and the product is the cell of their products.

Evaluation is structural recursion over the formula, arranged so that loops run in constant native stack.
Opcodes 2, 7, 8 and 9, and the chosen branch of opcode 6, do not return through their caller: each replaces the subject and formula and continues the `'reduce` loop.
Only operand evaluations recurse, so native stack use is bounded by the depth of the formula rather than by the length of any loop the program expresses.

Roughly, the loop is as diagrammed:

```none
        +------------------+
  +---->| poll step budget |
  |     +------------------+
  |               |
  |               ⌄
  |     +------------------+     autocons, or opcodes 0, 1, 3, 4, 5,
  |     | dispatch on head |---> 10..=16: reduce operands and return
  |     +------------------+
  |               |
  |               | opcodes 2, 6, 7, 8, 9
  |               ⌄
  |     +----------------------------+
  +-----| replace subject w/ formula |
        +----------------------------+
```

The budget poll at the top of the loop is the interposition point for host cancellation: a bounded context aborts with no product, leaving any memo writes already made in place.

# Example

```rust
# use burl::config::Config;
# use burl::context::Context;
# use burl::procedures::opcode;
# use burl::structures::noun::{IntoNoun, Noun};
let mut the_context = Context::from_config(Config::default());

// [[98 99] [0 3]]: the right half of the subject.
let program = ((98u8, 99u8), (opcode::AXIS, 3u8)).into_noun();
assert_eq!(the_context.eval(program), Ok(Noun::from_u8(99)));
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::{axis::axis, math::increment, opcode, splice::splice},
    structures::noun::{digest_from_bytes, Noun},
    types::err::{self},
};

/// Splits an opcode argument expected to hold two parts.
fn pair(argument: Noun) -> Result<(Noun, Noun), err::EvalError> {
    argument.into_cell().ok_or(err::EvalError::MalformedArgument)
}

/// Splits an opcode argument expected to hold three parts.
fn triple(argument: Noun) -> Result<(Noun, Noun, Noun), err::EvalError> {
    let (first, rest) = pair(argument)?;
    let (second, third) = pair(rest)?;
    Ok((first, second, third))
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Evaluates the program `[subject formula]`, refilling the step budget first.
    pub fn eval(&mut self, program: Noun) -> Result<Noun, err::EvalError> {
        self.fuel = self.config.step_limit;

        match program.into_cell() {
            Some((subject, formula)) => self.reduce(subject, formula),
            None => Err(err::EvalError::AtomicProgram),
        }
    }

    /// Computes `*[subject formula]` against whatever step budget remains.
    pub fn reduce(&mut self, mut subject: Noun, mut formula: Noun) -> Result<Noun, err::EvalError> {
        'reduce: loop {
            if self.config.step_limit != 0 {
                if self.fuel == 0 {
                    return Err(err::EvalError::StepLimitExceeded);
                }
                self.fuel -= 1;
            }
            self.counters.reductions += 1;
            log::trace!(target: targets::EVAL, "Reduction {}", self.counters.reductions);

            let (head, argument) = match formula.into_cell() {
                Some(parts) => parts,
                None => return Err(err::EvalError::AtomicFormula),
            };

            if head.is_cell() {
                // Autocons: the head and argument are both formulas.
                let left = self.reduce(subject.clone(), head)?;
                let right = self.reduce(subject, argument)?;
                return Ok(Noun::cell(left, right));
            }

            let operation = head.as_u8().ok_or(err::EvalError::NotAnOpcode)?;

            match operation {
                opcode::AXIS => return axis(&subject, &argument),

                opcode::QUOTE => return Ok(argument),

                opcode::APPLY => {
                    let (subject_formula, formula_formula) = pair(argument)?;
                    let next_subject = self.reduce(subject.clone(), subject_formula)?;
                    let next_formula = self.reduce(subject, formula_formula)?;

                    subject = next_subject;
                    formula = next_formula;
                    continue 'reduce;
                }

                opcode::IS_CELL => {
                    let product = self.reduce(subject, argument)?;
                    return Ok(Noun::from_bool(product.is_cell()));
                }

                opcode::INCREMENT => {
                    let product = self.reduce(subject, argument)?;
                    return increment(&product);
                }

                opcode::IS_EQUAL => {
                    let product = self.reduce(subject, argument)?;
                    match product.as_cell() {
                        Some((left, right)) => return Ok(Noun::from_bool(left == right)),
                        None => return Err(err::EvalError::EqualityOnAtom),
                    }
                }

                opcode::BRANCH => {
                    let (condition_formula, when_yes, when_no) = triple(argument)?;
                    let condition = self.reduce(subject.clone(), condition_formula)?;

                    match condition.as_u8() {
                        Some(0) => formula = when_yes,
                        Some(1) => formula = when_no,
                        _ => return Err(err::EvalError::BranchCondition),
                    }
                    continue 'reduce;
                }

                opcode::COMPOSE => {
                    let (first, second) = pair(argument)?;
                    subject = self.reduce(subject, first)?;
                    formula = second;
                    continue 'reduce;
                }

                opcode::PUSH => {
                    let (grow, against) = pair(argument)?;
                    let grown = self.reduce(subject.clone(), grow)?;

                    subject = Noun::cell(grown, subject);
                    formula = against;
                    continue 'reduce;
                }

                opcode::INVOKE => {
                    let (arm, core_formula) = pair(argument)?;
                    let core = self.reduce(subject, core_formula)?;

                    formula = axis(&core, &arm)?;
                    subject = core;
                    continue 'reduce;
                }

                opcode::DIGEST => {
                    let product = self.reduce(subject, argument)?;
                    return Ok(product.digest_atom());
                }

                opcode::MEMO_HASH => {
                    let product = self.reduce(subject, argument)?;
                    self.hash_db.insert(product.digest(), product);
                    return Ok(Noun::from_bool(true));
                }

                opcode::FETCH_HASH => {
                    let address = self.reduce(subject, argument)?;

                    let found = address
                        .atom_bytes()
                        .and_then(digest_from_bytes)
                        .and_then(|digest| self.hash_db.get(&digest).cloned());

                    match found {
                        Some(stored) => {
                            self.counters.hash_hits += 1;
                            return Ok(Noun::cell(Noun::from_bool(true), stored));
                        }
                        None => {
                            self.counters.hash_misses += 1;
                            return Ok(Noun::from_bool(false));
                        }
                    }
                }

                opcode::MEMO_KEY => {
                    let (key_formula, value_formula) = pair(argument)?;
                    let key = self.reduce(subject.clone(), key_formula)?;
                    let value = self.reduce(subject, value_formula)?;

                    self.key_db.insert(key, value);
                    return Ok(Noun::from_bool(true));
                }

                opcode::FETCH_KEY => {
                    let key = self.reduce(subject, argument)?;

                    match self.key_db.get(&key).cloned() {
                        Some(stored) => {
                            self.counters.key_hits += 1;
                            return Ok(Noun::cell(Noun::from_bool(true), stored));
                        }
                        None => {
                            self.counters.key_misses += 1;
                            return Ok(Noun::from_bool(false));
                        }
                    }
                }

                opcode::RANDOM => {
                    let length = self
                        .reduce(subject, argument)?
                        .as_usize()
                        .ok_or(err::EvalError::InvalidLength)?;

                    if length > self.config.random_ceiling {
                        return Err(err::EvalError::EntropyExhausted);
                    }

                    let mut bytes = vec![0_u8; length];
                    self.rng.fill_bytes(&mut bytes);
                    self.counters.random_bytes += length as u64;

                    return Ok(Noun::atom(bytes));
                }

                opcode::SPLICE => {
                    let (data_formula, shape_formula) = pair(argument)?;
                    let data = self.reduce(subject.clone(), data_formula)?;
                    let shape = self.reduce(subject, shape_formula)?;

                    return splice(&data, &shape, self.config.splice_ceiling);
                }

                unknown => return Err(err::EvalError::UnknownOpcode(unknown)),
            }
        }
    }
}
