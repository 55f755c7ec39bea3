//! A combinator virtual machine over nouns, with a self-delimiting wire codec.
//!
//! A *noun* is either an atom --- an immutable sequence of bytes --- or a cell of two nouns.
//! burl evaluates programs which are themselves nouns: a program is a cell of a *subject* (the data) and a *formula* (the code), and the formula's head selects one of seventeen opcodes.
//! Alongside the evaluator the crate provides the wire format for nouns: a bit-packed structure stream over a length-prefixed atom stream, self-delimiting once its header is read.
//!
//! Some guiding principles:
//! - High-level parts are easy to compose.
//! - Low-level parts are easy to modify.
//! - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/) and [rand](https://docs.rs/rand/latest/rand/).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built from a [configuration](crate::config), and own everything mutable during evaluation: the two [memo stores](crate::db), the source of entropy, and [counters](crate::context::Counters).
//! Everything else is pure:
//! - [structures](crate::structures) defines nouns, structural equality, and the content digest.
//! - [codec](crate::codec) encodes and decodes nouns for the wire.
//! - [procedures](crate::procedures) implements the reduction loop and its auxiliary operators (axis selection, increment, splice).
//!
//! Useful starting points, then, may be:
//! - The [reduce procedure](crate::procedures::eval) to inspect the dynamics of evaluation.
//! - The [opcode table](crate::procedures::opcode) for the formula language.
//! - The [wire format](crate::codec) for the byte-level encoding.
//!
//! # Examples
//!
//! + Evaluate a quotation.
//!
//! ```rust
//! # use burl::config::Config;
//! # use burl::context::Context;
//! # use burl::procedures::opcode;
//! # use burl::structures::noun::{IntoNoun, Noun};
//! let mut the_context = Context::from_config(Config::default());
//!
//! // Subject 42, formula [1 7]: quote the literal 7.
//! let program = (42u8, (opcode::QUOTE, 7u8)).into_noun();
//!
//! assert_eq!(the_context.eval(program), Ok(Noun::from_u8(7)));
//! ```
//!
//! + Round-trip a noun through the wire format.
//!
//! ```rust
//! # use burl::codec;
//! # use burl::structures::noun::IntoNoun;
//! let noun = (1u8, 2u8, 3u8).into_noun();
//!
//! let wire = codec::encode(&noun).unwrap();
//! assert_eq!(codec::decode(&wire), Ok(noun));
//! ```
//!
//! + Increment through the evaluator.
//!
//! ```rust
//! # use burl::config::Config;
//! # use burl::context::Context;
//! # use burl::procedures::opcode;
//! # use burl::structures::noun::{IntoNoun, Noun};
//! let mut the_context = Context::from_config(Config::default());
//!
//! // Subject 40, formula [4 0 1]: increment axis 1, the whole subject.
//! let program = (40u8, (opcode::INCREMENT, opcode::AXIS, 1u8)).into_noun();
//!
//! assert_eq!(the_context.eval(program), Ok(Noun::from_u8(41)));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made with a handful of targets, listed in [misc::log].
//! No log implementation is provided.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs of the reduction loop can be filtered with `RUST_LOG=eval …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod codec;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
