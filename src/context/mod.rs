/*!
The context --- within which programs are evaluated.

Strictly, a [GenericContext] and a [Context].

The generic context is parameterised to the source of entropy drawn on by opcode 15.
This helps distinguish generic context methods from those intended for a particular application, and lets tests fix entropy completely.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of entropy to be supplied alongside a config.

A context owns all state which outlives a single evaluation: the two [memo stores](crate::db), the entropy source, and [Counters].
Everything else about evaluation is pure.
A context is single-threaded; the compliant way to evaluate on several threads is one context per thread.

# Example
```rust
# use burl::config::Config;
# use burl::context::Context;
# use burl::procedures::opcode;
# use burl::structures::noun::{IntoNoun, Noun};
let mut the_context = Context::from_config(Config::default());

// Store 7 under the key 3, then fetch it back: [0 7] marks a hit.
let store = (3_u8, (opcode::MEMO_KEY, (opcode::AXIS, 1u8), (opcode::QUOTE, 7u8))).into_noun();
assert_eq!(the_context.eval(store), Ok(Noun::from_u8(0)));

let fetch = (3_u8, (opcode::FETCH_KEY, (opcode::AXIS, 1u8))).into_noun();
assert_eq!(the_context.eval(fetch), Ok((0u8, 7u8).into_noun()));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
