/*!
The opcode table.

A formula is a cell whose head selects an operation.
When the head is itself a cell the formula is instead read by the *autocons* rule: both halves are formulas, evaluated against the same subject and paired.

Forms are written `[a op …]` with `a` the subject.
`0` answers yes and `1` answers no throughout.
*/

/// `[a 0 b]`: the part of `a` at axis `b`.
pub const AXIS: u8 = 0;

/// `[a 1 b]`: `b`, unevaluated.
pub const QUOTE: u8 = 1;

/// `[a 2 b c]`: evaluate `*[a c]` as a formula against the subject `*[a b]`.
pub const APPLY: u8 = 2;

/// `[a 3 b]`: is `*[a b]` a cell.
pub const IS_CELL: u8 = 3;

/// `[a 4 b]`: `*[a b]` read as a number, plus one.
pub const INCREMENT: u8 = 4;

/// `[a 5 b]`: are the halves of the pair `*[a b]` structurally equal.
pub const IS_EQUAL: u8 = 5;

/// `[a 6 b c d]`: if `*[a b]` then `*[a c]` else `*[a d]`.
pub const BRANCH: u8 = 6;

/// `[a 7 b c]`: `*[*[a b] c]`, composition.
pub const COMPOSE: u8 = 7;

/// `[a 8 b c]`: `*[[*[a b] a] c]`, the subject extended with a computed head.
pub const PUSH: u8 = 8;

/// `[a 9 b c]`: evaluate the core `*[a c]`, then run the formula at its axis `b` against it.
pub const INVOKE: u8 = 9;

/// `[a 10 b]`: the content digest of `*[a b]`, as a 32-byte atom.
pub const DIGEST: u8 = 10;

/// `[a 11 b]`: store `*[a b]` in the hash store under its own digest.
pub const MEMO_HASH: u8 = 11;

/// `[a 12 b]`: fetch from the hash store by the digest `*[a b]`; `[0 X]` on a hit, `1` on a miss.
pub const FETCH_HASH: u8 = 12;

/// `[a 13 b c]`: store `*[a c]` in the key store under the key `*[a b]`.
pub const MEMO_KEY: u8 = 13;

/// `[a 14 b]`: fetch from the key store by the key `*[a b]`; `[0 X]` on a hit, `1` on a miss.
pub const FETCH_KEY: u8 = 14;

/// `[a 15 b]`: a fresh atom of `*[a b]` entropy bytes.
pub const RANDOM: u8 = 15;

/// `[a 16 b c]`: the bytes of `*[a b]`, flattened and carved to the shape of `*[a c]`.
pub const SPLICE: u8 = 16;
