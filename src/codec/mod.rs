/*!
The wire format for nouns.

A noun on the wire is three regions, back to back:

```none
header ‖ atom bodies ‖ packed structure bits
```

- The *header* is the atom-encoding of the total byte length of the atom bodies.
- The *atom bodies* are the atom-encodings of every atom in the noun, in preorder visit order.
- The *structure bits* record the tree: a `1` per cell visit and a `0` per atom visit, in the same preorder, packed into bytes low bit first with the final byte zero-padded high.

# Atom encoding

A single atom encodes self-delimitingly:

| case | encoding |
|---|---|
| one byte below 190 | the byte itself |
| length 0 to 64 otherwise | `190 + length`, then the content |
| length 65 or more | `0xFF`, then a varint of the length, then the content |

The varint splits the length into 7-bit groups least-significant first; every group but the last has its high bit set.
`0xFF` is exactly `190 + 65`, so the long-length sentinel continues the short-form ladder.

# Self-delimiting decode

The structure bits balance: each `1` opens two children and each `0` closes a leaf, so the decoder knows when one full tree has been parsed.
[decode] rejects anything left over --- surplus atom bytes, set padding bits, or trailing input --- while [decode_prefix] reports how many bytes the noun spanned and leaves the rest to the caller.

Encoding is deterministic: equal nouns produce identical bytes.
*/

mod encode;
pub use encode::{encode, encode_atom, encode_bounded};

mod decode;
pub use decode::{decode, decode_atom, decode_prefix};

/// Single bytes below this value encode themselves.
pub(crate) const LITERAL_LIMIT: u8 = 190;

/// The longest atom the short form covers.
pub(crate) const SHORT_LENGTH_MAX: usize = 64;

/// The first byte of a long-form length, `190 + 65`.
pub(crate) const LONG_LENGTH_SENTINEL: u8 = 0xFF;
