/*!
The memo stores of a context.

Two stores, matching the two addressing schemes of the dispatch table:

- The [hash store](crate::db::hash::HashDB) maps content digests to nouns. Opcode 11 inserts, opcode 12 reads.
- The [key store](crate::db::key::KeyDB) maps nouns to nouns by structural equality. Opcode 13 inserts, opcode 14 reads.

Both live as long as their context: nothing inside the library evicts, and a host wanting fresh stores builds a fresh context.
Writes made before a failing reduction persist.
*/

pub mod hash;
pub mod key;
