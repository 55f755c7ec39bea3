/*!
Error types used in the library.

- Most of these are very unlikely to occur during use.
- Some are external --- e.g. a caller handing the evaluator an atom where a program cell was required.
- None are recovered internally: a failing operation surfaces a single error to the caller and any partial product is discarded.
  Memo store writes made before a failing opcode persist.

Names of the error enums overlap with the area of the library they belong to, and `err::` is often used as a prefix at use sites.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error while encoding a noun.
    Encode(EncodeError),

    /// An error while decoding a noun.
    Decode(DecodeError),

    /// An error during evaluation.
    Eval(EvalError),
}

/// Errors while encoding a noun for the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// The concatenated atom encodings exceeded the byte budget given to the encoder.
    AtomBudgetExceeded,
}

impl From<EncodeError> for ErrorKind {
    fn from(e: EncodeError) -> Self {
        ErrorKind::Encode(e)
    }
}

/// Errors while decoding a noun from the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The header atom is not usable as an atom-stream length.
    LengthHeader,

    /// The atom stream ended where further bytes were required.
    ///
    /// Covers a truncated buffer, a varint cut short, and a content length exceeding the remainder.
    AtomStreamTruncated,

    /// The structure stream ended before the tree was complete.
    StructureStreamTruncated,

    /// A varint length which cannot be represented in memory.
    OverlongVarint,

    /// Structure bits remained set after the tree was complete.
    NonZeroPadding,

    /// Atom encodings remained after every `0` structure bit was matched.
    UnconsumedAtoms,

    /// Bytes remained after the encoding of the noun.
    ///
    /// Only strict decoding rejects these; see [decode_prefix](crate::codec::decode_prefix).
    TrailingInput,
}

impl From<DecodeError> for ErrorKind {
    fn from(e: DecodeError) -> Self {
        ErrorKind::Decode(e)
    }
}

/// Errors during evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvalError {
    /// The program handed to [eval](crate::context::GenericContext::eval) was an atom rather than a `[subject formula]` cell.
    AtomicProgram,

    /// A formula was an atom.
    AtomicFormula,

    /// The head of a formula was an atom too wide to be an opcode.
    NotAnOpcode,

    /// An opcode outside the dispatch table.
    UnknownOpcode(u8),

    /// An opcode argument was not shaped for the opcode's arity.
    MalformedArgument,

    /// An axis was a cell.
    CellAxis,

    /// An axis was zero, or walked into an atom.
    AxisOutOfRange,

    /// Increment applied to a cell.
    IncrementOnCell,

    /// Equality applied to something other than a pair.
    EqualityOnAtom,

    /// A branch condition reduced to something other than `0` or `1`.
    BranchCondition,

    /// A length was a cell, or too wide to be represented in memory.
    InvalidLength,

    /// A request for more entropy in one draw than the configured ceiling.
    EntropyExhausted,

    /// A splice consumed bytes past the end of the flattened buffer.
    SpliceShort,

    /// A splice produced more than the configured allocation ceiling.
    SpliceCeiling,

    /// The configured step limit was exhausted.
    ///
    /// Checked once per trip around the reduction loop, which makes the check double as the interposition point for host cancellation.
    StepLimitExceeded,
}

impl From<EvalError> for ErrorKind {
    fn from(e: EvalError) -> Self {
        ErrorKind::Eval(e)
    }
}
