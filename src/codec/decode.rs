//! Decoding nouns from the wire.

use crate::structures::noun::Noun;
use crate::types::err::{self};

use super::{LITERAL_LIMIT, LONG_LENGTH_SENTINEL};

/// Reads self-delimiting atom encodings off the front of a buffer.
struct AtomReader<'b> {
    buffer: &'b [u8],
}

impl<'b> AtomReader<'b> {
    fn new(buffer: &'b [u8]) -> Self {
        AtomReader { buffer }
    }

    fn remaining(&self) -> usize {
        self.buffer.len()
    }

    fn read_byte(&mut self) -> Result<u8, err::DecodeError> {
        match self.buffer.split_first() {
            Some((first, rest)) => {
                self.buffer = rest;
                Ok(*first)
            }
            None => Err(err::DecodeError::AtomStreamTruncated),
        }
    }

    /// A varint length: 7-bit groups, least significant first, high bit marking continuation.
    fn read_varint(&mut self) -> Result<usize, err::DecodeError> {
        let mut length: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let byte = self.read_byte()?;
            let group = (byte & 0x7F) as u64;

            if shift >= 64 || (shift > 57 && (group >> (64 - shift)) != 0) {
                return Err(err::DecodeError::OverlongVarint);
            }
            length |= group << shift;

            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
        }

        usize::try_from(length).map_err(|_| err::DecodeError::OverlongVarint)
    }

    fn read_atom(&mut self) -> Result<Noun, err::DecodeError> {
        let first = self.read_byte()?;

        if first < LITERAL_LIMIT {
            return Ok(Noun::atom(&[first][..]));
        }

        let length = if first == LONG_LENGTH_SENTINEL {
            self.read_varint()?
        } else {
            (first - LITERAL_LIMIT) as usize
        };

        if self.buffer.len() < length {
            return Err(err::DecodeError::AtomStreamTruncated);
        }

        let (content, rest) = self.buffer.split_at(length);
        self.buffer = rest;
        Ok(Noun::atom(content))
    }
}

/// Reads structure bits off a buffer, low bit of each byte first.
struct BitReader<'b> {
    buffer: &'b [u8],
    byte_index: usize,
    bit_index: u8,
}

impl<'b> BitReader<'b> {
    fn new(buffer: &'b [u8]) -> Self {
        BitReader {
            buffer,
            byte_index: 0,
            bit_index: 0,
        }
    }

    fn read_bit(&mut self) -> Result<bool, err::DecodeError> {
        let Some(byte) = self.buffer.get(self.byte_index) else {
            return Err(err::DecodeError::StructureStreamTruncated);
        };

        let bit = byte & (1 << self.bit_index) != 0;

        self.bit_index += 1;
        if self.bit_index == 8 {
            self.byte_index += 1;
            self.bit_index = 0;
        }

        Ok(bit)
    }

    /// Bytes spanned so far, a partially read byte included.
    fn bytes_spanned(&self) -> usize {
        self.byte_index + usize::from(self.bit_index != 0)
    }

    /// Verifies the unread bits of a partially read byte are all zero.
    fn check_padding(&self) -> Result<(), err::DecodeError> {
        if self.bit_index != 0 {
            let byte = self.buffer[self.byte_index];
            if byte >> self.bit_index != 0 {
                return Err(err::DecodeError::NonZeroPadding);
            }
        }
        Ok(())
    }
}

/// Decodes one noun from the front of `buffer`, returning it with the byte count it spanned.
///
/// Bytes past the encoding are left for the caller, which makes several nouns framable back to back.
/// Within the encoding every check of [decode] still applies.
pub fn decode_prefix(buffer: &[u8]) -> Result<(Noun, usize), err::DecodeError> {
    // Header: the atom-encoding of the atom-body length.
    let mut header_reader = AtomReader::new(buffer);
    let header = header_reader.read_atom()?;
    let header_span = buffer.len() - header_reader.remaining();

    let body_length = header.as_usize().ok_or(err::DecodeError::LengthHeader)?;
    if header_reader.remaining() < body_length {
        return Err(err::DecodeError::LengthHeader);
    }

    let (atom_region, structure_region) = header_reader.buffer.split_at(body_length);

    let mut atoms = AtomReader::new(atom_region);
    let mut bits = BitReader::new(structure_region);

    // Rebuild the tree from the structure bits.
    // `None` marks a cell whose left child is under construction, `Some` holds a finished left child awaiting its right.
    let mut pending: Vec<Option<Noun>> = Vec::new();

    let noun = 'build: loop {
        if bits.read_bit()? {
            pending.push(None);
            continue 'build;
        }

        let mut complete = atoms.read_atom()?;

        loop {
            match pending.pop() {
                None => break 'build complete,

                Some(Some(left)) => complete = Noun::cell(left, complete),

                Some(None) => {
                    pending.push(Some(complete));
                    break;
                }
            }
        }
    };

    if atoms.remaining() != 0 {
        return Err(err::DecodeError::UnconsumedAtoms);
    }
    bits.check_padding()?;

    Ok((noun, header_span + body_length + bits.bytes_spanned()))
}

/// Decodes a noun spanning the whole of `buffer`.
pub fn decode(buffer: &[u8]) -> Result<Noun, err::DecodeError> {
    let (noun, spanned) = decode_prefix(buffer)?;

    if spanned != buffer.len() {
        log::trace!(
            target: crate::misc::log::targets::CODEC,
            "Trailing input: {} of {} bytes decoded",
            spanned,
            buffer.len()
        );
        return Err(err::DecodeError::TrailingInput);
    }

    Ok(noun)
}

/// Decodes one self-delimiting atom encoding from the front of `buffer`, returning its content bytes with the byte count it spanned.
pub fn decode_atom(buffer: &[u8]) -> Result<(Vec<u8>, usize), err::DecodeError> {
    let mut reader = AtomReader::new(buffer);
    let atom = reader.read_atom()?;
    let spanned = buffer.len() - reader.remaining();

    let bytes = atom
        .atom_bytes()
        .expect("! atom reader produced a cell")
        .to_vec();
    Ok((bytes, spanned))
}
