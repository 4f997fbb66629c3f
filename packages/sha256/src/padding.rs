//! Message padding and block segmentation
//!
//! A message is extended with a single `0x80` byte, zero-filled until its
//! length is 56 mod 64, and closed with its original length in bits as a
//! big-endian `u64`. The padded message is always a whole number of blocks.

use crate::constants::BLOCK_LEN;
use crate::{HashError, Result};

/// One 512-bit block of a padded message
pub type Block = [u8; BLOCK_LEN];

/// Bytes reserved at the end of the last block for the bit-length field
const LENGTH_FIELD_LEN: usize = 8;

/// Terminator appended directly after the message bytes
const TERMINATOR: u8 = 0x80;

/// A message padded to a multiple of 64 bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
    blocks: Vec<Block>,
}

impl PaddedMessage {
    /// Total padded length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len() * BLOCK_LEN
    }

    /// Always false: padding produces at least one block
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of 64-byte blocks
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks in left-to-right processing order
    pub fn blocks(&self) -> impl ExactSizeIterator<Item = &Block> + '_ {
        self.blocks.iter()
    }

    /// The padded bytes as one contiguous slice
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.blocks.as_flattened()
    }
}

/// Pad `message` into whole blocks
///
/// # Errors
///
/// Returns `HashError::MessageTooLong` if the message length in bits does
/// not fit in 64 bits.
pub fn pad(message: &[u8]) -> Result<PaddedMessage> {
    let bit_len = bit_length(message.len() as u128)?;

    let chunks = message.chunks_exact(BLOCK_LEN);
    let tail = chunks.remainder();

    let mut blocks = Vec::with_capacity(message.len() / BLOCK_LEN + 2);
    blocks.extend(chunks.map(|chunk| {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        block
    }));

    let (last, count) = final_blocks(tail, bit_len);
    blocks.extend_from_slice(&last[..count]);

    Ok(PaddedMessage { blocks })
}

/// Convert a byte count into the message bit length
///
/// # Errors
///
/// Returns `HashError::MessageTooLong` when `bytes * 8` exceeds `u64::MAX`.
pub fn bit_length(bytes: u128) -> Result<u64> {
    bytes
        .checked_mul(8)
        .and_then(|bits| u64::try_from(bits).ok())
        .ok_or(HashError::MessageTooLong { bytes })
}

/// Build the closing block(s) for a trailing partial block
///
/// `tail` holds the message bytes after the last whole block and must be
/// shorter than one block. Returns the padded blocks and how many of them
/// are in use: one if the terminator and length field fit after `tail`,
/// otherwise two.
pub(crate) fn final_blocks(tail: &[u8], bit_len: u64) -> ([Block; 2], usize) {
    debug_assert!(tail.len() < BLOCK_LEN);

    let count = if tail.len() < BLOCK_LEN - LENGTH_FIELD_LEN {
        1
    } else {
        2
    };

    let mut out = [[0u8; BLOCK_LEN]; 2];
    let flat = out.as_flattened_mut();
    flat[..tail.len()].copy_from_slice(tail);
    flat[tail.len()] = TERMINATOR;

    let end = count * BLOCK_LEN;
    flat[end - LENGTH_FIELD_LEN..end].copy_from_slice(&bit_len.to_be_bytes());

    (out, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_pads_to_one_block() {
        let padded = pad(b"").expect("empty message pads");
        assert_eq!(padded.block_count(), 1);
        let bytes = padded.as_bytes();
        assert_eq!(bytes[0], 0x80);
        assert!(bytes[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn abc_layout_matches_fips_example() {
        let padded = pad(b"abc").expect("abc pads");
        let bytes = padded.as_bytes();
        assert_eq!(padded.len(), 64);
        assert_eq!(&bytes[..4], &[0x61, 0x62, 0x63, 0x80]);
        assert!(bytes[4..56].iter().all(|&b| b == 0));
        assert_eq!(&bytes[56..], &24u64.to_be_bytes());
    }

    #[test]
    fn fifty_five_bytes_fit_one_block() {
        let padded = pad(&[0x41; 55]).expect("55 bytes pad");
        assert_eq!(padded.block_count(), 1);
        assert_eq!(padded.as_bytes()[55], 0x80);
        assert_eq!(&padded.as_bytes()[56..], &440u64.to_be_bytes());
    }

    #[test]
    fn fifty_six_bytes_spill_into_second_block() {
        let padded = pad(&[0x41; 56]).expect("56 bytes pad");
        assert_eq!(padded.block_count(), 2);
        let bytes = padded.as_bytes();
        assert_eq!(bytes[56], 0x80);
        assert!(bytes[57..120].iter().all(|&b| b == 0));
        assert_eq!(&bytes[120..], &448u64.to_be_bytes());
    }

    #[test]
    fn whole_block_message_gets_full_padding_block() {
        let padded = pad(&[0u8; 64]).expect("64 bytes pad");
        assert_eq!(padded.block_count(), 2);
        assert_eq!(padded.as_bytes()[64], 0x80);
        assert_eq!(&padded.as_bytes()[120..], &512u64.to_be_bytes());
    }

    #[test]
    fn padded_length_bounds_hold_for_every_residue() {
        for len in 0..=200usize {
            let message = vec![0xa5; len];
            let padded = pad(&message).expect("message pads");
            assert_eq!(padded.len() % BLOCK_LEN, 0, "len {len}");
            assert!(padded.len() >= len + 9, "len {len}");
            assert!(padded.len() < len + 9 + BLOCK_LEN, "len {len}");
            assert_eq!(&padded.as_bytes()[..len], message.as_slice());
        }
    }

    #[test]
    fn bit_length_rejects_overflow() {
        assert_eq!(bit_length(3).expect("small length"), 24);
        assert_eq!(
            bit_length(u128::from(u64::MAX / 8)).expect("max length"),
            (u64::MAX / 8) * 8
        );
        assert!(matches!(
            bit_length(u128::from(u64::MAX / 8) + 1),
            Err(HashError::MessageTooLong { .. })
        ));
    }
}
