//! Frame encoding and decoding.
//!
//! One frame serializes one record:
//!
//! ```text
//! | checksum (8) | length (4) | payload (N) |
//! ```
//!
//! The checksum is XXH64 (seed 0) over the 4-byte big-endian length followed
//! by the payload, serialized big-endian. The length is the payload size as
//! a big-endian u32. These choices are part of the on-disk contract: files
//! written by one deployment must validate bit-exactly in another.

use crate::error::LogError;
use xxhash_rust::xxh64::Xxh64;

/// Size of the checksum field in bytes.
const CHECKSUM_SIZE: usize = 8;

/// Size of the length field in bytes.
const LENGTH_SIZE: usize = 4;

/// Fixed per-frame overhead: checksum (8) + length (4).
pub const HEADER_SIZE: usize = CHECKSUM_SIZE + LENGTH_SIZE;

/// Outcome of decoding one frame at a given offset.
///
/// `Incomplete` and `ChecksumMismatch` are classifications, not errors:
/// during recovery they mean "the valid prefix ends here".
#[derive(Debug, PartialEq, Eq)]
pub enum FrameOutcome<'a> {
    /// A complete frame with a matching checksum starts at the offset.
    Valid {
        /// The frame's payload bytes.
        payload: &'a [u8],
        /// Offset immediately after the frame.
        next_offset: usize,
    },
    /// Fewer bytes remain than the frame claims to need. Seen when a crash
    /// tore the final write.
    Incomplete,
    /// The frame is complete but its checksum does not re-validate.
    ChecksumMismatch,
}

/// Computes the frame checksum over the encoded length and the payload.
fn frame_checksum(length_be: [u8; LENGTH_SIZE], payload: &[u8]) -> u64 {
    let mut hasher = Xxh64::new(0);
    hasher.update(&length_be);
    hasher.update(payload);
    hasher.digest()
}

/// Encodes a payload into a frame.
///
/// Zero-length payloads are valid and produce a 12-byte frame.
///
/// # Errors
///
/// Returns [`LogError::PayloadTooLarge`] if the payload does not fit the
/// 32-bit length field.
pub fn encode_frame(payload: &[u8]) -> Result<Vec<u8>, LogError> {
    let length = u32::try_from(payload.len()).map_err(|_| LogError::PayloadTooLarge {
        len: payload.len(),
    })?;
    let length_be = length.to_be_bytes();
    let checksum = frame_checksum(length_be, payload);

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.extend_from_slice(&checksum.to_be_bytes());
    frame.extend_from_slice(&length_be);
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Decodes the frame starting at `offset` in `buf`.
///
/// Never fails: a short or corrupted frame is reported through
/// [`FrameOutcome`] so the recovery scan can treat it as the end of the
/// valid prefix.
#[must_use]
pub fn decode_frame(buf: &[u8], offset: usize) -> FrameOutcome<'_> {
    let remaining = buf.len().saturating_sub(offset);
    if remaining < HEADER_SIZE {
        return FrameOutcome::Incomplete;
    }

    let checksum_end = offset + CHECKSUM_SIZE;
    let length_end = checksum_end + LENGTH_SIZE;

    let mut checksum_be = [0u8; CHECKSUM_SIZE];
    checksum_be.copy_from_slice(&buf[offset..checksum_end]);
    let stored_checksum = u64::from_be_bytes(checksum_be);

    let mut length_be = [0u8; LENGTH_SIZE];
    length_be.copy_from_slice(&buf[checksum_end..length_end]);
    let payload_len = u32::from_be_bytes(length_be) as usize;

    if buf.len() - length_end < payload_len {
        return FrameOutcome::Incomplete;
    }

    let payload = &buf[length_end..length_end + payload_len];
    if frame_checksum(length_be, payload) != stored_checksum {
        return FrameOutcome::ChecksumMismatch;
    }

    FrameOutcome::Valid {
        payload,
        next_offset: length_end + payload_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xxh64_known_vector() {
        // XXH64 of the empty input with seed 0
        let hasher = Xxh64::new(0);
        assert_eq!(hasher.digest(), 0xEF46_DB37_51D8_E999);
    }

    #[test]
    fn encode_layout() {
        let frame = encode_frame(b"abc").unwrap();
        assert_eq!(frame.len(), HEADER_SIZE + 3);
        // length field is big-endian at bytes 8..12
        assert_eq!(&frame[8..12], &[0, 0, 0, 3]);
        assert_eq!(&frame[12..], b"abc");
        // checksum covers length || payload
        let expected = frame_checksum([0, 0, 0, 3], b"abc");
        assert_eq!(&frame[0..8], &expected.to_be_bytes());
    }

    #[test]
    fn encode_is_deterministic() {
        assert_eq!(
            encode_frame(b"same bytes").unwrap(),
            encode_frame(b"same bytes").unwrap()
        );
        assert_ne!(encode_frame(b"aaa").unwrap(), encode_frame(b"aab").unwrap());
    }

    #[test]
    fn zero_length_payload_is_a_valid_frame() {
        let frame = encode_frame(b"").unwrap();
        assert_eq!(frame.len(), HEADER_SIZE);

        match decode_frame(&frame, 0) {
            FrameOutcome::Valid {
                payload,
                next_offset,
            } => {
                assert!(payload.is_empty());
                assert_eq!(next_offset, HEADER_SIZE);
            }
            other => panic!("expected valid frame, got {other:?}"),
        }
    }

    #[test]
    fn decode_valid_frame() {
        let frame = encode_frame(b"this is a test").unwrap();
        match decode_frame(&frame, 0) {
            FrameOutcome::Valid {
                payload,
                next_offset,
            } => {
                assert_eq!(payload, b"this is a test");
                assert_eq!(next_offset, frame.len());
            }
            other => panic!("expected valid frame, got {other:?}"),
        }
    }

    #[test]
    fn decode_at_nonzero_offset() {
        let mut buf = encode_frame(b"first").unwrap();
        let second_start = buf.len();
        buf.extend_from_slice(&encode_frame(b"second").unwrap());

        match decode_frame(&buf, second_start) {
            FrameOutcome::Valid { payload, .. } => assert_eq!(payload, b"second"),
            other => panic!("expected valid frame, got {other:?}"),
        }
    }

    #[test]
    fn decode_short_header_is_incomplete() {
        let frame = encode_frame(b"payload").unwrap();
        assert_eq!(decode_frame(&frame[..HEADER_SIZE - 1], 0), FrameOutcome::Incomplete);
        assert_eq!(decode_frame(&[], 0), FrameOutcome::Incomplete);
    }

    #[test]
    fn decode_short_payload_is_incomplete() {
        let frame = encode_frame(b"payload").unwrap();
        assert_eq!(
            decode_frame(&frame[..frame.len() - 1], 0),
            FrameOutcome::Incomplete
        );
    }

    #[test]
    fn decode_flipped_payload_byte_is_mismatch() {
        let mut frame = encode_frame(b"payload").unwrap();
        frame[HEADER_SIZE] ^= 0x01;
        assert_eq!(decode_frame(&frame, 0), FrameOutcome::ChecksumMismatch);
    }

    #[test]
    fn decode_flipped_length_byte_is_mismatch_or_incomplete() {
        // Raising the length field makes the frame claim more payload than
        // exists; lowering it shifts the checksummed range. Either way the
        // frame must not validate.
        let mut frame = encode_frame(b"payload").unwrap();
        frame[HEADER_SIZE - 1] ^= 0x01;
        assert!(!matches!(
            decode_frame(&frame, 0),
            FrameOutcome::Valid { .. }
        ));
    }

    #[test]
    fn decode_offset_past_end_is_incomplete() {
        let frame = encode_frame(b"x").unwrap();
        assert_eq!(decode_frame(&frame, frame.len()), FrameOutcome::Incomplete);
        assert_eq!(decode_frame(&frame, frame.len() + 100), FrameOutcome::Incomplete);
    }
}
