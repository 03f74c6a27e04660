//! Binary encode/decode for the session blob.
//!
//! All integers are little-endian. Strings are length-prefixed with a `u32`
//! length. Decoding walks a borrowed slice with an explicit offset and
//! bounds-checks every field, so a hostile length prefix can never trigger
//! an oversized allocation.

use std::collections::VecDeque;

use crate::error::CodecError;
use crate::state::SessionState;
use crate::{FORMAT_VERSION, MAGIC};

// ── Primitive writers ───────────────────────────────────────────

/// Append a single byte.
pub fn write_u8(buf: &mut Vec<u8>, v: u8) {
    buf.push(v);
}

/// Append a little-endian u32.
pub fn write_u32_le(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Append a little-endian i64.
pub fn write_i64_le(buf: &mut Vec<u8>, v: i64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Append a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(buf: &mut Vec<u8>, s: &str) {
    write_u32_le(buf, s.len() as u32);
    buf.extend_from_slice(s.as_bytes());
}

// ── Primitive readers ───────────────────────────────────────────

/// Borrow the next `n` bytes, advancing the offset.
fn take<'a>(data: &'a [u8], pos: &mut usize, n: usize) -> Result<&'a [u8], CodecError> {
    let remaining = data.len() - *pos;
    if remaining < n {
        return Err(CodecError::Truncated {
            needed: n,
            remaining,
        });
    }
    let slice = &data[*pos..*pos + n];
    *pos += n;
    Ok(slice)
}

/// Read a single byte, advancing the offset.
pub fn read_u8(data: &[u8], pos: &mut usize) -> Result<u8, CodecError> {
    Ok(take(data, pos, 1)?[0])
}

/// Read a little-endian u32, advancing the offset.
pub fn read_u32_le(data: &[u8], pos: &mut usize) -> Result<u32, CodecError> {
    let bytes = take(data, pos, 4)?;
    Ok(u32::from_le_bytes(bytes.try_into().expect("4-byte slice")))
}

/// Read a little-endian i64, advancing the offset.
pub fn read_i64_le(data: &[u8], pos: &mut usize) -> Result<i64, CodecError> {
    let bytes = take(data, pos, 8)?;
    Ok(i64::from_le_bytes(bytes.try_into().expect("8-byte slice")))
}

/// Read a length-prefixed UTF-8 string, advancing the offset.
pub fn read_length_prefixed_str(data: &[u8], pos: &mut usize) -> Result<String, CodecError> {
    let len = read_u32_le(data, pos)? as usize;
    let bytes = take(data, pos, len)?;
    String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::MalformedRecord {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

// ── Query queue encode/decode ───────────────────────────────────

fn write_query_queue(buf: &mut Vec<u8>, queue: &VecDeque<String>) {
    write_u32_le(buf, queue.len() as u32);
    for query in queue {
        write_length_prefixed_str(buf, query);
    }
}

fn read_query_queue(data: &[u8], pos: &mut usize) -> Result<VecDeque<String>, CodecError> {
    let count = read_u32_le(data, pos)? as usize;
    let mut queue = VecDeque::new();
    for _ in 0..count {
        queue.push_back(read_length_prefixed_str(data, pos)?);
    }
    Ok(queue)
}

// ── State encode/decode ─────────────────────────────────────────

/// Encode a session state into a fresh blob.
///
/// Total: every state value has an encoding, and the result is accepted by
/// [`decode_state`].
pub fn encode_state(state: &SessionState) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(&MAGIC);
    write_u8(&mut buf, FORMAT_VERSION);

    write_query_queue(&mut buf, &state.loaded_queries);
    write_query_queue(&mut buf, &state.queries_so_far);
    write_u32_le(&mut buf, state.lines_to_skip);
    write_u32_le(&mut buf, state.lines_so_far);

    match state.last_random {
        Some(x) => {
            write_u8(&mut buf, 1);
            write_i64_le(&mut buf, x);
        }
        None => write_u8(&mut buf, 0),
    }

    buf
}

/// Decode a session blob.
///
/// The empty blob is not accepted here — it is the fresh-session marker,
/// handled before the codec by
/// [`SessionState::load_or_default`](crate::state::SessionState::load_or_default).
pub fn decode_state(data: &[u8]) -> Result<SessionState, CodecError> {
    let mut pos = 0usize;

    let magic = take(data, &mut pos, 4)?;
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    let version = read_u8(data, &mut pos)?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion { found: version });
    }

    let loaded_queries = read_query_queue(data, &mut pos)?;
    let queries_so_far = read_query_queue(data, &mut pos)?;
    let lines_to_skip = read_u32_le(data, &mut pos)?;
    let lines_so_far = read_u32_le(data, &mut pos)?;

    let last_random = match read_u8(data, &mut pos)? {
        0 => None,
        1 => Some(read_i64_le(data, &mut pos)?),
        flag => {
            return Err(CodecError::MalformedRecord {
                detail: format!("invalid seed presence flag: {flag}"),
            })
        }
    };

    if pos != data.len() {
        return Err(CodecError::TrailingBytes {
            count: data.len() - pos,
        });
    }

    Ok(SessionState {
        loaded_queries,
        queries_so_far,
        lines_to_skip,
        lines_so_far,
        last_random,
    })
}
