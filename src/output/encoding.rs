//! Text encodings for files written to disk
//!
//! Labels follow the WHATWG Encoding Standard as implemented by `encoding_rs`,
//! so `utf-8`, `utf8`, `latin1`, `windows-1252`, `shift_jis`, `euc-kr` and the
//! `utf-16` family are all accepted.

use crate::SaveError;
use encoding_rs::{Encoding, REPLACEMENT, UTF_16BE, UTF_16LE};

/// Resolves an encoding label
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding, SaveError> {
    match Encoding::for_label(label.trim().as_bytes()) {
        // "replacement" has no encoder; its labels are legacy aliases only
        Some(encoding) if encoding != REPLACEMENT => Ok(encoding),
        _ => Err(SaveError::UnknownEncoding(label.to_string())),
    }
}

/// Encodes text with the named encoding
///
/// Characters the target encoding cannot represent are an error rather than
/// being replaced. UTF-16 output carries a byte order mark.
pub fn encode_text(text: &str, label: &str) -> Result<Vec<u8>, SaveError> {
    let encoding = lookup_encoding(label)?;

    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Ok(encode_utf16(text, encoding == UTF_16BE));
    }

    let (bytes, _, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        return Err(SaveError::Unmappable(encoding.name().to_string()));
    }

    Ok(bytes.into_owned())
}

fn encode_utf16(text: &str, big_endian: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + text.len() * 2);
    for unit in std::iter::once(0xFEFF_u16).chain(text.encode_utf16()) {
        if big_endian {
            out.extend_from_slice(&unit.to_be_bytes());
        } else {
            out.extend_from_slice(&unit.to_le_bytes());
        }
    }
    out
}
