//! Candidate-encoding text recovery for legacy byte sources
//!
//! Legacy CSV exports arrive in whatever encoding the exporting tool used
//! (commonly GB18030/GBK for Chinese datasets). This module tries an ordered
//! list of encodings and accepts the first one that produces usable text.

use crate::{Error, Result};
use encoding_rs::Encoding;
use tracing::{debug, info, warn};

/// Text recovered from raw bytes together with the encoding that produced it
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Resolve an encoding label (e.g. "gbk", "utf-8") to an encoding
///
/// Labels follow the WHATWG Encoding Standard, so aliases such as "gb2312"
/// or "utf8" are accepted.
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Decode bytes by trying candidate encodings in order
///
/// A candidate is accepted when it decodes without malformed sequences (or
/// with them, when `lossy` is set) and the result is non-empty after trimming.
/// Unknown labels are skipped with a warning.
///
/// # Errors
/// * Returns `Error::Decode` if no candidate is accepted
pub fn decode_with_candidates<S: AsRef<str>>(
    bytes: &[u8],
    candidates: &[S],
    lossy: bool,
    source_name: &str,
) -> Result<DecodedText> {
    if candidates.is_empty() {
        return Err(Error::decode(source_name, "no candidate encodings configured"));
    }

    let mut rejected = Vec::with_capacity(candidates.len());

    for label in candidates {
        let label = label.as_ref();
        let Some(encoding) = encoding_for_label(label) else {
            warn!("Unknown encoding label '{}' for {}, skipping", label, source_name);
            rejected.push(format!("{} (unknown label)", label));
            continue;
        };

        let (text, had_errors) = encoding.decode_with_bom_removal(bytes);

        if had_errors && !lossy {
            debug!(
                "Encoding {} produced malformed sequences for {}",
                encoding.name(),
                source_name
            );
            rejected.push(format!("{} (malformed)", encoding.name()));
            continue;
        }

        if text.trim().is_empty() {
            debug!("Encoding {} produced empty text for {}", encoding.name(), source_name);
            rejected.push(format!("{} (empty)", encoding.name()));
            continue;
        }

        info!("Decoded {} using {}", source_name, encoding.name());
        return Ok(DecodedText {
            text: text.into_owned(),
            encoding,
        });
    }

    Err(Error::decode(
        source_name,
        format!("no candidate encoding produced text: {}", rejected.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gbk_bytes(text: &str) -> Vec<u8> {
        let (bytes, _, had_errors) = encoding_rs::GBK.encode(text);
        assert!(!had_errors);
        bytes.into_owned()
    }

    #[test]
    fn test_encoding_for_label_aliases() {
        assert_eq!(encoding_for_label("gbk"), Some(encoding_rs::GBK));
        assert_eq!(encoding_for_label("GB18030"), Some(encoding_rs::GB18030));
        assert_eq!(encoding_for_label(" utf8 "), Some(encoding_rs::UTF_8));
        assert_eq!(encoding_for_label("klingon"), None);
    }

    #[test]
    fn test_first_candidate_wins() {
        let bytes = gbk_bytes("名称,经度\n上海,121.4");

        let decoded = decode_with_candidates(&bytes, &["gb18030", "gbk", "utf-8"], false, "test")
            .unwrap();

        assert_eq!(decoded.encoding, encoding_rs::GB18030);
        assert!(decoded.text.contains("上海"));
    }

    #[test]
    fn test_malformed_candidate_falls_through() {
        let bytes = gbk_bytes("上海");

        let decoded = decode_with_candidates(&bytes, &["utf-8", "gbk"], false, "test").unwrap();

        assert_eq!(decoded.encoding, encoding_rs::GBK);
        assert_eq!(decoded.text, "上海");
    }

    #[test]
    fn test_lossy_accepts_first_candidate() {
        let bytes = gbk_bytes("上海");

        let decoded = decode_with_candidates(&bytes, &["utf-8", "gbk"], true, "test").unwrap();

        assert_eq!(decoded.encoding, encoding_rs::UTF_8);
        assert!(decoded.text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_unknown_label_is_skipped() {
        let decoded = decode_with_candidates(b"name\nBeijing", &["klingon", "utf-8"], false, "test")
            .unwrap();
        assert_eq!(decoded.encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_utf8_bom_is_removed() {
        let decoded =
            decode_with_candidates(b"\xEF\xBB\xBFname", &["utf-8"], false, "test").unwrap();
        assert_eq!(decoded.text, "name");
    }

    #[test]
    fn test_whitespace_only_is_rejected() {
        let result = decode_with_candidates(b"  \n\r\n ", &["gb18030", "gbk", "utf-8"], false, "test");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_garbage_for_every_candidate_is_rejected() {
        let result = decode_with_candidates(&[0xFF, 0xFF, 0xFF], &["gb18030", "gbk", "utf-8"], false, "test");

        match result {
            Err(Error::Decode { message, .. }) => {
                assert!(message.contains("malformed"));
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_candidates() {
        let empty: [&str; 0] = [];
        assert!(decode_with_candidates(b"abc", &empty, false, "test").is_err());
    }
}
