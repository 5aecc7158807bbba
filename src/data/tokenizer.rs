use std::borrow::Cow;
use std::path::Path;

use encoding_rs::mem::decode_latin1;

use crate::error::ScanError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode file bytes as UTF-8, falling back to ISO-8859-1 (every byte maps
/// to the code point of the same value) when the bytes are not valid UTF-8.
/// Never fails.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => decode_latin1(bytes),
    }
}

// ---------------------------------------------------------------------------
// Tokenizing
// ---------------------------------------------------------------------------

/// Split comma-separated text into keywords, in file order.
///
/// Each piece is trimmed, lowercased when `normalize` is set, and dropped
/// if nothing is left.
pub fn tokenize(text: &str, normalize: bool) -> impl Iterator<Item = String> + '_ {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(move |piece| {
            if normalize {
                piece.to_lowercase()
            } else {
                piece.to_string()
            }
        })
        .filter(|kw| !kw.is_empty())
}

/// Read one file and return its keywords.  The only failure is I/O; bad
/// encodings are absorbed by [`decode_text`].
pub fn read_keywords(path: &Path, normalize: bool) -> Result<Vec<String>, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tokenize(&decode_text(&bytes), normalize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_lowercases() {
        let kws: Vec<String> = tokenize("Cat, Dog, bird", true).collect();
        assert_eq!(kws, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn keeps_case_without_normalization() {
        let kws: Vec<String> = tokenize("  Cat ,Dog,", false).collect();
        assert_eq!(kws, vec!["Cat", "Dog"]);
    }

    #[test]
    fn only_separators_yields_nothing() {
        assert_eq!(tokenize(" , ,  ,", true).count(), 0);
        assert_eq!(tokenize("", true).count(), 0);
        assert_eq!(tokenize("\n,\t,\r\n", true).count(), 0);
    }

    #[test]
    fn newlines_stay_inside_tokens_but_are_trimmed() {
        let kws: Vec<String> = tokenize("rust,\nsystems\n,  Memory Safety  ", true).collect();
        assert_eq!(kws, vec!["rust", "systems", "memory safety"]);
    }

    #[test]
    fn decodes_utf8_as_is() {
        assert_eq!(decode_text("café, naïve".as_bytes()), "café, naïve");
    }

    #[test]
    fn strips_utf8_bom() {
        let kws: Vec<String> = tokenize(&decode_text(b"\xEF\xBB\xBFalpha,beta"), true).collect();
        assert_eq!(kws, vec!["alpha", "beta"]);
    }

    #[test]
    fn falls_back_on_invalid_utf8() {
        // 0xE9 is 'é' in latin-1 and an invalid lone byte in UTF-8.
        let text = decode_text(b"caf\xE9, Tea");
        let kws: Vec<String> = tokenize(&text, true).collect();
        assert_eq!(kws, vec!["café", "tea"]);
    }

    #[test]
    fn fallback_never_fails_on_arbitrary_bytes() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let text = decode_text(&bytes);
        assert_eq!(text.chars().count(), 256);
        assert!(text.chars().zip(0u32..).all(|(c, b)| c as u32 == b));
    }

    #[test]
    fn c1_bytes_decode_as_control_characters() {
        // 0x85 is NEL (whitespace, trimmed away); 0x8A is a plain C1 control.
        let kws: Vec<String> = tokenize(&decode_text(b"alpha\x85, \x8ABeta"), true).collect();
        assert_eq!(kws, vec!["alpha".to_string(), "\u{8a}beta".to_string()]);
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let err = read_keywords(Path::new("/definitely/not/here.txt"), true).unwrap_err();
        assert_eq!(err.path(), Path::new("/definitely/not/here.txt"));
    }
}
