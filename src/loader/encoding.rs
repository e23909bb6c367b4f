// file: src/loader/encoding.rs
// description: heuristic byte-encoding detection and decoding for text files
// reference: https://docs.rs/chardetng, https://docs.rs/encoding_rs

use chardetng::EncodingDetector;

/// Detect the most plausible encoding of `bytes` and decode them.
///
/// Returns the decoded text together with the detected encoding's name, or
/// `Err` with the name when the bytes are malformed under the best guess.
pub fn decode_bytes(bytes: &[u8]) -> Result<(String, &'static str), &'static str> {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (text, actual_encoding, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(actual_encoding.name());
    }

    Ok((text.into_owned(), actual_encoding.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_roundtrip() {
        let (text, encoding) = decode_bytes("猫是哺乳动物。".as_bytes()).unwrap();

        assert_eq!(text, "猫是哺乳动物。");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_gbk_decoding() {
        // "猫是哺乳动物。" encoded as GBK; not valid UTF-8
        let bytes = [
            0xC3u8, 0xA8, 0xCA, 0xC7, 0xB2, 0xB8, 0xC8, 0xE9, 0xB6, 0xAF, 0xCE, 0xEF, 0xA1, 0xA3,
        ];
        let (text, _encoding) = decode_bytes(&bytes).unwrap();

        assert_eq!(text, "猫是哺乳动物。");
    }

    #[test]
    fn test_utf8_with_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("Cats hunt mice.".as_bytes());

        let (text, _encoding) = decode_bytes(&bytes).unwrap();
        assert_eq!(text, "Cats hunt mice.");
    }

    #[test]
    fn test_ascii_text() {
        let (text, _encoding) = decode_bytes(b"Dogs are mammals too.").unwrap();
        assert_eq!(text, "Dogs are mammals too.");
    }
}
