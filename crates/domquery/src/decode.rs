// ABOUTME: Charset handling for raw markup bytes.
// ABOUTME: Decodes using the Content-Type charset when present, otherwise detects with chardetng.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Decode markup bytes to text.
///
/// A byte order mark wins, then a recognised `charset` in `content_type`,
/// then a guess from the bytes themselves. Malformed sequences become
/// U+FFFD.
pub fn decode_markup(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(extract_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or_else(|| sniff_encoding(body));
    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

fn sniff_encoding(body: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(None, true)
}

/// Extract the charset parameter from a Content-Type value.
pub fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(str::trim)
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim().trim_matches('"').trim_matches('\'').to_lowercase())
            } else {
                None
            }
        })
        .filter(|charset| !charset.is_empty())
}
