//! Percent-decoding of query values.

/// Characters whose escapes stay encoded, as with the browser's `decodeURI`.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Decodes `%XX` escapes, leaving escapes of reserved characters intact.
/// Malformed escapes or invalid UTF-8 yield the input unchanged.
pub(crate) fn decode_uri(input: &str) -> String {
    try_decode(input).unwrap_or_else(|| input.to_string())
}

fn try_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let high = hex_digit(*bytes.get(i + 1)?)?;
            let low = hex_digit(*bytes.get(i + 2)?)?;
            let decoded = high << 4 | low;
            if RESERVED.contains(&decoded) {
                out.extend_from_slice(&bytes[i..i + 3]);
            } else {
                out.push(decoded);
            }
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
