//! Response body decoding.
//!
//! The client runs with transparent decompression off (otherwise `reqwest`
//! strips `Content-Encoding`), so compressed bodies are inflated here.

use std::io::Read;

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};

use crate::error_handling::AuditError;

/// Decodes `raw` according to the response's `Content-Encoding`.
///
/// Supports `gzip`, `x-gzip` and `deflate` (zlib-wrapped, with a fallback to
/// raw deflate for servers that send it bare). `identity`, a missing header
/// and unknown encodings pass through unchanged.
///
/// Output is capped at `max_len` bytes. A stream that ends early (the
/// compressed read was truncated) keeps whatever was decoded before the cut.
///
/// # Errors
///
/// Returns `AuditError::Parse` when nothing at all could be inflated.
pub(crate) fn decode_body(
    raw: Vec<u8>,
    encoding: Option<&str>,
    max_len: usize,
) -> Result<Vec<u8>, AuditError> {
    let Some(encoding) = encoding else {
        return Ok(raw);
    };
    let encoding = encoding.trim().to_ascii_lowercase();

    match encoding.as_str() {
        "gzip" | "x-gzip" => inflate(GzDecoder::new(raw.as_slice()), &encoding, max_len),
        "deflate" => inflate(ZlibDecoder::new(raw.as_slice()), &encoding, max_len)
            .or_else(|_| inflate(DeflateDecoder::new(raw.as_slice()), &encoding, max_len)),
        "" | "identity" => Ok(raw),
        other => {
            log::warn!("Unsupported Content-Encoding '{}', parsing body as-is", other);
            Ok(raw)
        }
    }
}

fn inflate<R: Read>(reader: R, encoding: &str, max_len: usize) -> Result<Vec<u8>, AuditError> {
    let mut decoded = Vec::new();
    let result = reader.take(max_len as u64).read_to_end(&mut decoded);

    match result {
        Ok(_) if decoded.len() >= max_len => {
            log::warn!(
                "Decoded {} body reached {} bytes, truncating",
                encoding,
                max_len
            );
            Ok(decoded)
        }
        Ok(_) => Ok(decoded),
        Err(e) if !decoded.is_empty() => {
            log::warn!(
                "Incomplete {} body ({}), keeping {} decoded bytes",
                encoding,
                e,
                decoded.len()
            );
            Ok(decoded)
        }
        Err(e) => Err(AuditError::Parse(format!(
            "could not decode {encoding} body: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::{GzEncoder, ZlibEncoder};
    use flate2::Compression;
    use std::io::Write;

    const HTML: &str = "<html><head><title>Compressed</title></head><body>ok</body></html>";
    const LIMIT: usize = 1024 * 1024;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_gzip_body_is_inflated() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(HTML.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let decoded = decode_body(compressed, Some("gzip"), LIMIT).unwrap();
        assert_eq!(decoded, HTML.as_bytes());
    }

    #[test]
    fn test_deflate_body_is_inflated() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(HTML.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let decoded = decode_body(compressed, Some("Deflate"), LIMIT).unwrap();
        assert_eq!(decoded, HTML.as_bytes());
    }

    #[test]
    fn test_identity_and_missing_pass_through() {
        let raw = HTML.as_bytes().to_vec();
        assert_eq!(decode_body(raw.clone(), None, LIMIT).unwrap(), raw);
        assert_eq!(decode_body(raw.clone(), Some("identity"), LIMIT).unwrap(), raw);
    }

    #[test]
    fn test_corrupt_gzip_is_parse_error() {
        let result = decode_body(b"definitely not gzip".to_vec(), Some("gzip"), LIMIT);
        assert!(matches!(result, Err(AuditError::Parse(_))));
    }

    #[test]
    fn test_decoded_output_is_capped() {
        let compressed = gzip(&vec![b'a'; 8 * LIMIT]);
        let decoded = decode_body(compressed, Some("gzip"), LIMIT).unwrap();
        assert_eq!(decoded.len(), LIMIT);
    }

    #[test]
    fn test_truncated_stream_keeps_decoded_prefix() {
        let page: String = (0..20_000)
            .map(|i| format!("<p>paragraph number {i} of the page</p>\n"))
            .collect();
        let compressed = gzip(page.as_bytes());
        let half = compressed[..compressed.len() / 2].to_vec();

        let decoded = decode_body(half, Some("gzip"), LIMIT).unwrap();
        assert!(!decoded.is_empty());
        assert!(decoded.len() < page.len());
        assert!(page.as_bytes().starts_with(&decoded));
    }
}
