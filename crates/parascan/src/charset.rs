//! Character encoding detection for fetched bodies
//!
//! Servers regularly mislabel `Content-Type` charsets, so the body bytes are
//! inspected instead of trusting the header: a byte order mark wins, then a
//! statistical guess over the whole body. An empty body has nothing to
//! inspect and decodes as UTF-8.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use url::Url;

/// Result of decoding a response body
#[derive(Debug, Clone)]
pub struct DecodedBody {
    /// Decoded text
    pub text: String,
    /// Encoding that was actually used
    pub encoding: &'static Encoding,
    /// True if malformed sequences were replaced with U+FFFD
    pub had_errors: bool,
}

/// Guess the encoding of `body` from its content
///
/// `tld` is the lower-case top-level domain of the page (e.g. `"jp"`), used
/// by the detector to break ties between legacy encodings.
pub fn detect_encoding(body: &[u8], tld: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(body) {
        return encoding;
    }
    if body.is_empty() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(tld.map(str::as_bytes), true)
}

/// Detect the encoding of `body` and decode it
pub fn decode_body(body: &[u8], tld: Option<&str>) -> DecodedBody {
    let detected = detect_encoding(body, tld);
    let (text, encoding, had_errors) = detected.decode(body);
    DecodedBody {
        text: text.into_owned(),
        encoding,
        had_errors,
    }
}

/// Extract a detector hint from the URL's domain
///
/// Returns `None` for IP hosts and for labels that are not plain ASCII
/// letters (punycode TLDs, numeric labels).
pub fn tld_hint(url: &Url) -> Option<String> {
    let domain = url.domain()?;
    let tld = domain.trim_end_matches('.').rsplit('.').next()?;
    if tld.is_empty() || !tld.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(tld.to_ascii_lowercase())
}
