//! Reversible encoding of raw diff text for share links.
//!
//! A token is URL-safe base64 (no padding) of one marker byte followed by
//! the payload: `0` gzip, `1` brotli, `2` uncompressed UTF-8. Tokens whose
//! first byte is not a marker are read as the legacy format, which is
//! base64 of the text itself. New tokens use brotli.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_set::error_set;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};
use url::Url;

const BROTLI_BUFFER_SIZE: usize = 4096;
const BROTLI_QUALITY: u32 = 11;
const BROTLI_WINDOW_BITS: u32 = 22;

error_set! {
    /// Errors from encoding or decoding share tokens
    ShareError := {
        /// Token is empty or contains characters outside the base64 alphabets
        #[display("Invalid share token: corrupted or malformed link")]
        InvalidToken,
        #[display("Invalid base64 in share token: {message}")]
        Base64 { message: String },
        #[display("Failed to compress diff: {message}")]
        Compress { message: String },
        #[display("Failed to decompress shared diff: {message}")]
        Decompress { message: String },
        #[display("Shared diff is not valid UTF-8: {message}")]
        NotUtf8 { message: String },
        #[display("Shared diff is empty")]
        Empty,
        #[display("No diff parameter found in URL")]
        MissingParameter,
        #[display("Invalid share URL: {message}")]
        InvalidUrl { message: String },
    }
}

/// Payload encoding announced by a token's first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Gzip,
    Brotli,
    Raw,
}

impl Encoding {
    pub fn marker(self) -> u8 {
        match self {
            Encoding::Gzip => 0,
            Encoding::Brotli => 1,
            Encoding::Raw => 2,
        }
    }

    pub fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Encoding::Gzip),
            1 => Some(Encoding::Brotli),
            2 => Some(Encoding::Raw),
            _ => None,
        }
    }
}

/// Encode `text` as a brotli share token
pub fn encode(text: &str) -> Result<String, ShareError> {
    encode_with(text, Encoding::Brotli)
}

/// Encode `text` with an explicit payload encoding
pub fn encode_with(text: &str, encoding: Encoding) -> Result<String, ShareError> {
    let payload = match encoding {
        Encoding::Gzip => gzip(text.as_bytes())?,
        Encoding::Brotli => brotli_compress(text.as_bytes())?,
        Encoding::Raw => text.as_bytes().to_vec(),
    };

    let mut bytes = Vec::with_capacity(payload.len() + 1);
    bytes.push(encoding.marker());
    bytes.extend_from_slice(&payload);
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode a share token back into the raw diff text.
///
/// Accepts the standard and URL-safe alphabets, with or without padding.
/// When the marker byte is unknown or the payload cannot be decoded, the
/// token is retried as the legacy plain-text format.
///
/// ```
/// let token = diffpane::share::encode("diff --git a/x b/x\n").unwrap();
/// assert_eq!(diffpane::share::decode(&token).unwrap(), "diff --git a/x b/x\n");
/// ```
pub fn decode(token: &str) -> Result<String, ShareError> {
    let token = token.trim();
    if !is_valid_token(token) {
        return Err(ShareError::InvalidToken);
    }

    let bytes = decode_base64(token)?;
    let marked = bytes
        .split_first()
        .and_then(|(&marker, payload)| Encoding::from_marker(marker).map(|enc| (enc, payload)));

    let text = match marked {
        Some((encoding, payload)) => match decode_payload(encoding, payload) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("Share payload failed to decode ({err}), trying legacy format");
                legacy(&bytes).map_err(|_| err)?
            }
        },
        None => legacy(&bytes)?,
    };

    if text.trim().is_empty() {
        return Err(ShareError::Empty);
    }
    Ok(text)
}

/// Add a `diff=<token>` query parameter for `text` to the page URL `base`
pub fn share_url(base: &str, text: &str, encoding: Encoding) -> Result<String, ShareError> {
    let mut url = parse_url(base)?;
    url.query_pairs_mut()
        .append_pair("diff", &encode_with(text, encoding)?);
    Ok(url.into())
}

/// Extract the percent-decoded `diff` query parameter from a share URL
pub fn token_from_url(url: &str) -> Result<String, ShareError> {
    let url = parse_url(url)?;
    url.query_pairs()
        .find(|(key, _)| key == "diff")
        // `+` decodes to a space in query strings; tokens never contain spaces
        .map(|(_, token)| token.replace(' ', "+"))
        .filter(|token| !token.is_empty())
        .ok_or(ShareError::MissingParameter)
}

fn parse_url(url: &str) -> Result<Url, ShareError> {
    Url::parse(url.trim()).map_err(|e| ShareError::InvalidUrl {
        message: e.to_string(),
    })
}

fn is_valid_token(token: &str) -> bool {
    let body = token.trim_end_matches('=');
    !token.is_empty()
        && token.len() - body.len() <= 2
        && body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '-' | '_'))
}

fn decode_base64(token: &str) -> Result<Vec<u8>, ShareError> {
    let normalized: String = token
        .chars()
        .filter(|&c| c != '=')
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    URL_SAFE_NO_PAD
        .decode(normalized)
        .map_err(|e| ShareError::Base64 {
            message: e.to_string(),
        })
}

fn decode_payload(encoding: Encoding, payload: &[u8]) -> Result<String, ShareError> {
    match encoding {
        Encoding::Gzip => {
            let mut decoder = GzDecoder::new(payload);
            let mut text = String::new();
            decoder
                .read_to_string(&mut text)
                .map_err(|e| ShareError::Decompress {
                    message: e.to_string(),
                })?;
            Ok(text)
        }
        Encoding::Brotli => {
            let mut decoder = brotli::Decompressor::new(payload, BROTLI_BUFFER_SIZE);
            let mut bytes = Vec::new();
            decoder
                .read_to_end(&mut bytes)
                .map_err(|e| ShareError::Decompress {
                    message: e.to_string(),
                })?;
            utf8(bytes)
        }
        Encoding::Raw => utf8(payload.to_vec()),
    }
}

fn legacy(bytes: &[u8]) -> Result<String, ShareError> {
    utf8(bytes.to_vec())
}

fn utf8(bytes: Vec<u8>) -> Result<String, ShareError> {
    String::from_utf8(bytes).map_err(|e| ShareError::NotUtf8 {
        message: e.to_string(),
    })
}

fn gzip(data: &[u8]) -> Result<Vec<u8>, ShareError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| ShareError::Compress {
            message: e.to_string(),
        })?;
    encoder.finish().map_err(|e| ShareError::Compress {
        message: e.to_string(),
    })
}

fn brotli_compress(data: &[u8]) -> Result<Vec<u8>, ShareError> {
    let mut writer = brotli::CompressorWriter::new(
        Vec::new(),
        BROTLI_BUFFER_SIZE,
        BROTLI_QUALITY,
        BROTLI_WINDOW_BITS,
    );
    writer.write_all(data).map_err(|e| ShareError::Compress {
        message: e.to_string(),
    })?;
    Ok(writer.into_inner())
}
