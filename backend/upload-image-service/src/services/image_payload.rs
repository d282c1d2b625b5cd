//! Extraction of the image bytes from a request body.

use crate::error::{Result, UploadError};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine};
use serde_json::Value;

/// Standard alphabet, padding optional, non-zero trailing bits tolerated.
/// Only ever fed `=`-free input produced by `data_characters`.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode base64 the forgiving way HTTP clients expect:
///
/// - characters outside the standard alphabet (line breaks, spaces) are skipped;
/// - `=` before the third character of a quantum is ignored;
/// - decoding stops at the first `=` that completes a quantum, so extra
///   padding and anything after it are dropped;
/// - input ending mid-quantum without padding is an error.
pub fn decode_base64(input: &str) -> std::result::Result<Vec<u8>, DecodeError> {
    let data = data_characters(input)?;
    LENIENT_STANDARD.decode(data)
}

/// Alphabet characters up to the end of the padded quantum, if any
fn data_characters(input: &str) -> std::result::Result<String, DecodeError> {
    let mut data = String::with_capacity(input.len());
    let mut quad_pos = 0usize;
    let mut pads = 0usize;

    for (index, c) in input.char_indices() {
        if !c.is_ascii() {
            return Err(DecodeError::InvalidByte(index, input.as_bytes()[index]));
        }
        if c == '=' {
            if quad_pos >= 2 {
                pads += 1;
                if quad_pos + pads >= 4 {
                    return Ok(data);
                }
            }
            continue;
        }
        if !(c.is_ascii_alphanumeric() || c == '+' || c == '/') {
            continue;
        }

        data.push(c);
        pads = 0;
        quad_pos = (quad_pos + 1) % 4;
    }

    match quad_pos {
        0 => Ok(data),
        1 => Err(DecodeError::InvalidLength(data.len())),
        _ => Err(DecodeError::InvalidPadding),
    }
}

/// Pick the image bytes out of the request.
///
/// Order: whole body when the event is flagged base64, then the `image`
/// field of a JSON object body, then the raw body text as-is. The last path
/// does not survive binary data sent as text; it is kept because existing
/// clients rely on it.
pub fn resolve_image(is_base64_encoded: bool, raw_body: &Value, parsed_body: &Value) -> Result<Vec<u8>> {
    if is_base64_encoded {
        let text = raw_body.as_str().ok_or_else(|| {
            UploadError::UnsupportedBody("base64-encoded body must be a string".to_string())
        })?;
        return Ok(decode_base64(text)?);
    }

    if let Some(image) = parsed_body.as_object().and_then(|body| body.get("image")) {
        let text = image.as_str().ok_or_else(|| {
            UploadError::UnsupportedBody("image field must be a base64 string".to_string())
        })?;
        return Ok(decode_base64(text)?);
    }

    match raw_body {
        Value::String(text) => Ok(text.as_bytes().to_vec()),
        _ => Err(UploadError::UnsupportedBody(
            "body has no image field and is not text".to_string(),
        )),
    }
}
