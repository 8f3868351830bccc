//! Inline image validation
//!
//! Photos, banners and logos are stored inline, either as a remote URL or
//! as a `data:<mime>;base64,<payload>` string. Data URLs are decoded to
//! check that they are well formed and within the size cap.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, ValidationError};

/// Validate an inline image reference against `max_bytes`.
///
/// Empty strings are accepted and mean "no image".
pub fn check_image(url: &str, max_bytes: usize) -> Result<()> {
    let url = url.trim();
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        return Ok(());
    }

    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| invalid("expected a data URL or http(s) URL"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| invalid("data URL has no payload"))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| invalid("data URL is not base64 encoded"))?;
    if !mime.starts_with("image/") {
        return Err(invalid(&format!("unsupported media type {}", mime)));
    }

    // Reject on the encoded length first so oversized payloads are not decoded.
    let estimated = payload.len() / 4 * 3;
    if estimated > max_bytes + 2 {
        return Err(ValidationError::ImageTooLarge {
            max: max_bytes,
            actual: estimated,
        }
        .into());
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| invalid(&e.to_string()))?;
    if bytes.len() > max_bytes {
        return Err(ValidationError::ImageTooLarge {
            max: max_bytes,
            actual: bytes.len(),
        }
        .into());
    }

    Ok(())
}

fn invalid(reason: &str) -> crate::error::Error {
    ValidationError::InvalidImage(reason.to_string()).into()
}
