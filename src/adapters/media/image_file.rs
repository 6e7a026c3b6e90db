//! Image file ingestion: read, sniff the format, base64-encode as a data URI.
//!
//! Self-contained; no coupling to UI, networking or application state. The
//! reverse direction (data URI to raw bytes) is used for saving generated
//! illustrations.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::domain::DomainError;

/// Maximum accepted image size (4 MB), pre-encoding.
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// Image payload decoded out of a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Read an image file and encode it as a `data:<mime>;base64,<payload>` URI.
///
/// JPEG and PNG are recognized by magic bytes; anything else is rejected
/// rather than sent to the analysis service with a guessed type.
pub fn load_image_as_data_uri(path: &str) -> Result<String, DomainError> {
    let bytes = std::fs::read(path.trim())
        .map_err(|e| DomainError::Media(format!("không đọc được tệp ảnh: {e}")))?;

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(DomainError::Media(format!(
            "ảnh quá lớn ({} byte, tối đa {})",
            bytes.len(),
            MAX_IMAGE_BYTES
        )));
    }

    let mime = sniff_mime(&bytes).ok_or_else(|| {
        DomainError::Media("định dạng không được hỗ trợ (chỉ JPG, PNG)".to_string())
    })?;

    Ok(format!("data:{mime};base64,{}", BASE64.encode(&bytes)))
}

/// Decode a `data:` URI back into mime type and raw bytes. Returns `None`
/// for remote URIs (http/https placeholders) or malformed payloads.
pub fn decode_data_uri(uri: &str) -> Option<DecodedImage> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime_type = header.strip_suffix(";base64")?.to_string();
    let bytes = BASE64.decode(payload.trim()).ok()?;
    Some(DecodedImage { mime_type, bytes })
}

/// JPEG or PNG by magic bytes.
fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    if data.len() >= 8 && data[..8] == PNG_MAGIC {
        return Some("image/png");
    }
    if data.len() >= 3 && data[..3] == [0xFF, 0xD8, 0xFF] {
        return Some("image/jpeg");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_png_with_sniffed_mime() {
        let file = write_temp(&PNG_HEADER);
        let uri = load_image_as_data_uri(file.path().to_str().unwrap()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn loads_jpeg_with_sniffed_mime() {
        let file = write_temp(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]);
        let uri = load_image_as_data_uri(file.path().to_str().unwrap()).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn rejects_unknown_formats() {
        let file = write_temp(b"plain text, not an image");
        assert!(matches!(
            load_image_as_data_uri(file.path().to_str().unwrap()),
            Err(DomainError::Media(_))
        ));
    }

    #[test]
    fn rejects_missing_file() {
        assert!(load_image_as_data_uri("/nonexistent/photo.png").is_err());
    }

    #[test]
    fn decode_round_trips_encoded_bytes() {
        let file = write_temp(&PNG_HEADER);
        let uri = load_image_as_data_uri(file.path().to_str().unwrap()).unwrap();
        let decoded = decode_data_uri(&uri).unwrap();
        assert_eq!(decoded.mime_type, "image/png");
        assert_eq!(decoded.bytes, PNG_HEADER);
    }

    #[test]
    fn decode_ignores_remote_uris() {
        assert!(decode_data_uri("https://picsum.photos/800/450").is_none());
        assert!(decode_data_uri("data:image/png,not-base64-flagged").is_none());
    }
}
