//! Caller-side text acquisition: request validation and upload decoding.
//!
//! The engine accepts any string. Refusing empty, oversized or undecodable
//! input is this layer's job, and surfaces as "no analyzable text".

use crate::errors::AppError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Rejects whitespace-only text and text longer than `max_chars` characters.
pub fn validate_text(text: &str, max_chars: usize) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let len = text.chars().count();
    if len > max_chars {
        return Err(AppError::PayloadTooLarge(format!(
            "text is {len} characters; the limit is {max_chars}"
        )));
    }
    Ok(())
}

/// Decodes uploaded file bytes as UTF-8 text, dropping a leading BOM.
pub fn decode_upload(file_name: Option<&str>, bytes: &[u8]) -> Result<String, AppError> {
    let name = file_name.unwrap_or("upload");
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let text = std::str::from_utf8(bytes).map_err(|e| {
        AppError::UnprocessableEntity(format!(
            "no analyzable text in '{name}': not valid UTF-8 ({e})"
        ))
    })?;

    // Binary formats often decode as UTF-8 but carry NUL bytes.
    if text.contains('\0') {
        return Err(AppError::UnprocessableEntity(format!(
            "no analyzable text in '{name}': binary content"
        )));
    }
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "no analyzable text in '{name}': file is empty"
        )));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_rejected() {
        assert!(matches!(
            validate_text("  \n\t ", 100),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_length_limit_in_characters() {
        assert!(validate_text("ééé", 3).is_ok());
        assert!(matches!(
            validate_text("éééé", 3),
            Err(AppError::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn test_decode_plain_text() {
        let text = decode_upload(Some("cv.txt"), b"Senior Engineer").unwrap();
        assert_eq!(text, "Senior Engineer");
    }

    #[test]
    fn test_decode_strips_bom() {
        let text = decode_upload(None, b"\xEF\xBB\xBFSkills").unwrap();
        assert_eq!(text, "Skills");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_upload(Some("cv.pdf"), &[0x25, 0x50, 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(ref m) if m.contains("cv.pdf")));
    }

    #[test]
    fn test_decode_rejects_nul_bytes() {
        assert!(matches!(
            decode_upload(None, b"PK\0\0word/document.xml"),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_decode_rejects_empty_file() {
        assert!(matches!(
            decode_upload(None, b"   "),
            Err(AppError::UnprocessableEntity(_))
        ));
    }
}
