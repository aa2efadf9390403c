use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

use crate::error::ChatError;
use crate::models::UploadedFile;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Read a local PDF and encode it for inline transport. Produces exactly one
/// `UploadedFile` or an error, never a partial record.
pub fn encode_pdf_file(path: &Path) -> Result<UploadedFile, ChatError> {
    let filename = match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => return Err(ChatError::FileRead(format!("no filename in {}", path.display()))),
    };

    match path.extension() {
        Some(extension) if extension == "pdf" => {}
        _ => return Err(ChatError::UnsupportedFileType(filename)),
    }

    log::info!("Encoding PDF: {}", filename);

    let bytes = fs::read(path)
        .map_err(|e| ChatError::FileRead(format!("{}: {}", path.display(), e)))?;

    Ok(UploadedFile::new(&filename, PDF_MIME_TYPE, STANDARD.encode(bytes)))
}

/// Accept a document that was encoded on the client side. The payload must
/// declare the PDF MIME type and carry decodable base64.
pub fn from_base64_payload(
    name: &str,
    mime_type: &str,
    data: &str,
) -> Result<UploadedFile, ChatError> {
    if mime_type != PDF_MIME_TYPE {
        return Err(ChatError::UnsupportedFileType(mime_type.to_string()));
    }

    if STANDARD.decode(data).is_err() {
        return Err(ChatError::FileRead(format!("invalid base64 payload for {}", name)));
    }

    Ok(UploadedFile::new(name, mime_type, data.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_encode_pdf_file_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syllabus.pdf");
        let bytes = b"%PDF-1.4 fake document body";
        fs::File::create(&path).unwrap().write_all(bytes).unwrap();

        let file = encode_pdf_file(&path).unwrap();

        assert_eq!(file.name, "syllabus.pdf");
        assert_eq!(file.mime_type, PDF_MIME_TYPE);
        assert_eq!(STANDARD.decode(&file.data).unwrap(), bytes);
        assert!(!file.id.is_empty());
    }

    #[test]
    fn test_encode_rejects_non_pdf_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "plain text").unwrap();

        match encode_pdf_file(&path) {
            Err(ChatError::UnsupportedFileType(name)) => assert_eq!(name, "notes.txt"),
            other => panic!("expected unsupported file type, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pdf");

        assert!(matches!(encode_pdf_file(&path), Err(ChatError::FileRead(_))));
    }

    #[test]
    fn test_payload_with_wrong_mime_type_is_rejected() {
        let result = from_base64_payload("photo.png", "image/png", "aGVsbG8=");
        assert!(matches!(result, Err(ChatError::UnsupportedFileType(_))));
    }

    #[test]
    fn test_payload_with_invalid_base64_is_rejected() {
        let result = from_base64_payload("syllabus.pdf", PDF_MIME_TYPE, "not base64!!!");
        assert!(matches!(result, Err(ChatError::FileRead(_))));
    }

    #[test]
    fn test_valid_payload_is_accepted_verbatim() {
        let file = from_base64_payload("syllabus.pdf", PDF_MIME_TYPE, "JVBERi0xLjQ=").unwrap();
        assert_eq!(file.data, "JVBERi0xLjQ=");
        assert_eq!(file.name, "syllabus.pdf");
    }
}
