use crate::ResumeUpload;

const PDF_BYTES: &[u8] = b"%PDF-1.7\n%...";

#[test]
fn test_pdf_accepted() {
    let upload = ResumeUpload::new("cv.pdf", PDF_BYTES.to_vec()).unwrap();
    assert_eq!(upload.file_name(), "cv.pdf");
    assert_eq!(upload.bytes(), PDF_BYTES);
}

#[test]
fn test_uppercase_extension_accepted() {
    assert!(ResumeUpload::new("CV.PDF", PDF_BYTES.to_vec()).is_ok());
}

#[test]
fn test_non_pdf_extension_rejected() {
    let err = ResumeUpload::new("cv.docx", PDF_BYTES.to_vec()).unwrap_err();
    assert_eq!(err.message(), "Please upload a PDF file");
}

#[test]
fn test_renamed_non_pdf_content_rejected() {
    let err = ResumeUpload::new("cv.pdf", b"PK\x03\x04 zip data".to_vec()).unwrap_err();
    assert_eq!(err.message(), "Please upload a PDF file");
}

#[test]
fn test_empty_file_rejected() {
    assert!(ResumeUpload::new("cv.pdf", Vec::new()).is_err());
    assert!(ResumeUpload::new("", PDF_BYTES.to_vec()).is_err());
}

#[test]
fn test_file_name_check_needs_no_content() {
    assert!(ResumeUpload::check_file_name("cv.pdf").is_ok());
    assert_eq!(
        ResumeUpload::check_file_name("cv.docx").unwrap_err().message(),
        "Please upload a PDF file"
    );
    assert_eq!(
        ResumeUpload::check_file_name("  ").unwrap_err().message(),
        "No file selected"
    );
}
