use crate::{CoreError, Result as CoreErrorResult};

pub const PDF_MIME: &str = "application/pdf";
const PDF_EXTENSION: &str = ".pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

/// A resume file that has passed the client-side PDF check.
///
/// Construction is the only validation point, so holding a `ResumeUpload`
/// means no network call is ever made for a non-PDF file.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl ResumeUpload {
    #[track_caller]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> CoreErrorResult<Self> {
        let file_name = file_name.into();

        Self::check_file_name(&file_name)?;
        if bytes.is_empty() {
            return Err(CoreError::invalid_resume(file_name, "The file is empty"));
        }
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(CoreError::invalid_resume(
                file_name,
                "Please upload a PDF file",
            ));
        }

        Ok(Self { file_name, bytes })
    }

    /// Name-only part of the check, usable before the file is read.
    #[track_caller]
    pub fn check_file_name(file_name: &str) -> CoreErrorResult<()> {
        if file_name.trim().is_empty() {
            return Err(CoreError::invalid_resume(file_name, "No file selected"));
        }
        if !file_name.to_lowercase().ends_with(PDF_EXTENSION) {
            return Err(CoreError::invalid_resume(file_name, "Please upload a PDF file"));
        }
        Ok(())
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.file_name, self.bytes)
    }
}

impl std::fmt::Debug for ResumeUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeUpload")
            .field("file_name", &self.file_name)
            .field("size", &self.bytes.len())
            .finish()
    }
}
