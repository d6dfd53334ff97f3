use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// Form field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";
/// Form field carrying the job description text.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// An uploaded resume file with its metadata.
pub struct UploadedResume {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Parsed fields of the analyze form. Either may be absent.
#[derive(Default)]
pub struct AnalyzeForm {
    pub resume: Option<UploadedResume>,
    pub job_description: Option<String>,
}

/// Reads the analyze form. Unknown fields are drained and ignored.
pub async fn read_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            RESUME_FIELD => {
                let filename = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let data = field.bytes().await?;
                // A file input left empty still submits a zero-length part.
                if !data.is_empty() || filename.as_deref().is_some_and(|f| !f.is_empty()) {
                    form.resume = Some(UploadedResume {
                        filename,
                        content_type,
                        data,
                    });
                }
            }
            JOB_DESCRIPTION_FIELD => {
                form.job_description = Some(field.text().await?);
            }
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    Ok(form)
}
