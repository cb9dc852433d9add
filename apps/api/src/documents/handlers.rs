//! Axum route handler for resume upload.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::documents::scratch::ScratchFile;
use crate::documents::ExtractedDocument;
use crate::errors::AppError;
use crate::interview::models::ProcessedDocuments;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

struct UploadForm {
    filename: String,
    resume: Bytes,
    job_description: String,
}

async fn read_upload_form(multipart: &mut Multipart) -> Result<UploadForm, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(invalid_multipart)?;
                resume = Some((filename, bytes));
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(invalid_multipart)?);
            }
            _ => {}
        }
    }

    let (filename, resume) =
        resume.ok_or_else(|| AppError::Validation("Resume file is required.".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("Job description field is required.".to_string()))?;

    Ok(UploadForm {
        filename,
        resume,
        job_description,
    })
}

fn invalid_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
}

/// POST /upload
///
/// Multipart form with a `resume` file (PDF, DOCX, DOC or TXT) and a
/// `job_description` text field. Returns the extracted resume text alongside the
/// job description. The uploaded file is deleted before the response is sent.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessedDocuments>, AppError> {
    let form = read_upload_form(&mut multipart).await?;

    if form.filename.is_empty() {
        return Err(AppError::Validation(
            "Resume filename cannot be empty.".to_string(),
        ));
    }

    let extractor = Arc::clone(&state.extractor);
    let upload_dir = state.config.upload_dir.clone();
    let filename = form.filename.clone();
    let resume = form.resume;

    // Save and decode off the async runtime. The scratch file lives only inside
    // this closure.
    let document = tokio::task::spawn_blocking(move || -> Result<ExtractedDocument, AppError> {
        let scratch = ScratchFile::write_upload(&upload_dir, &filename, &resume)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(extractor.extract(scratch.path(), &filename)?)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume extraction task failed: {e}")))??;

    if form.job_description.trim().is_empty() {
        return Err(AppError::EmptyJobDescription);
    }

    info!(
        "Processed resume {} ({} chars of text)",
        form.filename,
        document.text.len()
    );

    Ok(Json(ProcessedDocuments {
        resume_text: document.text,
        job_description_text: form.job_description,
        message: "Documents processed successfully.".to_string(),
    }))
}
