//! Export formatter: `ResumeData` → PDF (via HTML and the renderer seam) or DOCX.
//! Every request regenerates the document; nothing is cached.

pub mod docx;
pub mod handlers;
pub mod html;
pub mod pdf;

use std::str::FromStr;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::export::docx::WordDocument;
use crate::export::html::render_html;
use crate::export::pdf::{PageSetup, PdfRenderer};
use crate::models::document::ResumeData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn content_disposition(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "attachment; filename=resume.pdf",
            ExportFormat::Docx => "attachment; filename=resume.docx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            _ => Err(AppError::Validation("Invalid format specified".to_string())),
        }
    }
}

/// A fully rendered export, ready to stream back as an attachment.
#[derive(Debug)]
pub struct ExportedDocument {
    pub format: ExportFormat,
    pub bytes: Bytes,
}

impl IntoResponse for ExportedDocument {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, self.format.content_type()),
                (header::CONTENT_DISPOSITION, self.format.content_disposition()),
            ],
            self.bytes,
        )
            .into_response()
    }
}

pub async fn export_resume(
    format: ExportFormat,
    data: &ResumeData,
    renderer: &dyn PdfRenderer,
) -> Result<ExportedDocument, AppError> {
    let bytes = match format {
        ExportFormat::Pdf => {
            let html = render_html(data)
                .map_err(|e| AppError::Rendering(format!("HTML template failed: {e}")))?;
            renderer.render(&html, &PageSetup::default()).await?
        }
        ExportFormat::Docx => WordDocument::from_resume(data)
            .to_bytes()
            .map(Bytes::from)
            .map_err(|e| AppError::Rendering(format!("DOCX assembly failed: {e:#}")))?,
    };

    if bytes.is_empty() {
        return Err(AppError::Rendering("Renderer produced an empty document".to_string()));
    }

    info!("Exported resume as {:?} ({} bytes)", format, bytes.len());
    Ok(ExportedDocument { format, bytes })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::errors::AppError;
    use crate::export::pdf::{PageSetup, PdfRenderer};

    /// Renderer double: echoes a fake PDF header plus the HTML, or fails.
    #[derive(Default)]
    pub struct FakePdfRenderer {
        pub fail: bool,
        pub calls: AtomicUsize,
    }

    impl FakePdfRenderer {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl PdfRenderer for FakePdfRenderer {
        async fn render(&self, html: &str, page: &PageSetup) -> Result<Bytes, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::Rendering("renderer down".to_string()));
            }
            assert_eq!(*page, PageSetup::default());
            Ok(Bytes::from(format!("%PDF-1.7\n{html}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakePdfRenderer;
    use super::*;
    use crate::models::document::PersonalInfo;

    fn empty_resume() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Empty".to_string(),
                ..Default::default()
            },
            experience: vec![],
            education: vec![],
            skills: vec![],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(AppError::Validation(_))
        ));
        assert!("PDF".parse::<ExportFormat>().is_err());
    }

    #[tokio::test]
    async fn test_docx_export_of_empty_resume() {
        let renderer = FakePdfRenderer::default();
        let doc = export_resume(ExportFormat::Docx, &empty_resume(), &renderer)
            .await
            .unwrap();
        assert_eq!(&doc.bytes[..2], b"PK");
        assert_eq!(renderer.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_pdf_export_goes_through_renderer() {
        let renderer = FakePdfRenderer::default();
        let doc = export_resume(ExportFormat::Pdf, &empty_resume(), &renderer)
            .await
            .unwrap();
        assert!(doc.bytes.starts_with(b"%PDF"));
        assert_eq!(renderer.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_renderer_failure_is_rendering_error() {
        let renderer = FakePdfRenderer::failing();
        let result = export_resume(ExportFormat::Pdf, &empty_resume(), &renderer).await;
        assert!(matches!(result, Err(AppError::Rendering(_))));
    }

    #[tokio::test]
    async fn test_docx_export_is_byte_identical() {
        let renderer = FakePdfRenderer::default();
        let a = export_resume(ExportFormat::Docx, &empty_resume(), &renderer)
            .await
            .unwrap();
        let b = export_resume(ExportFormat::Docx, &empty_resume(), &renderer)
            .await
            .unwrap();
        assert_eq!(a.bytes, b.bytes);
    }
}
