//! PDF rendering seam.
//!
//! HTML → PDF conversion is delegated to an external renderer. `AppState`
//! carries an `Arc<dyn PdfRenderer>`; production uses `HttpPdfRenderer`
//! against a Gotenberg-compatible Chromium endpoint.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use crate::errors::AppError;

const CONVERT_HTML_PATH: &str = "/forms/chromium/convert/html";
const TWIPS_PER_INCH: f64 = 1440.0;
const MM_PER_INCH: f64 = 25.4;

/// Paper size and margins. Defaults to US Letter with 20mm margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width_in: f64,
    pub height_in: f64,
    pub margin_mm: f64,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            width_in: 8.5,
            height_in: 11.0,
            margin_mm: 20.0,
        }
    }
}

impl PageSetup {
    pub fn width_twips(&self) -> u32 {
        (self.width_in * TWIPS_PER_INCH).round() as u32
    }

    pub fn height_twips(&self) -> u32 {
        (self.height_in * TWIPS_PER_INCH).round() as u32
    }

    pub fn margin_twips(&self) -> u32 {
        (self.margin_mm / MM_PER_INCH * TWIPS_PER_INCH).round() as u32
    }
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str, page: &PageSetup) -> Result<Bytes, AppError>;
}

/// Posts the HTML as a multipart form and returns the response body as the PDF.
pub struct HttpPdfRenderer {
    client: Client,
    endpoint: String,
}

impl HttpPdfRenderer {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build PDF renderer HTTP client")?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONVERT_HTML_PATH),
        })
    }
}

#[async_trait]
impl PdfRenderer for HttpPdfRenderer {
    async fn render(&self, html: &str, page: &PageSetup) -> Result<Bytes, AppError> {
        let index = Part::bytes(html.as_bytes().to_vec())
            .file_name("index.html")
            .mime_str("text/html")
            .map_err(|e| AppError::Rendering(format!("Invalid HTML part: {e}")))?;

        let margin = format!("{}mm", page.margin_mm);
        let form = Form::new()
            .part("files", index)
            .text("paperWidth", format!("{}in", page.width_in))
            .text("paperHeight", format!("{}in", page.height_in))
            .text("marginTop", margin.clone())
            .text("marginRight", margin.clone())
            .text("marginBottom", margin.clone())
            .text("marginLeft", margin)
            .text("printBackground", "true");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Rendering(format!("PDF renderer unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Rendering(format!(
                "PDF renderer returned {status}: {body}"
            )));
        }

        let pdf = response
            .bytes()
            .await
            .map_err(|e| AppError::Rendering(format!("Failed to read PDF body: {e}")))?;
        debug!("PDF renderer produced {} bytes", pdf.len());
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_page_in_twips() {
        let page = PageSetup::default();
        assert_eq!(page.width_twips(), 12240);
        assert_eq!(page.height_twips(), 15840);
        assert_eq!(page.margin_twips(), 1134);
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let renderer = HttpPdfRenderer::new("http://renderer:3000/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            renderer.endpoint,
            "http://renderer:3000/forms/chromium/convert/html"
        );
    }
}
