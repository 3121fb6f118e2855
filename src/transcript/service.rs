// SPDX-License-Identifier: MPL-2.0
//! Client for the video processing backend.
//!
//! Turns a selected video file into a [`ProcessingResult`], either by
//! uploading it to the configured backend or, in mock mode, by serving a
//! bundled sample document after a simulated processing delay.

use std::path::Path;
use std::time::Duration;

use rust_embed::RustEmbed;

use super::ProcessingResult;
use crate::app::config::defaults::MOCK_PROCESSING_DELAY_MS;
use crate::error::TranscriptError;

/// Embedded sample document served in mock mode.
#[derive(RustEmbed)]
#[folder = "assets/mock/"]
struct MockAsset;

const MOCK_DOCUMENT: &str = "videoProcess.json";

/// Runs the selected file through processing and returns the document.
///
/// In mock mode the file itself is ignored; the bundled sample document
/// stands in for the backend's answer so the app works without one.
pub async fn process_video(
    video_path: &Path,
    api_base_url: &str,
    use_mock_data: bool,
) -> Result<ProcessingResult, TranscriptError> {
    if use_mock_data {
        fetch_mock_document().await
    } else {
        upload_video(video_path, api_base_url).await
    }
}

/// Serves the embedded sample document after a simulated processing delay.
async fn fetch_mock_document() -> Result<ProcessingResult, TranscriptError> {
    tokio::time::sleep(Duration::from_millis(MOCK_PROCESSING_DELAY_MS)).await;

    let asset = MockAsset::get(MOCK_DOCUMENT).ok_or_else(|| {
        TranscriptError::MalformedDocument(format!("embedded {MOCK_DOCUMENT} is missing"))
    })?;
    parse_document(&asset.data)
}

/// Uploads the file to the processing backend and parses the response.
async fn upload_video(
    video_path: &Path,
    api_base_url: &str,
) -> Result<ProcessingResult, TranscriptError> {
    // Build client with explicit redirect policy and user agent
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("Reelcut/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let file_name = video_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_string());
    let bytes = tokio::fs::read(video_path)
        .await
        .map_err(|e| TranscriptError::Transport(e.to_string()))?;
    let form = reqwest::multipart::Form::new().part(
        "video",
        reqwest::multipart::Part::bytes(bytes).file_name(file_name),
    );

    let response = client
        .post(process_endpoint(api_base_url))
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(TranscriptError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    parse_document(&body)
}

/// Joins the configured base URL with the processing route.
fn process_endpoint(api_base_url: &str) -> String {
    format!("{}/videoProcess", api_base_url.trim_end_matches('/'))
}

/// Parses and validates a processing document.
fn parse_document(bytes: &[u8]) -> Result<ProcessingResult, TranscriptError> {
    let document: ProcessingResult = serde_json::from_slice(bytes)?;
    if document.is_empty() {
        return Err(TranscriptError::EmptyDocument);
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "fullTranscript": "Hello world.",
        "sections": [{
            "title": "Intro",
            "sentences": [{
                "id": "s1",
                "text": "Hello world.",
                "startTime": 0.0,
                "endTime": 1.5,
                "isSuggestedHighlight": true
            }]
        }]
    }"#;

    #[test]
    fn parse_document_accepts_camel_case_json() {
        let document = parse_document(SAMPLE.as_bytes()).expect("valid document");
        assert_eq!(document.sentence_count(), 1);
        assert!(document.sections[0].sentences[0].is_suggested_highlight);
    }

    #[test]
    fn parse_document_rejects_invalid_json() {
        let result = parse_document(b"not json");
        assert!(matches!(result, Err(TranscriptError::MalformedDocument(_))));
    }

    #[test]
    fn parse_document_rejects_document_without_sentences() {
        let result = parse_document(br#"{"fullTranscript": "", "sections": []}"#);
        assert!(matches!(result, Err(TranscriptError::EmptyDocument)));
    }

    #[test]
    fn embedded_mock_document_is_valid() {
        let asset = MockAsset::get(MOCK_DOCUMENT).expect("bundled sample document");
        let document = parse_document(&asset.data).expect("sample parses");
        assert!(!document.is_empty());
        // The sample ships suggested highlights so a fresh session has a
        // non-empty selection to play with.
        assert!(document.sentences().any(|s| s.is_suggested_highlight));
    }

    #[test]
    fn process_endpoint_joins_base_url() {
        assert_eq!(
            process_endpoint("http://localhost:3001/api"),
            "http://localhost:3001/api/videoProcess"
        );
        assert_eq!(
            process_endpoint("http://localhost:3001/api/"),
            "http://localhost:3001/api/videoProcess"
        );
    }

    #[tokio::test]
    async fn mock_mode_ignores_the_selected_file() {
        let document = process_video(Path::new("does-not-exist.mp4"), "http://unused", true)
            .await
            .expect("mock document");
        assert!(!document.is_empty());
    }
}
