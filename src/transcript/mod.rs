// SPDX-License-Identifier: MPL-2.0
//! Transcript document model for Reelcut.
//!
//! A processing run turns one uploaded video into a [`ProcessingResult`]:
//! the full transcript text plus sections of timed sentences. The document
//! is immutable once received and replaced wholesale by the next upload.

pub mod segments;
pub mod selection;
pub mod service;

pub use segments::{highlight_segments, HighlightSegment};
pub use selection::SelectedSet;

use serde::{Deserialize, Serialize};

/// One machine-transcribed sentence with its time interval.
///
/// `start_time`/`end_time` are seconds from the beginning of the video,
/// with `start_time >= 0` and `end_time > start_time` guaranteed by the
/// transcription source. Field names follow the processing service's
/// camelCase wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    /// Unique sentence identifier within one document.
    pub id: String,
    /// Transcribed text.
    pub text: String,
    /// Interval start in seconds.
    pub start_time: f64,
    /// Interval end in seconds.
    pub end_time: f64,
    /// Whether the transcription source recommends this sentence as a highlight.
    pub is_suggested_highlight: bool,
}

impl Sentence {
    /// Returns true if `position_secs` falls within this sentence's interval.
    ///
    /// The interval is closed on both ends so a caption stays visible exactly
    /// at its sentence's end timestamp.
    #[must_use]
    pub fn covers(&self, position_secs: f64) -> bool {
        position_secs >= self.start_time && position_secs <= self.end_time
    }
}

/// A titled group of sentences.
///
/// Grouping only; sections carry no temporal meaning beyond sentence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub sentences: Vec<Sentence>,
}

/// The document produced by one successful processing run.
///
/// Created once per upload and never mutated in place; a re-upload replaces
/// the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub full_transcript: String,
    pub sections: Vec<Section>,
}

impl ProcessingResult {
    /// Iterates all sentences in section/sentence document order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sections.iter().flat_map(|section| &section.sentences)
    }

    /// Total number of sentences across all sections.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.sections.iter().map(|s| s.sentences.len()).sum()
    }

    /// Returns true if the document contains no sentences at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.sentences.is_empty())
    }

    /// Playback duration in seconds, defined as the maximum sentence end time.
    ///
    /// Deliberately not the media file's own length: the timeline reflects
    /// transcript coverage. Returns 0.0 for an empty document.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.sentences()
            .map(|s| s.end_time)
            .fold(0.0_f64, f64::max)
    }

    /// Resolves the sentence currently being spoken at `position_secs`.
    ///
    /// Scans in document order and returns the first sentence whose closed
    /// interval contains the position; overlapping sentences therefore
    /// resolve to the earliest match.
    #[must_use]
    pub fn sentence_at(&self, position_secs: f64) -> Option<&Sentence> {
        self.sentences().find(|s| s.covers(position_secs))
    }
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::{gapped_document, sentence};
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sentences_iterate_in_document_order() {
        let doc = gapped_document();
        let ids: Vec<&str> = doc.sentences().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn duration_is_maximum_end_time() {
        let doc = gapped_document();
        assert_relative_eq!(doc.duration_secs(), 25.0);
    }

    #[test]
    fn duration_handles_out_of_order_sentences() {
        let doc = ProcessingResult {
            full_transcript: String::new(),
            sections: vec![Section {
                title: String::new(),
                sentences: vec![sentence("b", 30.0, 42.0, false), sentence("a", 0.0, 5.0, false)],
            }],
        };
        assert_relative_eq!(doc.duration_secs(), 42.0);
    }

    #[test]
    fn empty_document_has_zero_duration() {
        let doc = ProcessingResult {
            full_transcript: String::new(),
            sections: vec![],
        };
        assert!(doc.is_empty());
        assert_relative_eq!(doc.duration_secs(), 0.0);
    }

    #[test]
    fn resolver_finds_containing_sentence() {
        let doc = gapped_document();
        let found = doc.sentence_at(12.0).map(|s| s.id.as_str());
        assert_eq!(found, Some("2"));
    }

    #[test]
    fn resolver_is_inclusive_at_both_interval_ends() {
        let doc = gapped_document();
        assert_eq!(doc.sentence_at(10.0).map(|s| s.id.as_str()), Some("2"));
        assert_eq!(doc.sentence_at(15.0).map(|s| s.id.as_str()), Some("2"));
    }

    #[test]
    fn resolver_returns_none_in_gaps() {
        let doc = gapped_document();
        assert!(doc.sentence_at(7.5).is_none());
        assert!(doc.sentence_at(17.0).is_none());
        assert!(doc.sentence_at(26.0).is_none());
    }

    #[test]
    fn resolver_prefers_first_match_for_overlapping_sentences() {
        let doc = ProcessingResult {
            full_transcript: String::new(),
            sections: vec![Section {
                title: String::new(),
                sentences: vec![
                    sentence("first", 0.0, 10.0, false),
                    sentence("second", 5.0, 15.0, false),
                ],
            }],
        };
        assert_eq!(doc.sentence_at(7.0).map(|s| s.id.as_str()), Some("first"));
    }

    #[test]
    fn sentence_count_spans_sections() {
        assert_eq!(gapped_document().sentence_count(), 3);
    }

    #[test]
    fn document_deserializes_from_camel_case_wire_format() {
        let json = r#"{
            "fullTranscript": "hello world",
            "sections": [{
                "title": "Opening",
                "sentences": [{
                    "id": "s-1",
                    "text": "hello world",
                    "startTime": 0.5,
                    "endTime": 2.25,
                    "isSuggestedHighlight": true
                }]
            }]
        }"#;

        let doc: ProcessingResult = serde_json::from_str(json).expect("valid document");
        assert_eq!(doc.full_transcript, "hello world");
        assert_eq!(doc.sentence_count(), 1);

        let first = doc.sentences().next().expect("one sentence");
        assert_eq!(first.id, "s-1");
        assert_relative_eq!(first.start_time, 0.5);
        assert_relative_eq!(first.end_time, 2.25);
        assert!(first.is_suggested_highlight);
    }
}
