// SPDX-License-Identifier: MPL-2.0
//! Derivation of playable highlight segments from the current selection.

use super::{ProcessingResult, SelectedSet};

/// A contiguous playable time range taken from one selected sentence.
///
/// Always satisfies `start_secs < end_secs`. Segment lists produced by
/// [`highlight_segments`] are sorted ascending by start; overlap between
/// segments is passed through from the source data, not resolved here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightSegment {
    pub start_secs: f64,
    pub end_secs: f64,
}

impl HighlightSegment {
    /// Half-open containment test: `position == end_secs` counts as outside.
    ///
    /// Auto-skip uses this so a position sitting exactly on a segment end is
    /// treated as already exited. Caption resolution uses the sentence's own
    /// closed interval instead.
    #[must_use]
    pub fn contains(&self, position_secs: f64) -> bool {
        position_secs >= self.start_secs && position_secs < self.end_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

/// Computes the ordered segment list for the given document and selection.
///
/// Pure derivation: every selected sentence becomes one segment regardless of
/// section, sorted ascending by start time. No document or empty selection
/// yields an empty list. Callers re-run this whenever the document or the
/// selection changes.
#[must_use]
pub fn highlight_segments(
    document: Option<&ProcessingResult>,
    selection: &SelectedSet,
) -> Vec<HighlightSegment> {
    let Some(document) = document else {
        return Vec::new();
    };

    let mut segments: Vec<HighlightSegment> = document
        .sentences()
        .filter(|s| selection.contains(&s.id))
        .map(|s| HighlightSegment {
            start_secs: s.start_time,
            end_secs: s.end_time,
        })
        .collect();
    segments.sort_by(|a, b| a.start_secs.total_cmp(&b.start_secs));
    segments
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::{gapped_document, sentence};
    use super::super::Section;
    use super::*;
    use approx::assert_relative_eq;

    fn select(ids: &[&str]) -> SelectedSet {
        let mut selection = SelectedSet::new();
        for id in ids {
            selection.toggle(id);
        }
        selection
    }

    #[test]
    fn absent_document_yields_no_segments() {
        let segments = highlight_segments(None, &select(&["1", "2"]));
        assert!(segments.is_empty());
    }

    #[test]
    fn empty_selection_yields_no_segments() {
        let doc = gapped_document();
        assert!(highlight_segments(Some(&doc), &SelectedSet::new()).is_empty());
    }

    #[test]
    fn one_segment_per_selected_sentence_sorted_by_start() {
        let doc = gapped_document();
        let segments = highlight_segments(Some(&doc), &select(&["3", "1"]));

        assert_eq!(segments.len(), 2);
        assert_relative_eq!(segments[0].start_secs, 0.0);
        assert_relative_eq!(segments[0].end_secs, 5.0);
        assert_relative_eq!(segments[1].start_secs, 20.0);
        assert_relative_eq!(segments[1].end_secs, 25.0);
    }

    #[test]
    fn overlapping_intervals_pass_through_unmerged() {
        let doc = ProcessingResult {
            full_transcript: String::new(),
            sections: vec![Section {
                title: String::new(),
                sentences: vec![
                    sentence("a", 0.0, 10.0, false),
                    sentence("b", 5.0, 15.0, false),
                ],
            }],
        };
        let segments = highlight_segments(Some(&doc), &select(&["a", "b"]));

        assert_eq!(segments.len(), 2);
        assert_relative_eq!(segments[0].end_secs, 10.0);
        assert_relative_eq!(segments[1].start_secs, 5.0);
    }

    #[test]
    fn containment_is_half_open() {
        let segment = HighlightSegment {
            start_secs: 10.0,
            end_secs: 15.0,
        };
        assert!(segment.contains(10.0));
        assert!(segment.contains(14.999));
        assert!(!segment.contains(15.0));
        assert!(!segment.contains(9.999));
    }
}
