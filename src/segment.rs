#![doc = r#"
The timed note segments handed to downstream rendering.
"#]

use core::fmt;

/// A named note sounding between two points in time, with its lyric.
///
/// Segments are not validated: `end` may equal or precede `start`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiSegment {
    note: String,
    start: f64,
    end: f64,
    word: String,
}

impl MidiSegment {
    /// Create a new segment. Times are in seconds.
    pub fn new(note: impl Into<String>, start: f64, end: f64, word: impl Into<String>) -> Self {
        Self {
            note: note.into(),
            start,
            end,
            word: word.into(),
        }
    }

    /// The note name, e.g. `C♯4`
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Start time in seconds
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// End time in seconds
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// The lyric
    pub fn word(&self) -> &str {
        &self.word
    }

    /// `end - start`. Negative for reversed segments.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True if the segment does not end after it starts
    pub fn is_reversed(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for MidiSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{:.3}s - {:.3}s] {:?}",
            self.note, self.start, self.end, self.word
        )
    }
}

#[test]
fn segment_accessors() {
    let segment = MidiSegment::new("A4", 1.5, 2.25, "la");
    assert_eq!(segment.note(), "A4");
    assert_eq!(segment.duration(), 0.75);
    assert!(!segment.is_reversed());
    assert_eq!(segment.to_string(), "A4 [1.500s - 2.250s] \"la\"");

    assert!(MidiSegment::new("A4", 1., 1., "").is_reversed());
}
