#![doc = r#"
Resolving note lines to wall-clock time.

The gap and tempo of an UltraStar header are written with a comma as decimal
separator. Times are computed as

```text
start = beat_to_seconds(trunc(start_beat), real_bpm) + gap
end   = beat_to_seconds(trunc(start_beat) + trunc(duration), real_bpm) + gap
```

`start_beat` and `duration` are truncated separately before they are added,
so `1.9 + 1.9` resolves to beat `2`, not `3`.

```rust
# use ultrastar_midi::prelude::*;
assert_eq!(start_time("0,0", "30,0", 2.).unwrap(), 1.0);
assert_eq!(end_time("0,0", "30,0", 2., 2.).unwrap(), 2.0);
assert_eq!(end_time("0,0", "30,0", 1.9, 1.9).unwrap(), 1.0);
```
"#]

use crate::{
    ConvertError, ConvertResult, ParseError, TextField,
    beat::beat_to_seconds,
    tempo::{FileBpm, RealBpm},
    ultrastar::UltrastarDocument,
};

const MILLIS_PER_SECOND: f64 = 1_000.;

fn parse_decimal(field: TextField, text: &str) -> Result<f64, ParseError> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|source| ParseError::InvalidNumber {
            field,
            text: text.to_owned(),
            source,
        })
}

/// Parses a gap written in milliseconds and returns it in seconds.
///
/// ```rust
/// # use ultrastar_midi::prelude::*;
/// assert_eq!(parse_gap_seconds("1000").unwrap(), 1.0);
/// assert_eq!(parse_gap_seconds("500,0").unwrap(), 0.5);
/// assert!(parse_gap_seconds("abc").is_err());
/// ```
pub fn parse_gap_seconds(gap: &str) -> Result<f64, ParseError> {
    parse_decimal(TextField::Gap, gap).map(|ms| ms / MILLIS_PER_SECOND)
}

/// Parses a tempo written in the file's quarter scale and returns the real tempo.
pub fn parse_real_tempo(bpm: &str) -> Result<RealBpm, ParseError> {
    parse_decimal(TextField::Bpm, bpm).map(|bpm| FileBpm::new(bpm).to_real())
}

/// Truncates a beat value toward zero, as a whole number of beats.
///
/// Stays in `f64` so beats beyond the `i64` range neither saturate nor overflow.
fn whole_beats(value: f64) -> ConvertResult<f64> {
    if value.is_finite() {
        Ok(value.trunc())
    } else {
        Err(ConvertError::Beat(value))
    }
}

#[doc = r#"
The gap and real tempo of one document, parsed once.

Resolving many note lines through a `DocumentTiming` gives the same times as
calling [`start_time`] and [`end_time`] with the header text for every line.

# Example
```rust
# use ultrastar_midi::prelude::*;
let timing = DocumentTiming::parse("1500", "30").unwrap();

assert_eq!(timing.gap_seconds(), 1.5);
assert_eq!(timing.bpm(), RealBpm::new(120.));
assert_eq!(timing.start_time(4.).unwrap(), 3.5);
assert_eq!(timing.end_time(4., 2.).unwrap(), 4.5);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentTiming {
    gap_seconds: f64,
    bpm: RealBpm,
}

impl DocumentTiming {
    /// Create timing from an already parsed gap (in seconds) and real tempo
    pub const fn new(gap_seconds: f64, bpm: RealBpm) -> Self {
        Self { gap_seconds, bpm }
    }

    /// Parse the header text of a document. The gap is parsed first.
    pub fn parse(gap: &str, bpm: &str) -> Result<Self, ParseError> {
        let gap_seconds = parse_gap_seconds(gap)?;
        let bpm = parse_real_tempo(bpm)?;
        Ok(Self { gap_seconds, bpm })
    }

    /// Parse the header of a document
    pub fn from_document(document: &UltrastarDocument) -> Result<Self, ParseError> {
        Self::parse(document.gap(), document.bpm())
    }

    /// The gap in seconds
    pub const fn gap_seconds(&self) -> f64 {
        self.gap_seconds
    }

    /// The real tempo
    pub const fn bpm(&self) -> RealBpm {
        self.bpm
    }

    /// Start time in seconds of a line beginning at `start_beat`
    pub fn start_time(&self, start_beat: f64) -> ConvertResult<f64> {
        let beat = whole_beats(start_beat)?;
        Ok(beat_to_seconds(beat, self.bpm)? + self.gap_seconds)
    }

    /// End time in seconds of a line beginning at `start_beat` lasting `duration` beats
    pub fn end_time(&self, start_beat: f64, duration: f64) -> ConvertResult<f64> {
        let beat = whole_beats(start_beat)? + whole_beats(duration)?;
        Ok(beat_to_seconds(beat, self.bpm)? + self.gap_seconds)
    }
}

/// Start time in seconds of a line, given the header's gap and tempo text.
pub fn start_time(gap: &str, bpm: &str, start_beat: f64) -> ConvertResult<f64> {
    DocumentTiming::parse(gap, bpm)?.start_time(start_beat)
}

/// End time in seconds of a line, given the header's gap and tempo text.
pub fn end_time(gap: &str, bpm: &str, start_beat: f64, duration: f64) -> ConvertResult<f64> {
    DocumentTiming::parse(gap, bpm)?.end_time(start_beat, duration)
}

fn line_at(document: &UltrastarDocument, position: usize) -> ConvertResult<(f64, f64)> {
    document
        .note_line(position)
        .map(|line| (line.start_beat, line.duration))
        .ok_or(ConvertError::OutOfBounds {
            position,
            len: document.note_lines().len(),
        })
}

/// Start time in seconds of the note line at `position` in the document.
pub fn start_time_at(document: &UltrastarDocument, position: usize) -> ConvertResult<f64> {
    let (start_beat, _) = line_at(document, position)?;
    start_time(document.gap(), document.bpm(), start_beat)
}

/// End time in seconds of the note line at `position` in the document.
pub fn end_time_at(document: &UltrastarDocument, position: usize) -> ConvertResult<f64> {
    let (start_beat, duration) = line_at(document, position)?;
    end_time(document.gap(), document.bpm(), start_beat, duration)
}

#[test]
fn gap_parsing() {
    assert_eq!(parse_gap_seconds("1000").unwrap(), 1.0);
    assert_eq!(parse_gap_seconds("500,0").unwrap(), 0.5);
    assert_eq!(parse_gap_seconds("0").unwrap(), 0.0);
    assert_eq!(parse_gap_seconds("-250").unwrap(), -0.25);
}

#[test]
fn tempo_parsing() {
    assert_eq!(parse_real_tempo("30,0").unwrap(), RealBpm::new(120.));
    assert_eq!(parse_real_tempo("62.5").unwrap(), RealBpm::new(250.));
}

#[test]
fn malformed_text() {
    let err = parse_gap_seconds("abc").unwrap_err();
    assert_eq!(err.field(), TextField::Gap);

    let err = parse_real_tempo("1,2,3").unwrap_err();
    assert_eq!(err.field(), TextField::Bpm);

    assert!(parse_gap_seconds("1 000").is_err());
    assert!(parse_real_tempo("").is_err());
    assert!(parse_real_tempo("  ").is_err());
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_gap_seconds(" 100").unwrap(), 0.1);
    assert_eq!(parse_gap_seconds("1500\r").unwrap(), 1.5);
    assert_eq!(parse_real_tempo("30 ").unwrap(), RealBpm::new(120.));
    assert_eq!(parse_real_tempo("\t62,5\r\n").unwrap(), RealBpm::new(250.));
}

#[test]
fn gap_is_parsed_before_tempo() {
    let err = start_time("x", "y", 0.).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Parse(ParseError::InvalidNumber {
            field: TextField::Gap,
            ..
        })
    ));
}

#[test]
fn start_and_end_at_120_bpm() {
    assert_eq!(start_time("0,0", "30,0", 2.).unwrap(), 1.0);
    assert_eq!(end_time("0,0", "30,0", 2., 2.).unwrap(), 2.0);
}

#[test]
fn truncates_before_summing() {
    // trunc(1.9) + trunc(1.9) = 2 beats = 1 second at 120 bpm
    assert_eq!(end_time("0", "30", 1.9, 1.9).unwrap(), 1.0);
    assert_eq!(start_time("0", "30", 1.9).unwrap(), 0.5);
    // toward zero
    assert_eq!(start_time("0", "30", -1.9).unwrap(), -0.5);
}

#[test]
fn beats_beyond_integer_range() {
    assert_eq!(start_time("0", "30", 1e19).unwrap(), 5e18);
    assert_eq!(end_time("0", "30", 1e19, 1e19).unwrap(), 1e19);
    assert_eq!(end_time("0", "30", 1e19 + 0.5, -1e19).unwrap(), 0.);
}

#[test]
fn gap_is_added() {
    assert_eq!(start_time("2000", "30", 0.).unwrap(), 2.0);
    assert_eq!(end_time("250", "15", 1., 1.).unwrap(), 0.25 + 2.0 * 60. / 60.);
}

#[test]
fn unusable_values() {
    assert!(matches!(
        start_time("0", "0", 1.),
        Err(ConvertError::Tempo(_))
    ));
    assert!(matches!(
        end_time("0", "30", f64::NAN, 1.),
        Err(ConvertError::Beat(_))
    ));
    assert!(matches!(
        end_time("0", "30", 1., f64::INFINITY),
        Err(ConvertError::Beat(_))
    ));
}
