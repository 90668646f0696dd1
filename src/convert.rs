#![doc = r#"
Converting a whole UltraStar document into [`MidiSegment`]s.

Output order and count match the document's note lines one to one. Nothing is
filtered or merged; the first failing line aborts the conversion.

# Example
```rust
# use ultrastar_midi::prelude::*;
let document = UltrastarDocument::new("1000", "15")
    .with_line(UltrastarNoteLine::new(0., 1., 1, "one"))
    .with_line(UltrastarNoteLine::new(1., 1., 3, "two"));

let converter = SegmentConverter::with_naming(
    NoteNaming::default().with_accidental(Accidental::Ascii),
);
let segments = converter.convert(&document).unwrap();

assert_eq!(
    segments,
    vec![
        MidiSegment::new("C#3", 1.0, 2.0, "one"),
        MidiSegment::new("D#3", 2.0, 3.0, "two"),
    ]
);
```
"#]

use crate::{
    ConvertResult,
    note::{NoteNamer, NoteNaming, to_midi_note},
    segment::MidiSegment,
    ultrastar::{UltrastarDocument, UltrastarNoteLine, timing::DocumentTiming},
};

/// Converts documents into segments, naming notes with `N`.
#[derive(Debug, Clone, Default)]
pub struct SegmentConverter<N = NoteNaming> {
    namer: N,
}

impl SegmentConverter {
    /// Create a converter with the default note naming
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given note naming
    pub fn with_naming(naming: NoteNaming) -> Self {
        Self { namer: naming }
    }
}

impl<N: NoteNamer> SegmentConverter<N> {
    /// Create a converter that looks up note names with `namer`
    pub fn with_namer(namer: N) -> Self {
        Self { namer }
    }

    /// Returns the note name lookup
    pub fn namer(&self) -> &N {
        &self.namer
    }

    /// Converts every note line of `document`, in order.
    ///
    /// An empty document yields no segments without reading its header.
    pub fn convert(&self, document: &UltrastarDocument) -> ConvertResult<Vec<MidiSegment>> {
        let lines = document.note_lines();
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let timing = DocumentTiming::from_document(document)?;
        log::debug!(
            "converting {} note lines, gap {}s at {}",
            lines.len(),
            timing.gap_seconds(),
            timing.bpm()
        );

        lines
            .iter()
            .enumerate()
            .map(|(position, line)| self.segment(&timing, position, line))
            .collect()
    }

    fn segment(
        &self,
        timing: &DocumentTiming,
        position: usize,
        line: &UltrastarNoteLine,
    ) -> ConvertResult<MidiSegment> {
        let start = timing.start_time(line.start_beat)?;
        let end = timing.end_time(line.start_beat, line.duration)?;
        let note = self.namer.note_name(to_midi_note(line.pitch));

        let segment = MidiSegment::new(note, start, end, line.word.as_str());
        if segment.is_reversed() {
            log::debug!("note line {position} does not end after it starts: {segment}");
        }
        log::trace!("note line {position}: {segment}");
        Ok(segment)
    }
}

/// Converts an UltraStar document into segments with the default note naming.
pub fn ultrastar_to_midi_segments(document: &UltrastarDocument) -> ConvertResult<Vec<MidiSegment>> {
    SegmentConverter::new().convert(document)
}

#[test]
fn empty_document_skips_header() {
    let document = UltrastarDocument::new("not a gap", "not a tempo");
    assert!(ultrastar_to_midi_segments(&document).unwrap().is_empty());
}

#[test]
fn custom_namer() {
    let document =
        UltrastarDocument::new("0", "30").with_line(UltrastarNoteLine::new(0., 2., -48, "lo"));
    let converter = SegmentConverter::with_namer(|midi: i32| format!("midi {midi}"));

    let segments = converter.convert(&document).unwrap();
    assert_eq!(segments, vec![MidiSegment::new("midi 0", 0., 1., "lo")]);
}
