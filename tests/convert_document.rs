use pretty_assertions::assert_eq;
use ultrastar_midi::prelude::*;

/// A short song at real tempo 120 with a one second gap
fn song() -> UltrastarDocument {
    UltrastarDocument::new("1000,0", "30,0").with_lines([
        UltrastarNoteLine::new(0., 2., 12, "Twin"),
        UltrastarNoteLine::new(2., 2., 12, "kle"),
        UltrastarNoteLine::new(4., 2., 19, "twin"),
        UltrastarNoteLine::new(6., 2., 19, "kle"),
        UltrastarNoteLine::new(8., 2., 21, "lit"),
        UltrastarNoteLine::new(10., 2., 22, "tle"),
    ])
}

#[test]
fn converts_song() {
    let segments = ultrastar_to_midi_segments(&song()).unwrap();

    assert_eq!(
        segments,
        vec![
            MidiSegment::new("C4", 1.0, 2.0, "Twin"),
            MidiSegment::new("C4", 2.0, 3.0, "kle"),
            MidiSegment::new("G4", 3.0, 4.0, "twin"),
            MidiSegment::new("G4", 4.0, 5.0, "kle"),
            MidiSegment::new("A4", 5.0, 6.0, "lit"),
            MidiSegment::new("A♯4", 6.0, 7.0, "tle"),
        ]
    );
}

#[test]
fn preserves_order_and_count() {
    let document = UltrastarDocument::new("0", "30").with_lines([
        UltrastarNoteLine::new(10., 1., 0, "c"),
        UltrastarNoteLine::new(0., 1., 0, "a"),
        UltrastarNoteLine::new(5., 1., 0, "b"),
    ]);

    let segments = ultrastar_to_midi_segments(&document).unwrap();
    assert_eq!(segments.len(), 3);

    let words: Vec<&str> = segments.iter().map(MidiSegment::word).collect();
    assert_eq!(words, ["c", "a", "b"]);

    let starts: Vec<f64> = segments.iter().map(MidiSegment::start).collect();
    assert_eq!(starts, [5.0, 0.0, 2.5]);
}

#[test]
fn empty_document() {
    let document = UltrastarDocument::new("0", "30");
    assert!(ultrastar_to_midi_segments(&document).unwrap().is_empty());
}

#[test]
fn truncates_beats_separately() {
    let document =
        UltrastarDocument::new("0", "30").with_line(UltrastarNoteLine::new(1.9, 1.9, 0, "x"));

    let segments = ultrastar_to_midi_segments(&document).unwrap();

    // beat 1 to beat 1 + 1, not beat 3
    assert_eq!(segments[0].start(), 0.5);
    assert_eq!(segments[0].end(), 1.0);
}

#[test]
fn reversed_segments_pass_through() {
    let document = UltrastarDocument::new("0", "30").with_lines([
        UltrastarNoteLine::new(4., 0., 0, "zero"),
        UltrastarNoteLine::new(4., -2., 0, "negative"),
    ]);

    let segments = ultrastar_to_midi_segments(&document).unwrap();

    assert_eq!(segments[0].duration(), 0.);
    assert_eq!(segments[1].start(), 2.0);
    assert_eq!(segments[1].end(), 1.0);
    assert!(segments.iter().all(MidiSegment::is_reversed));
}

#[test]
fn document_timing_matches_per_line_parsing() {
    let document = song();
    let timing = DocumentTiming::from_document(&document).unwrap();

    for (position, line) in document.note_lines().iter().enumerate() {
        assert_eq!(
            timing.start_time(line.start_beat).unwrap(),
            start_time_at(&document, position).unwrap()
        );
        assert_eq!(
            timing.end_time(line.start_beat, line.duration).unwrap(),
            end_time_at(&document, position).unwrap()
        );
    }
}

#[test]
fn segments_match_indexed_times() {
    let document = song();
    let segments = ultrastar_to_midi_segments(&document).unwrap();

    for (position, segment) in segments.iter().enumerate() {
        assert_eq!(segment.start(), start_time_at(&document, position).unwrap());
        assert_eq!(segment.end(), end_time_at(&document, position).unwrap());
    }
}

#[test]
fn ascii_note_names() {
    let converter =
        SegmentConverter::with_naming(NoteNaming::default().with_accidental(Accidental::Ascii));

    let names: Vec<String> = converter
        .convert(&song())
        .unwrap()
        .into_iter()
        .map(|segment| segment.note().to_owned())
        .collect();

    assert_eq!(names, ["C4", "C4", "G4", "G4", "A4", "A#4"]);
}

#[test]
fn out_of_range_pitches_are_named() {
    let document = UltrastarDocument::new("0", "30").with_lines([
        UltrastarNoteLine::new(0., 1., -49, "low"),
        UltrastarNoteLine::new(1., 1., 80, "high"),
    ]);

    let segments = ultrastar_to_midi_segments(&document).unwrap();

    assert_eq!(segments[0].note(), "B-2");
    assert_eq!(segments[1].note(), "G♯9");
}
