use ultrastar_midi::prelude::*;

fn one_line(gap: &str, bpm: &str) -> UltrastarDocument {
    UltrastarDocument::new(gap, bpm).with_line(UltrastarNoteLine::new(0., 1., 0, "la"))
}

#[test]
fn malformed_gap() {
    let result = ultrastar_to_midi_segments(&one_line("abc", "30"));
    let err = match result {
        Err(ConvertError::Parse(err)) => err,
        other => panic!("expected a parse error, got {other:?}"),
    };
    assert_eq!(err.field(), TextField::Gap);
    assert!(matches!(
        err,
        ParseError::InvalidNumber { ref text, .. } if text == "abc"
    ));
}

#[test]
fn malformed_bpm() {
    let result = ultrastar_to_midi_segments(&one_line("0", "thirty"));
    assert!(matches!(
        result,
        Err(ConvertError::Parse(ParseError::InvalidNumber {
            field: TextField::Bpm,
            ..
        }))
    ));
}

#[test]
fn inner_text_is_not_cleaned_up() {
    for text in ["3 0", "1.000,5", "30bpm", "", " \r\n"] {
        let result = ultrastar_to_midi_segments(&one_line("0", text));
        assert!(
            result.as_ref().is_err_and(ConvertError::is_parse_error),
            "{text:?} gave {result:?}"
        );
    }
}

#[test]
fn header_line_endings_are_accepted() {
    let segments = ultrastar_to_midi_segments(&one_line("1000 \r", " 30,0\r\n")).unwrap();
    assert_eq!(segments[0].start(), 1.0);
    assert_eq!(segments[0].end(), 1.5);
}

#[test]
fn zero_and_negative_tempo() {
    for bpm in ["0", "0,0", "-30"] {
        let result = ultrastar_to_midi_segments(&one_line("0", bpm));
        assert!(
            matches!(result, Err(ConvertError::Tempo(_))),
            "{bpm:?} gave {result:?}"
        );
    }
}

#[test]
fn non_finite_beats() {
    let document = UltrastarDocument::new("0", "30")
        .with_line(UltrastarNoteLine::new(0., 1., 0, "ok"))
        .with_line(UltrastarNoteLine::new(f64::NAN, 1., 0, "bad"));

    let result = ultrastar_to_midi_segments(&document);
    assert!(matches!(result, Err(ConvertError::Beat(b)) if b.is_nan()));
}

#[test]
fn indexed_lookup_out_of_bounds() {
    let document = one_line("0", "30");

    assert!(start_time_at(&document, 0).is_ok());
    assert_eq!(
        start_time_at(&document, 1),
        Err(ConvertError::OutOfBounds {
            position: 1,
            len: 1
        })
    );
    assert_eq!(
        end_time_at(&document, 7),
        Err(ConvertError::OutOfBounds {
            position: 7,
            len: 1
        })
    );
}

#[test]
fn error_messages() {
    let err = parse_gap_seconds("abc").unwrap_err();
    assert_eq!(err.to_string(), "gap value \"abc\" is not a decimal number");

    let err = ConvertError::from(err);
    assert_eq!(
        err.to_string(),
        "Parsing gap value \"abc\" is not a decimal number"
    );

    assert_eq!(
        ConvertError::Tempo(0.).to_string(),
        "Tempo of 0 bpm is not a positive finite number"
    );
}
