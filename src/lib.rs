#![warn(missing_docs)]
#![doc = r#"
Timing and pitch conversion between UltraStar karaoke notes and MIDI segments.

An UltraStar song stores its timing as a gap in milliseconds, a tempo that is a
quarter of the real musical tempo, and note lines addressed in beats. Pitches
are stored relative to MIDI note 48.

This crate turns those symbolic units into wall-clock seconds and standard
note names:

```rust
# use ultrastar_midi::prelude::*;
let document = UltrastarDocument::new("0,0", "30,0")
    .with_line(UltrastarNoteLine::new(2., 2., 12, "Hel"))
    .with_line(UltrastarNoteLine::new(4., 1., 14, "lo"));

let segments = ultrastar_to_midi_segments(&document).unwrap();

assert_eq!(segments.len(), 2);
assert_eq!(segments[0].note(), "C4");
assert_eq!(segments[0].start(), 1.0);
assert_eq!(segments[0].end(), 2.0);
assert_eq!(segments[1].note(), "D4");
assert_eq!(segments[1].word(), "lo");
```

Every function is pure. Nothing is cached between calls.
"#]

mod error;
pub use error::*;

pub mod beat;
pub mod convert;
pub mod note;
pub mod segment;
pub mod tempo;
pub mod ultrastar;

/// Commonly used types and functions
pub mod prelude {
    pub use crate::{
        ConvertError, ConvertResult, ParseError, TextField,
        beat::{beat_to_seconds, seconds_to_beat},
        convert::{SegmentConverter, ultrastar_to_midi_segments},
        note::{
            Accidental, Key, Note, NoteNamer, NoteNaming, Octave, to_midi_note, to_ultrastar_note,
        },
        segment::MidiSegment,
        tempo::{FileBpm, RealBpm, to_file_tempo, to_real_tempo},
        ultrastar::{
            UltrastarDocument, UltrastarNoteLine,
            timing::{
                DocumentTiming, end_time, end_time_at, parse_gap_seconds, parse_real_tempo,
                start_time, start_time_at,
            },
        },
    };
}
