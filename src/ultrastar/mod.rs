#![doc = r#"
The UltraStar side of the conversion.

An [`UltrastarDocument`] is what a txt parser hands over: the gap and tempo
exactly as written in the header, and the ordered note lines of the song.
This crate only reads it.
"#]

pub mod timing;

#[doc = r#"
One lyric/pitch/timing record of an UltraStar song.

`start_beat` and `duration` are whole beats in the file format. They are
carried as `f64` because parsers may hand them over in float form; they are
truncated toward zero when converted to time.
"#]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UltrastarNoteLine {
    /// Beat offset of the line
    pub start_beat: f64,
    /// Beat length of the line
    pub duration: f64,
    /// Pitch relative to MIDI note 48
    pub pitch: i32,
    /// The lyric sung on this line
    pub word: String,
}

impl UltrastarNoteLine {
    /// Create a new note line
    pub fn new(start_beat: f64, duration: f64, pitch: i32, word: impl Into<String>) -> Self {
        Self {
            start_beat,
            duration,
            pitch,
            word: word.into(),
        }
    }
}

#[doc = r#"
The parts of an UltraStar song needed to time its notes.

# Example
```rust
# use ultrastar_midi::prelude::*;
let document = UltrastarDocument::new("1500", "62,5")
    .with_line(UltrastarNoteLine::new(0., 4., 7, "Oh"));

assert_eq!(document.gap(), "1500");
assert_eq!(document.bpm(), "62,5");
assert_eq!(document.note_lines().len(), 1);
```
"#]
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UltrastarDocument {
    gap: String,
    bpm: String,
    note_lines: Vec<UltrastarNoteLine>,
}

impl UltrastarDocument {
    /// Create a document without note lines from its gap and tempo text
    pub fn new(gap: impl Into<String>, bpm: impl Into<String>) -> Self {
        Self {
            gap: gap.into(),
            bpm: bpm.into(),
            note_lines: Vec::new(),
        }
    }

    /// Append a note line
    pub fn with_line(mut self, line: UltrastarNoteLine) -> Self {
        self.note_lines.push(line);
        self
    }

    /// Append several note lines, keeping their order
    pub fn with_lines<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = UltrastarNoteLine>,
    {
        self.note_lines.extend(lines);
        self
    }

    /// The gap in milliseconds, as written in the file
    pub fn gap(&self) -> &str {
        &self.gap
    }

    /// The tempo in the file's quarter scale, as written in the file
    pub fn bpm(&self) -> &str {
        &self.bpm
    }

    /// The note lines in document order
    pub fn note_lines(&self) -> &[UltrastarNoteLine] {
        &self.note_lines
    }

    /// Returns the note line at `position`
    pub fn note_line(&self, position: usize) -> Option<&UltrastarNoteLine> {
        self.note_lines.get(position)
    }
}
