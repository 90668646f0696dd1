#![doc = r#"
UltraStar pitches, MIDI note numbers and note names.
"#]

use core::fmt;

/// The MIDI note that UltraStar pitch `0` refers to.
pub const ULTRASTAR_MIDI_OFFSET: i32 = 48;

/// Converts a MIDI note number to an UltraStar pitch.
///
/// No clamping is applied. Results outside `0..=127` pass through.
#[inline]
pub const fn to_ultrastar_note(midi_note: i32) -> i32 {
    midi_note - ULTRASTAR_MIDI_OFFSET
}

/// Converts an UltraStar pitch to a MIDI note number.
#[inline]
pub const fn to_midi_note(ultrastar_note: i32) -> i32 {
    ultrastar_note + ULTRASTAR_MIDI_OFFSET
}

#[doc = r#"
A MIDI note number.

Unlike a MIDI data byte this is not limited to `0..=127`, since UltraStar
pitches may point anywhere.

Each value corresponds to some [`Key`] and [`Octave`]. MIDI `60` is `C4`.

# Example
```rust
# use ultrastar_midi::prelude::*;
let note = Note::from_ultrastar(15);

assert_eq!(note.midi(), 63);
assert_eq!(note.key(), Key::DSharp);
assert_eq!(note.octave(), Octave::new(4));
assert_eq!(note.to_string(), "D♯4");
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note(i32);

impl Note {
    /// Create a note from a MIDI note number
    pub const fn from_midi(midi: i32) -> Self {
        Self(midi)
    }

    /// Create a note from an UltraStar pitch
    pub const fn from_ultrastar(pitch: i32) -> Self {
        Self(to_midi_note(pitch))
    }

    /// Create a note from a given key and octave
    pub const fn new(key: Key, octave: Octave) -> Self {
        Self((octave.value() + 1) * 12 + key.get_mod_12())
    }

    /// Returns the MIDI note number
    pub const fn midi(&self) -> i32 {
        self.0
    }

    /// Returns the UltraStar pitch of the note
    pub const fn ultrastar(&self) -> i32 {
        to_ultrastar_note(self.0)
    }

    /// Identifies the key of the note
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_midi(self.0)
    }

    /// Identifies the octave of the note
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave::from_midi(self.0)
    }

    /// Returns the name of the note, formatted with the given naming
    pub fn name(&self, naming: NoteNaming) -> String {
        let key = self.key().name(naming.accidental);
        if naming.octave {
            format!("{key}{}", self.octave())
        } else {
            key.to_string()
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[doc = r#"
One of the twelve pitch classes, spelled with sharps

# Example
```rust
# use ultrastar_midi::prelude::*;
let key = Key::FSharp;
let note = key.with_octave(Octave::new(4));

assert_eq!(note.midi(), 66);
assert_eq!(key.name(Accidental::Ascii), "F#");
```
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    /// Returns an array beginning with [`Key::C`] to [`Key::B`]
    pub fn all() -> [Key; 12] {
        use Key::*;
        [C, CSharp, D, DSharp, E, F, FSharp, G, GSharp, A, ASharp, B]
    }

    /// Returns true if the key is sharp
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }

    /// Identify the key from a MIDI note number.
    #[inline]
    pub const fn from_midi(midi: i32) -> Self {
        use Key::*;
        match midi.rem_euclid(12) {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            11 => B,
            _ => unreachable!(),
        }
    }

    const fn get_mod_12(&self) -> i32 {
        use Key::*;
        match self {
            C => 0,
            CSharp => 1,
            D => 2,
            DSharp => 3,
            E => 4,
            F => 5,
            FSharp => 6,
            G => 7,
            GSharp => 8,
            A => 9,
            ASharp => 10,
            B => 11,
        }
    }

    /// Returns the letter of the key, without accidental
    pub const fn letter(&self) -> char {
        use Key::*;
        match self {
            C | CSharp => 'C',
            D | DSharp => 'D',
            E => 'E',
            F | FSharp => 'F',
            G | GSharp => 'G',
            A | ASharp => 'A',
            B => 'B',
        }
    }

    /// Spells the key with the given accidental
    pub fn name(&self, accidental: Accidental) -> String {
        let mut name = String::with_capacity(4);
        name.push(self.letter());
        if self.is_sharp() {
            name.push(accidental.sharp());
        }
        name
    }

    /// Create a [`Note`] given this key and a provided [`Octave`]
    pub const fn with_octave(self, octave: Octave) -> Note {
        Note::new(self, octave)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(Accidental::Unicode))
    }
}

#[doc = r#"
Identifies the octave of a [`Note`]. MIDI `60` starts octave `4`.

Octaves are not clamped: notes below MIDI `0` fall in octave `-2` and lower.

# Example
```rust
# use ultrastar_midi::prelude::*;
assert_eq!(Note::from_midi(0).octave(), Octave::new(-1));
assert_eq!(Note::from_midi(-1).octave(), Octave::new(-2));
```
"#]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave(i32);

impl Octave {
    /// Identify an octave from a MIDI note number.
    pub const fn from_midi(midi: i32) -> Self {
        Self(midi.div_euclid(12) - 1)
    }

    /// Creates a new octave
    pub const fn new(octave: i32) -> Self {
        Self(octave)
    }

    /// The octave number
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Create a [`Note`] given this octave and a provided [`Key`]
    pub const fn with_key(self, key: Key) -> Note {
        Note::new(key, self)
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How sharps are written in note names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accidental {
    /// `♯`
    #[default]
    Unicode,
    /// `#`
    Ascii,
}

impl Accidental {
    /// Returns the sharp sign
    pub const fn sharp(&self) -> char {
        match self {
            Self::Unicode => '♯',
            Self::Ascii => '#',
        }
    }
}

#[doc = r#"
Formatting options for note names.

The default spells sharps with `♯` and appends the octave, so MIDI `61`
becomes `C♯4`.

# Example
```rust
# use ultrastar_midi::prelude::*;
let naming = NoteNaming::default().with_accidental(Accidental::Ascii);
assert_eq!(naming.note_name(61), "C#4");

let naming = naming.with_octave(false);
assert_eq!(naming.note_name(61), "C#");
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteNaming {
    /// Sharp sign to use
    pub accidental: Accidental,
    /// Whether the octave number is appended
    pub octave: bool,
}

impl Default for NoteNaming {
    fn default() -> Self {
        Self {
            accidental: Accidental::Unicode,
            octave: true,
        }
    }
}

impl NoteNaming {
    /// Set the sharp sign
    pub const fn with_accidental(mut self, accidental: Accidental) -> Self {
        self.accidental = accidental;
        self
    }

    /// Set whether the octave is appended
    pub const fn with_octave(mut self, octave: bool) -> Self {
        self.octave = octave;
        self
    }
}

/// Looks up the name of a MIDI note number.
///
/// Implemented by [`NoteNaming`] and by any `Fn(i32) -> String`.
pub trait NoteNamer {
    /// Returns the name of the given MIDI note number
    fn note_name(&self, midi_note: i32) -> String;
}

impl NoteNamer for NoteNaming {
    fn note_name(&self, midi_note: i32) -> String {
        Note::from_midi(midi_note).name(*self)
    }
}

impl<F> NoteNamer for F
where
    F: Fn(i32) -> String,
{
    fn note_name(&self, midi_note: i32) -> String {
        self(midi_note)
    }
}

#[test]
fn ultrastar_midi_round_trip() {
    for n in [-200, -49, -48, -1, 0, 1, 12, 48, 60, 127, 128, 500] {
        assert_eq!(to_midi_note(to_ultrastar_note(n)), n);
        assert_eq!(to_ultrastar_note(to_midi_note(n)), n);
    }
    assert_eq!(to_midi_note(0), 48);
    assert_eq!(to_ultrastar_note(48), 0);
    assert_eq!(to_midi_note(100), 148);
}

#[test]
fn test_key() {
    assert_eq!(Note::from_midi(12).key(), Key::C);
    assert_eq!(Note::from_midi(94).key(), Key::ASharp);
    assert_eq!(Note::from_midi(-1).key(), Key::B);
    assert_eq!(Note::from_midi(-12).key(), Key::C);
}

#[test]
fn test_octave() {
    assert_eq!(Note::from_midi(12).octave().value(), 0);
    assert_eq!(Note::from_midi(94).octave().value(), 6);
    assert_eq!(Note::from_midi(59).octave().value(), 3);
    assert_eq!(Note::from_midi(60).octave().value(), 4);
    assert_eq!(Note::from_midi(-12).octave().value(), -2);
    assert_eq!(Note::from_midi(-13).octave().value(), -3);
}

#[test]
fn note_from_key_octave_pairs() {
    for midi in -60..200 {
        let note = Note::from_midi(midi);
        let made = Note::new(note.key(), note.octave());
        assert_eq!(made, note);
    }
}

#[test]
fn default_names() {
    let naming = NoteNaming::default();
    assert_eq!(naming.note_name(48), "C3");
    assert_eq!(naming.note_name(60), "C4");
    assert_eq!(naming.note_name(69), "A4");
    assert_eq!(naming.note_name(70), "A♯4");
    assert_eq!(naming.note_name(127), "G9");
    assert_eq!(naming.note_name(0), "C-1");
    assert_eq!(naming.note_name(-1), "B-2");
}

#[test]
fn closure_namer() {
    let namer = |midi: i32| format!("n{midi}");
    assert_eq!(namer.note_name(60), "n60");
}

#[test]
fn all_keys_in_order() {
    let keys = Key::all();
    for (midi, key) in (60..).zip(keys) {
        assert_eq!(Note::from_midi(midi).key(), key);
        assert_eq!(Octave::new(4).with_key(key), key.with_octave(Octave::new(4)));
        assert_eq!(Octave::new(4).with_key(key).midi(), midi);
    }
    assert_eq!(keys.iter().filter(|key| key.is_sharp()).count(), 5);
}
