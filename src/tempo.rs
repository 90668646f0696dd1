#![doc = r#"
Tempo scales.

UltraStar files store a tempo that is a quarter of the real musical tempo.
The real tempo is the one used for all time arithmetic.

```rust
# use ultrastar_midi::prelude::*;
let file = FileBpm::new(30.);
assert_eq!(file.to_real(), RealBpm::new(120.));
assert_eq!(RealBpm::new(120.).to_file(), file);
```
"#]

use core::fmt;

/// Number of real beats in one beat of the file tempo.
pub const FILE_TEMPO_DIVISOR: f64 = 4.;

/// Converts a real tempo to the tempo stored in an UltraStar file.
///
/// No validation is applied. Zero or negative tempos pass through.
#[inline]
pub const fn to_file_tempo(real_bpm: f64) -> f64 {
    real_bpm / FILE_TEMPO_DIVISOR
}

/// Converts the tempo stored in an UltraStar file to the real tempo.
#[inline]
pub const fn to_real_tempo(file_bpm: f64) -> f64 {
    file_bpm * FILE_TEMPO_DIVISOR
}

/// Tempo in the file's quarter scale
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileBpm(f64);

impl FileBpm {
    /// Creates a new file tempo
    pub const fn new(bpm: f64) -> Self {
        Self(bpm)
    }
    /// Returns the tempo as an f64
    pub const fn value(&self) -> f64 {
        self.0
    }
    /// file -> real
    pub const fn to_real(&self) -> RealBpm {
        RealBpm(to_real_tempo(self.0))
    }
}

/// Tempo in real beats per minute
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealBpm(f64);

impl RealBpm {
    /// Creates a new real tempo
    pub const fn new(bpm: f64) -> Self {
        Self(bpm)
    }
    /// Returns the tempo as an f64
    pub const fn value(&self) -> f64 {
        self.0
    }
    /// real -> file
    pub const fn to_file(&self) -> FileBpm {
        FileBpm(to_file_tempo(self.0))
    }
    /// Returns true if the tempo can be used to convert between beats and seconds.
    pub fn is_usable(&self) -> bool {
        self.0.is_finite() && self.0 > 0.
    }
}

impl From<FileBpm> for RealBpm {
    fn from(value: FileBpm) -> Self {
        value.to_real()
    }
}

impl From<RealBpm> for FileBpm {
    fn from(value: RealBpm) -> Self {
        value.to_file()
    }
}

impl fmt::Display for FileBpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bpm (file)", self.0)
    }
}

impl fmt::Display for RealBpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bpm", self.0)
    }
}

#[test]
fn tempo_round_trip() {
    for bpm in [1., 30., 62.5, 120., 333.3, 1e-3, 1e9, -48.] {
        assert_eq!(to_real_tempo(to_file_tempo(bpm)), bpm);
        assert_eq!(to_file_tempo(to_real_tempo(bpm)), bpm);
    }
}

#[test]
fn degenerate_tempo_passes_through() {
    assert_eq!(to_real_tempo(0.), 0.);
    assert_eq!(to_file_tempo(-8.), -2.);
    assert!(!RealBpm::new(0.).is_usable());
    assert!(!RealBpm::new(-120.).is_usable());
    assert!(!RealBpm::new(f64::INFINITY).is_usable());
    assert!(RealBpm::new(120.).is_usable());
}

#[test]
fn newtype_conversions() {
    let real: RealBpm = FileBpm::new(75.).into();
    assert_eq!(real.value(), 300.);

    let file: FileBpm = real.into();
    assert_eq!(file.value(), 75.);
}
