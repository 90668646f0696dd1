#![doc = r#"
Conversion between beats and seconds at a real tempo.

Both directions follow `bpm = 60 * beat / seconds`.

```rust
# use ultrastar_midi::prelude::*;
let bpm = RealBpm::new(120.);
assert_eq!(beat_to_seconds(4., bpm).unwrap(), 2.);
assert_eq!(seconds_to_beat(2., bpm).unwrap(), 4.);
```

A tempo that is zero, negative or not finite is rejected with
[`ConvertError::Tempo`] instead of producing an infinite or negative time.
"#]

use crate::{ConvertError, ConvertResult, tempo::RealBpm};

const SECONDS_PER_MINUTE: f64 = 60.;

fn usable(bpm: RealBpm) -> ConvertResult<f64> {
    if bpm.is_usable() {
        Ok(bpm.value())
    } else {
        Err(ConvertError::Tempo(bpm.value()))
    }
}

/// Converts a duration in seconds to a number of beats.
pub fn seconds_to_beat(seconds: f64, bpm: RealBpm) -> ConvertResult<f64> {
    let bpm = usable(bpm)?;
    Ok(seconds * bpm / SECONDS_PER_MINUTE)
}

/// Converts a number of beats to a duration in seconds.
pub fn beat_to_seconds(beat: f64, bpm: RealBpm) -> ConvertResult<f64> {
    let bpm = usable(bpm)?;
    Ok(beat * SECONDS_PER_MINUTE / bpm)
}

#[test]
fn beats_at_120_bpm() {
    let bpm = RealBpm::new(120.);
    assert_eq!(beat_to_seconds(0., bpm).unwrap(), 0.);
    assert_eq!(beat_to_seconds(2., bpm).unwrap(), 1.);
    assert_eq!(beat_to_seconds(-2., bpm).unwrap(), -1.);
    assert_eq!(seconds_to_beat(1.5, bpm).unwrap(), 3.);
}

#[test]
fn seconds_beat_round_trip() {
    for bpm in [60., 97.3, 120., 255.12, 1000.] {
        let bpm = RealBpm::new(bpm);
        for seconds in [0., 0.001, 1., 3.7, 61.25, 3600.] {
            let beat = seconds_to_beat(seconds, bpm).unwrap();
            let back = beat_to_seconds(beat, bpm).unwrap();
            assert!((back - seconds).abs() < 1e-9, "{seconds} -> {back} at {bpm}");
        }
    }
}

#[test]
fn rejects_unusable_tempo() {
    for bpm in [0., -120., f64::NAN, f64::INFINITY] {
        let bpm = RealBpm::new(bpm);
        assert!(matches!(
            beat_to_seconds(4., bpm),
            Err(ConvertError::Tempo(_))
        ));
        assert!(matches!(
            seconds_to_beat(4., bpm),
            Err(ConvertError::Tempo(_))
        ));
    }
}
