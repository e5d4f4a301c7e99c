use std::path::PathBuf;

use voxsub_audio::track::AudioTrack;
use voxsub_engine::CaptionEngine;
use voxsub_model::cue::CueKind;
use voxsub_model::result::RecognitionDump;
use voxsub_model::time::TimePoint;

fn load_fixture_dump() -> RecognitionDump {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-session")
        .join("results.json");

    let content = std::fs::read_to_string(path).expect("fixture dump should be readable");
    RecognitionDump::from_json(&content).expect("fixture dump should parse")
}

/// Audio matching the fixture: 18.5s at 1kHz, silent except for a noisy
/// region between 6.2s and 10s (the untranscribed interval after the
/// first result).
fn fixture_audio() -> AudioTrack {
    let mut samples = vec![0i16; 18_500];
    for sample in &mut samples[6_200..10_000] {
        *sample = 1_000;
    }
    AudioTrack::from_samples(samples, 1_000).unwrap()
}

#[test]
fn fixture_session_produces_expected_cue_track() {
    let dump = load_fixture_dump();
    let cues = CaptionEngine::with_defaults()
        .generate(&dump.results, &fixture_audio())
        .unwrap();

    assert_eq!(cues.len(), 5);

    // First result closes on the word that crosses the 6s ceiling.
    assert_eq!(cues[0].index, 1);
    assert_eq!(cues[0].kind, CueKind::Speech);
    assert_eq!(cues[0].start, TimePoint::ZERO);
    assert_eq!(cues[0].end, TimePoint::new(6, 200_000));
    assert_eq!(cues[0].content, "bir iki üç");

    // The 3.8s noisy interval becomes an unvoiced cue.
    assert_eq!(cues[1].index, 2);
    assert_eq!(cues[1].kind, CueKind::Gap);
    assert_eq!(cues[1].start, TimePoint::new(6, 200_000));
    assert_eq!(cues[1].end, TimePoint::new(10, 0));
    assert!(cues[1].content.is_empty());

    // Second result closes under the ceiling at its own boundary.
    assert_eq!(cues[2].kind, CueKind::Speech);
    assert_eq!(cues[2].start, TimePoint::new(10, 0));
    assert_eq!(cues[2].end, TimePoint::new(12, 0));
    assert_eq!(cues[2].content, "dört beş");

    // 1s boundary to the third result: under the gap threshold.
    assert_eq!(cues[3].start, TimePoint::new(13, 0));
    assert_eq!(cues[3].content, "altı");

    // The empty fourth result is skipped; the boundary to the fifth
    // spans 14s..17.5s but that stretch is silent, so no gap cue.
    assert_eq!(cues[4].index, 5);
    assert_eq!(cues[4].start, TimePoint::new(17, 500_000));
    assert_eq!(cues[4].end, TimePoint::new(18, 0));
    assert_eq!(cues[4].content, "yedi");
}

#[test]
fn fixture_track_is_ordered_and_non_overlapping() {
    let dump = load_fixture_dump();
    let cues = CaptionEngine::with_defaults()
        .generate(&dump.results, &fixture_audio())
        .unwrap();

    for pair in cues.windows(2) {
        assert!(pair[0].start < pair[1].start);
        assert!(pair[0].end <= pair[1].start);
    }
    let indices: Vec<usize> = cues.iter().map(|c| c.index).collect();
    assert_eq!(indices, (1..=cues.len()).collect::<Vec<_>>());
}
