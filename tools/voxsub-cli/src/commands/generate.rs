//! Generate subtitle and transcript files from a recognition dump.

use std::path::PathBuf;

use voxsub_common::config::AppConfig;
use voxsub_engine::{CaptionConfig, CaptionEngine};
use voxsub_model::result::RecognitionDump;
use voxsub_render::{CorrectionLexicon, MapLexicon, NoopLexicon};

pub fn run(
    app_config: &AppConfig,
    results: PathBuf,
    audio: PathBuf,
    output: Option<PathBuf>,
    stem: Option<String>,
    lexicon: Option<PathBuf>,
    max_cue_duration: Option<f64>,
    gap_threshold: Option<f64>,
    silence_floor: Option<f64>,
) -> anyhow::Result<()> {
    let config = CaptionConfig {
        max_cue_duration_secs: max_cue_duration
            .unwrap_or(app_config.engine.max_cue_duration_secs),
        gap_threshold_secs: gap_threshold.unwrap_or(app_config.engine.gap_threshold_secs),
        silence_energy_floor: silence_floor.unwrap_or(app_config.engine.silence_energy_floor),
    };

    println!("Loading recognition dump: {}", results.display());
    let dump_content = std::fs::read_to_string(&results)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", results.display()))?;
    let dump = RecognitionDump::from_json(&dump_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse recognition dump: {e}"))?;
    println!(
        "  {} results, {} words",
        dump.results.len(),
        dump.word_count()
    );

    println!("Decoding audio: {}", audio.display());
    let track = voxsub_audio::load_wav(&audio)
        .map_err(|e| anyhow::anyhow!("Failed to decode audio: {e}"))?;
    println!("  {:.1}s of audio", track.duration_secs());

    let lexicon: Box<dyn CorrectionLexicon> = match &lexicon {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read lexicon {}: {e}", path.display()))?;
            let map = MapLexicon::from_json(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse lexicon: {e}"))?;
            println!("  Loaded {} lexicon entries", map.len());
            Box::new(map)
        }
        None => Box::new(NoopLexicon),
    };

    let engine = CaptionEngine::new(config);
    let cues = engine
        .generate(&dump.results, &track)
        .map_err(|e| anyhow::anyhow!("Segmentation failed: {e}"))?;

    let gap_count = cues.iter().filter(|c| c.is_gap()).count();
    println!(
        "  Generated {} cues ({} speech, {} unvoiced)",
        cues.len(),
        cues.len() - gap_count,
        gap_count
    );

    let output_dir = output.unwrap_or_else(|| app_config.output_dir.clone());
    std::fs::create_dir_all(&output_dir)?;
    let stem =
        stem.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string());

    let srt_path = output_dir.join(format!("{stem}_subtitles.srt"));
    let txt_path = output_dir.join(format!("{stem}_transcript.txt"));

    voxsub_render::save_subtitles(&cues, &srt_path)
        .map_err(|e| anyhow::anyhow!("Failed to write subtitles: {e}"))?;
    voxsub_render::save_transcript(&cues, lexicon.as_ref(), &txt_path)
        .map_err(|e| anyhow::anyhow!("Failed to write transcript: {e}"))?;

    println!("  Subtitles written to: {}", srt_path.display());
    println!("  Transcript written to: {}", txt_path.display());
    println!("\nGeneration complete.");

    Ok(())
}
