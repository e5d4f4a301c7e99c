//! Show statistics for a recognition dump.

use std::path::PathBuf;

use voxsub_model::result::RecognitionDump;

pub fn run(results: PathBuf) -> anyhow::Result<()> {
    println!("Inspecting recognition dump: {}", results.display());

    let content = std::fs::read_to_string(&results)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", results.display()))?;
    let dump = RecognitionDump::from_json(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse recognition dump: {e}"))?;

    let usable = dump
        .results
        .iter()
        .filter(|r| r.top_alternative().map_or(false, |a| !a.words.is_empty()))
        .count();

    println!("  Results:       {}", dump.results.len());
    println!("  Usable:        {usable}");
    println!("  Words:         {}", dump.word_count());
    if let Some(end) = dump.last_word_end() {
        println!("  Last word end: {:.3}s", end.as_secs_f64());
    }

    for (index, result) in dump.results.iter().enumerate() {
        match result.top_alternative() {
            Some(alt) if !alt.words.is_empty() => {
                let first = alt.words.first().and_then(|w| w.start_time);
                let last = alt.words.last().and_then(|w| w.end_time);
                let span = match (first, last) {
                    (Some(s), Some(e)) => {
                        format!("{:.3}s..{:.3}s", s.as_secs_f64(), e.as_secs_f64())
                    }
                    _ => "missing timestamps".to_string(),
                };
                let confidence = alt
                    .confidence
                    .map(|c| format!("{c:.2}"))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  [{index}] {} words, {span}, confidence {confidence}",
                    alt.words.len()
                );
            }
            _ => println!("  [{index}] no usable words"),
        }
    }

    Ok(())
}
