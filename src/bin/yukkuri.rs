use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use yukkuri_rs::{
    engines::aquestalk::{AquesTalkConfig, AquesTalkEngine, AquesTalkModelParams},
    batch_file_name, file_prefix, Pipeline, SynthesisEngine, SynthesisRequest, Transliterator,
    FILE_PREFIX_CHARS,
};

/// Speak mixed Chinese/English/Japanese text with AquesTalk voices.
#[derive(Debug, Parser)]
#[command(name = "yukkuri", version)]
struct Args {
    /// Text to speak. Separate several utterances with `;`.
    text: Option<String>,

    /// Voice selector: an AquesTalk1 voice directory or an AquesTalk2 `.phont` file.
    #[arg(short, long, default_value = "aq_yukkuri.phont")]
    voice: String,

    /// Speech speed in percent (50-300).
    #[arg(long, default_value_t = 100)]
    speed: i32,

    /// Pitch in percent (50-200).
    #[arg(long, default_value_t = 100)]
    pitch: i32,

    /// Volume in percent (0-300).
    #[arg(long, default_value_t = 100)]
    volume: i32,

    /// AquesTalk install root.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON engine configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Runner command, overriding the configuration.
    #[arg(long)]
    command: Option<PathBuf>,

    /// Directory for the generated WAV files.
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,

    /// Print discovered voices as JSON and exit.
    #[arg(long)]
    list_voices: bool,

    /// Print the phonetic transcript instead of synthesizing.
    #[arg(long)]
    transcript_only: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AquesTalkConfig::load(path)?,
        None => AquesTalkConfig::default(),
    };
    if let Some(command) = args.command.clone() {
        config.command = command;
    }

    let mut engine = AquesTalkEngine::new();
    engine.load_model_with_params(
        &args.root,
        AquesTalkModelParams {
            config: Some(config),
        },
    )?;

    if args.list_voices {
        println!("{}", serde_json::to_string_pretty(engine.list_voices())?);
        return Ok(());
    }

    let text = args.text.clone().ok_or("no text given")?;

    if args.transcript_only {
        let transliterator = Transliterator::default();
        for part in yukkuri_rs::split_batch(&text) {
            let transcript = transliterator.transliterate(part)?;
            println!("{}", transcript.text);
            if !transcript.is_complete() {
                eprintln!("dropped: {:?}", transcript.unmapped);
            }
        }
        return Ok(());
    }

    let request = SynthesisRequest::builder()
        .text(text)
        .voice(args.voice.clone())
        .speed(args.speed)
        .pitch(args.pitch)
        .volume(args.volume)
        .build()?;

    std::fs::create_dir_all(&args.out_dir)?;
    let mut pipeline = Pipeline::new(engine);

    let synth_start = Instant::now();
    let results = pipeline.process_batch(&request)?;
    let synth_dur = synth_start.elapsed();

    let parts = yukkuri_rs::split_batch(&request.text);
    for (idx, (part, result)) in parts.iter().zip(&results).enumerate() {
        let name = if parts.len() > 1 {
            batch_file_name(part, idx + 1)
        } else {
            format!("{}.wav", file_prefix(part, FILE_PREFIX_CHARS))
        };
        let path = args.out_dir.join(name);
        result.write_wav(&path)?;
        println!(
            "{} -> {} ({:.2}s audio)",
            result.transcript.text,
            path.display(),
            result.duration_secs()?
        );
    }
    println!("Synthesized {} file(s) in {:.2?}", results.len(), synth_dur);

    Ok(())
}
