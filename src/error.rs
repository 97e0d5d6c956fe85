//! Error types shared by the transliteration pipeline, the audio processors
//! and the engine glue.

/// Errors surfaced to callers of the pipeline.
///
/// Recoverable audio problems (a container the gain processor cannot parse)
/// are logged and never reach this type; see [`crate::audio::apply_gain`].
#[derive(thiserror::Error, Debug)]
pub enum YukkuriError {
    #[error("Parameter '{name}' out of range: {value} (expected {min}..={max})")]
    InvalidParameter {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("Text is empty")]
    EmptyText,
    #[error("Voice '{0}' not found. Call list_voices() to see available voices.")]
    UnknownVoice(String),
    #[error("Romanization failed: {0}")]
    Romanization(String),
    #[error("Script conversion failed: {0}")]
    ScriptConversion(String),
    #[error("Synthesis engine failed with code {code}: {message}")]
    Engine { code: i32, message: String },
    #[error("Synthesis engine command not found: {0}")]
    EngineNotFound(String),
    #[error("Malformed WAV container: {0}")]
    MalformedWav(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, YukkuriError>;
