use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::audio::WavBuffer;
use crate::{EngineParams, Result, SynthesisEngine, YukkuriError};

use super::config::AquesTalkConfig;
use super::voices::{is_install_root, voice_paths, EngineKind, Voice, VoiceCatalog};

/// Parameters for configuring AquesTalk engine loading.
#[derive(Debug, Clone, Default)]
pub struct AquesTalkModelParams {
    /// Full configuration. `None` uses [`AquesTalkConfig::default`].
    /// Directory fields are resolved against the install root.
    pub config: Option<AquesTalkConfig>,
}

/// AquesTalk1/AquesTalk2 engine driven through a runner process.
///
/// Each call spawns the configured runner, so independent engine values can
/// serve concurrent requests without sharing state.
///
/// ```rust,no_run
/// use yukkuri_rs::{EngineParams, SynthesisEngine, engines::aquestalk::AquesTalkEngine};
/// use std::path::Path;
///
/// let mut engine = AquesTalkEngine::new();
/// engine.load_model(Path::new("/opt/aquestalk"))?;
/// let params = EngineParams { voice: "f1".to_string(), speed: 100 };
/// let wav = engine.synthesize("ゆっくりしていってね", &params)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct AquesTalkEngine {
    config: Option<AquesTalkConfig>,
    catalog: VoiceCatalog,
}

impl AquesTalkEngine {
    /// Create an engine with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// List all discovered voices (empty until loaded).
    pub fn list_voices(&self) -> &[Voice] {
        self.catalog.voices()
    }
}

impl Drop for AquesTalkEngine {
    fn drop(&mut self) {
        self.unload_model();
    }
}

impl SynthesisEngine for AquesTalkEngine {
    type ModelParams = AquesTalkModelParams;

    fn load_model_with_params(
        &mut self,
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<()> {
        if !is_install_root(model_path) {
            log::warn!(
                "No aqtk1/aqtk2 directory under {}; no voices will be available",
                model_path.display()
            );
        }
        let config = params.config.unwrap_or_default().rooted_at(model_path);
        log::info!("Loading AquesTalk from {}", model_path.display());
        let catalog = VoiceCatalog::discover(&config)?;
        self.config = Some(config);
        self.catalog = catalog;
        Ok(())
    }

    fn unload_model(&mut self) {
        self.config = None;
        self.catalog = VoiceCatalog::default();
    }

    fn has_voice(&self, voice: &str) -> bool {
        self.catalog.contains(voice)
    }

    fn nominal_sample_rate(&self) -> u32 {
        self.config
            .as_ref()
            .map(|c| c.sample_rate)
            .unwrap_or(crate::audio::STANDARD_SAMPLE_RATE)
    }

    fn synthesize(&mut self, transcript: &str, params: &EngineParams) -> Result<WavBuffer> {
        let config = self.config.as_ref().ok_or_else(|| {
            YukkuriError::Config("Engine not loaded. Call load_model() first.".to_string())
        })?;
        if !self.catalog.contains(&params.voice) {
            return Err(YukkuriError::UnknownVoice(params.voice.clone()));
        }

        let args = runner_args(config, &params.voice, params.speed);
        let bytes = run_engine(&config.command, &args, transcript)?;
        Ok(WavBuffer::from_bytes(bytes))
    }
}

/// Command-line arguments for the runner.
fn runner_args(config: &AquesTalkConfig, voice: &str, speed: i32) -> Vec<String> {
    let paths = voice_paths(config, voice);
    let engine = match paths.engine {
        EngineKind::Aq1 => "aq1",
        EngineKind::Aq2 => "aq2",
    };

    let mut args = vec![
        "--engine".to_string(),
        engine.to_string(),
        "--library".to_string(),
        path_arg(&paths.library),
        "--kanji2koe".to_string(),
        path_arg(&paths.kanji2koe),
        "--dic".to_string(),
        path_arg(&config.dic_dir),
        "--speed".to_string(),
        speed.to_string(),
    ];
    if let Some(phont) = paths.phont {
        args.push("--phont".to_string());
        args.push(path_arg(&phont));
    }
    args
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Run the engine process: transcript on stdin, WAV bytes on stdout.
fn run_engine(command: &Path, args: &[String], transcript: &str) -> Result<Vec<u8>> {
    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                YukkuriError::EngineNotFound(command.display().to_string())
            } else {
                YukkuriError::Io(e)
            }
        })?;

    // A runner that exits without reading stdin reports through its status.
    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(transcript.as_bytes()) {
            Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
            _ => {}
        }
    }

    let output = child.wait_with_output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(YukkuriError::Engine {
            code: output.status.code().unwrap_or(-1),
            message: stderr.trim().to_string(),
        });
    }
    if output.stdout.is_empty() {
        return Err(YukkuriError::Engine {
            code: 0,
            message: "engine produced no audio".to_string(),
        });
    }

    Ok(output.stdout)
}
