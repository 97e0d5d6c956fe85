use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config::AquesTalkConfig;
use crate::Result;

/// File every AquesTalk1 voice directory carries.
const AQTK1_LIBRARY: &str = "AquesTalk.dll";
/// Shared AquesTalk2 engine library.
const AQTK2_LIBRARY: &str = "AquesTalk2.dll";
const PHONT_EXTENSION: &str = "phont";

/// Which engine generation a voice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// AquesTalk1: one engine library per voice.
    Aq1,
    /// AquesTalk2: one engine library, voices as `.phont` files.
    Aq2,
}

impl EngineKind {
    /// A `.phont` selector picks AquesTalk2, anything else AquesTalk1.
    pub fn for_voice(voice: &str) -> Self {
        if voice.ends_with(".phont") {
            EngineKind::Aq2
        } else {
            EngineKind::Aq1
        }
    }
}

/// A discovered voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub voice: String,
    pub engine: EngineKind,
}

/// Files the runner needs to speak with one voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePaths {
    pub engine: EngineKind,
    /// Engine library to load.
    pub library: PathBuf,
    /// Voice data file (AquesTalk2 only).
    pub phont: Option<PathBuf>,
    pub kanji2koe: PathBuf,
}

/// Voices found under an install directory, sorted by engine then name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
}

impl VoiceCatalog {
    /// Scan the AquesTalk1 and AquesTalk2 directories.
    ///
    /// Missing directories contribute no voices.
    pub fn discover(config: &AquesTalkConfig) -> Result<Self> {
        let mut voices = Vec::new();

        if config.aqtk1_dir.is_dir() {
            let mut found = Vec::new();
            for entry in std::fs::read_dir(&config.aqtk1_dir)? {
                let path = entry?.path();
                if path.is_dir() && path.join(AQTK1_LIBRARY).is_file() {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        found.push(name.to_string());
                    }
                }
            }
            found.sort_unstable();
            voices.extend(found.into_iter().map(|voice| Voice {
                voice,
                engine: EngineKind::Aq1,
            }));
        }

        let phont_dir = config.aqtk2_dir.join("phont");
        if phont_dir.is_dir() {
            let mut found = Vec::new();
            for entry in std::fs::read_dir(&phont_dir)? {
                let path = entry?.path();
                if path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(PHONT_EXTENSION)
                {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        found.push(name.to_string());
                    }
                }
            }
            found.sort_unstable();
            voices.extend(found.into_iter().map(|voice| Voice {
                voice,
                engine: EngineKind::Aq2,
            }));
        }

        log::info!("Discovered {} voices", voices.len());
        Ok(Self { voices })
    }

    pub fn contains(&self, voice: &str) -> bool {
        self.voices.iter().any(|v| v.voice == voice)
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

/// Resolve the engine files for a voice selector.
pub fn voice_paths(config: &AquesTalkConfig, voice: &str) -> VoicePaths {
    match EngineKind::for_voice(voice) {
        EngineKind::Aq1 => VoicePaths {
            engine: EngineKind::Aq1,
            library: config.aqtk1_dir.join(voice).join(AQTK1_LIBRARY),
            phont: None,
            kanji2koe: config.kanji2koe_path(&config.aqtk1_dir),
        },
        EngineKind::Aq2 => VoicePaths {
            engine: EngineKind::Aq2,
            library: config.aqtk2_dir.join(AQTK2_LIBRARY),
            phont: Some(config.aqtk2_dir.join("phont").join(voice)),
            kanji2koe: config.kanji2koe_path(&config.aqtk2_dir),
        },
    }
}

/// True when `path` looks like an install root (has either engine base).
pub fn is_install_root(path: &Path) -> bool {
    let config = AquesTalkConfig::default().rooted_at(path);
    config.aqtk1_dir.is_dir() || config.aqtk2_dir.is_dir()
}
