use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audio::STANDARD_SAMPLE_RATE;
use crate::{Result, YukkuriError};

/// Install layout and runner command for the AquesTalk engines.
///
/// Relative paths are resolved against the install root passed to
/// [`AquesTalkConfig::rooted_at`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AquesTalkConfig {
    /// Runner executable that loads the engine libraries, reads a transcript
    /// on stdin and writes a WAV container to stdout.
    pub command: PathBuf,
    /// AquesTalk1 base: one sub-directory per voice holding `AquesTalk.dll`.
    pub aqtk1_dir: PathBuf,
    /// AquesTalk2 base: `AquesTalk2.dll` plus `phont/*.phont` voice files.
    pub aqtk2_dir: PathBuf,
    /// AqKanji2Koe dictionary directory.
    pub dic_dir: PathBuf,
    /// Nominal output rate, used as the base for pitch changes.
    pub sample_rate: u32,
}

impl Default for AquesTalkConfig {
    fn default() -> Self {
        Self {
            command: PathBuf::from("aquestalk-run"),
            aqtk1_dir: PathBuf::from("aqtk1"),
            aqtk2_dir: PathBuf::from("aqtk2"),
            dic_dir: PathBuf::from("aq_dic"),
            sample_rate: STANDARD_SAMPLE_RATE,
        }
    }
}

impl AquesTalkConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| YukkuriError::Config(format!("Failed to parse JSON: {e}")))?;
        if config.sample_rate == 0 {
            return Err(YukkuriError::Config(
                "'sample_rate' must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    /// Resolve the directory fields against `root`.
    ///
    /// The command is left alone when it is a bare name so it can be found
    /// on PATH.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.aqtk1_dir = root.join(&self.aqtk1_dir);
        self.aqtk2_dir = root.join(&self.aqtk2_dir);
        self.dic_dir = root.join(&self.dic_dir);
        if self.command.components().count() > 1 {
            self.command = root.join(&self.command);
        }
        self
    }

    /// `AqKanji2Koe.dll` lives next to the engine base directories.
    pub fn kanji2koe_path(&self, engine_dir: &Path) -> PathBuf {
        engine_dir.join("..").join("AqKanji2Koe.dll")
    }
}
