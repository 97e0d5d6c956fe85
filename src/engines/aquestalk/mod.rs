//! AquesTalk speech engine glue.
//!
//! The AquesTalk libraries are native Windows DLLs. This crate does not load
//! them itself; it drives a small runner executable that does, passing the
//! transcript on stdin and reading the WAV container from stdout.
//!
//! # Install Layout
//!
//! ```text
//! <root>/
//! ├── AqKanji2Koe.dll
//! ├── aq_dic/                      # AqKanji2Koe dictionary
//! ├── aqtk1/
//! │   ├── f1/AquesTalk.dll         # one directory per AquesTalk1 voice
//! │   └── m1/AquesTalk.dll
//! └── aqtk2/
//!     ├── AquesTalk2.dll
//!     └── phont/
//!         └── aq_yukkuri.phont     # one file per AquesTalk2 voice
//! ```
//!
//! # Voice Selectors
//!
//! A selector ending in `.phont` picks AquesTalk2 with that voice file; any
//! other selector names an AquesTalk1 voice directory.
//!
//! # Runner Protocol
//!
//! ```text
//! <command> --engine aq1|aq2 --library <dll> --kanji2koe <dll> --dic <dir>
//!           --speed <50-300> [--phont <file>]
//! ```
//!
//! Exit status 0 with a WAV container on stdout on success; otherwise the
//! engine error code as exit status and a message on stderr.

pub mod config;
pub mod engine;
pub mod voices;

pub use config::AquesTalkConfig;
pub use engine::{AquesTalkEngine, AquesTalkModelParams};
pub use voices::{EngineKind, Voice, VoiceCatalog};
