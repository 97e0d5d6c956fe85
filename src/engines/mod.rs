//! Speech synthesis engines.
//!
//! This module contains adapters for native text-to-speech engines.
//!
//! # Available Engines
//!
//! - `aquestalk` - AquesTalk1 / AquesTalk2 (8 kHz mono, driven by a runner process)

pub mod aquestalk;
