//! Character Profiler Common Library
//!
//! CLIとライブラリ利用側で共有される型と純粋関数（I/Oなし）

pub mod types;
pub mod image;
pub mod safety;
pub mod prompts;
pub mod error;
pub mod parser;

pub use types::{AnalysisOutcome, PersonaResult, GENERIC_FAILURE_MESSAGE};
pub use image::{EncodedImage, ImageMime};
pub use safety::{HarmBlockThreshold, HarmCategory, SafetyPolicy, SafetySetting, PERSONA_SAFETY_POLICY};
pub use prompts::{PERSONA_KEYS, PERSONA_PROMPT};
pub use error::{Error, Result};
pub use parser::{extract_json_object, parse_and_backfill, parse_persona_response};
