// src/lib.rs
//! Lesson word-list generation for a Shavian typing tutor.
//!
//! A run loads a lexicon, picks and ranks words for every level of a keyboard
//! layout, adds a compound-letters lesson and writes the result as a lesson
//! file for the site.

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod play;
pub mod script;

pub use crate::config::{Dialect, GeneratorConfig, LayoutCatalog};
pub use crate::core::engine::LessonEngine;
pub use crate::core::lexicon::{Lexicon, LexiconFormat, LoadOptions};
pub use crate::error::{LessonError, Result};
