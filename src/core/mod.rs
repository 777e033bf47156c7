// src/core/mod.rs

pub mod curriculum;
pub mod engine;
pub mod level;
pub mod lexicon;
pub mod ligature;
pub mod selector;
pub mod types;
