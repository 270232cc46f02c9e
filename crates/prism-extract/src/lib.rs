//! Core item extraction from noisy e-commerce listing titles.
//!
//! Slices a bounded "golden zone" prefix from the raw title, strips spec
//! tokens and possessives, filters candidate words against a static noise
//! lexicon, and assembles the survivors into a Title-Cased display phrase.
//! Fully deterministic and synchronous — no NLP stack.

mod extract;
mod lexicon;
mod zone;

pub use extract::ItemExtractor;
