//! English-to-Arabic transphonation.
//!
//! A word is turned into ARPABET phonemes, each phoneme is mapped to its
//! closest Arabic spelling, and the concatenation is cleaned up by a fixed
//! sequence of orthographic rules.

pub mod error;
pub mod paths;
pub mod phoneme;
pub mod pipeline;
pub mod translit;
pub mod types;

pub use error::DictionaryError;
pub use pipeline::TranslitPipeline;
pub use types::Transphonation;
