//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

use super::WordSource;
use crate::error::{GameError, Result};

// Include generated table from build script
include!(concat!(env!("OUT_DIR"), "/embedded_lists.rs"));

/// Word source backed by the lists bundled with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn read(&self, language: &str) -> Result<String> {
        EMBEDDED_LISTS
            .iter()
            .find(|&&(tag, _)| tag == language)
            .map(|&(_, text)| text.to_string())
            .ok_or_else(|| GameError::unavailable(language, None))
    }
}
