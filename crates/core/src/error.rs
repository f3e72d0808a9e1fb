use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a phoneme dictionary file.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dictionary {} at line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}
