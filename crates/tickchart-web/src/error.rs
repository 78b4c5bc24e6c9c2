use std::path::PathBuf;

use thiserror::Error;

/// Startup failures of the web front end, mapped to process exit codes.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("failed to read symbol list {path}: {source}")]
    SymbolFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("symbol list is not valid JSON: {0}")]
    SymbolFormat(#[from] serde_json::Error),

    #[error("symbol list contains no usable symbols")]
    NoSymbols,

    #[error("missing API key; set API_KEY or pass --api-key")]
    MissingApiKey,

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl WebError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SymbolFile { .. } | Self::SymbolFormat(_) | Self::NoSymbols => 2,
            Self::MissingApiKey => 3,
            Self::Bind { .. } => 10,
            Self::Serve(_) => 11,
        }
    }
}
