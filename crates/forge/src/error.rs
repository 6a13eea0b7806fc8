use alloy::primitives::hex;
use lh_types::PermitDecodeError;

/// Errors returned when running the order script.
#[derive(thiserror::Error, Debug)]
pub enum ForgeScriptError {
    /// The script process could not be launched or awaited.
    #[error("failed to run order script: {0}")]
    Spawn(#[from] std::io::Error),

    /// The script wrote to its error stream. Carries the diagnostic text
    /// verbatim.
    #[error("order script failed: {0}")]
    Script(String),

    /// The script's standard output was not the expected JSON document.
    #[error("malformed script output: {0}")]
    Json(#[from] serde_json::Error),

    /// The encoded order payload in the script output was not valid hex.
    #[error("invalid encoded order in script output: {0}")]
    Encoded(#[source] hex::FromHexError),

    /// The order hash in the script output was not a valid 32-byte hash.
    #[error("invalid order hash in script output: {0}")]
    Hash(#[source] hex::FromHexError),

    /// The permit data in the script output could not be decoded.
    #[error(transparent)]
    Permit(#[from] PermitDecodeError),
}
