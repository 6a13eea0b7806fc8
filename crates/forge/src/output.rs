use crate::ForgeScriptError;
use alloy::primitives::{Bytes, B256};
use lh_types::{PermitData, SignedOrder};
use serde::Deserialize;

/// The JSON document `forge script --json` emits for the order script.
#[derive(Debug, Deserialize)]
pub(crate) struct ScriptOutput {
    returns: ScriptReturns,
}

/// The `returns` block of the script output, one entry per named return
/// value of the script's `run()`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScriptReturns {
    encoded: ScriptValue,
    hash: ScriptValue,
    permit_data: ScriptValue,
}

/// A single named return value. Forge renders every return as an object
/// carrying type metadata; only the rendered value is consumed here.
#[derive(Debug, Deserialize)]
struct ScriptValue {
    value: String,
}

impl ScriptOutput {
    /// Parse the script's standard output. The tool terminates the document
    /// with a newline, so the stream is trimmed first.
    pub(crate) fn parse(stdout: &str) -> Result<Self, ForgeScriptError> {
        serde_json::from_str(stdout.trim()).map_err(Into::into)
    }

    /// Convert the raw return values into a [`SignedOrder`].
    pub(crate) fn into_signed_order(self) -> Result<SignedOrder, ForgeScriptError> {
        let ScriptReturns { encoded, hash, permit_data } = self.returns;

        let encoded: Bytes = encoded.value.parse().map_err(ForgeScriptError::Encoded)?;
        let hash: B256 = hash.value.parse().map_err(ForgeScriptError::Hash)?;
        let permit_data = PermitData::from_raw(&permit_data.value)?;

        Ok(SignedOrder::new(encoded, hash, permit_data))
    }
}
