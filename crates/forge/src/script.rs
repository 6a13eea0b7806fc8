use crate::{output::ScriptOutput, ForgeScriptError, Result};
use chrono::Utc;
use lh_types::{OrderRequest, SignedOrder};
use std::{
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// The default script runner binary.
const FORGE: &str = "forge";

/// The script contract that constructs and signs an order.
const CREATE_ORDER: &str = "CreateOrder";

/// Flags passed to every invocation: suppress progress output, emit the
/// returns as JSON, and skip the pre-broadcast simulation (the script never
/// broadcasts).
const SCRIPT_FLAGS: &[&str] = &["--silent", "--json", "--skip-simulation"];

/// Launch configuration for the order script.
///
/// A `ForgeScript` pins down everything the script needs to run: the runner
/// binary, the script target, and the Foundry project directory the process
/// runs in (the script resolves its own configuration relative to it). The
/// per-request parameters travel through the process environment, see
/// [`ForgeScript::env`].
///
/// Each [`create_order`] call owns its own subprocess. There is no pooling,
/// no retry, and no timeout; a single call is all-or-nothing.
///
/// [`create_order`]: ForgeScript::create_order
#[derive(Debug, Clone)]
pub struct ForgeScript {
    /// The runner binary.
    program: PathBuf,
    /// The script target passed to `forge script`.
    target: String,
    /// The Foundry project directory the script runs in.
    root: PathBuf,
    /// Fixed block timestamp for the script, if any.
    timestamp: Option<u64>,
}

impl ForgeScript {
    /// Create a launch configuration for the order script in the given
    /// Foundry project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            program: FORGE.into(),
            target: CREATE_ORDER.into(),
            root: root.into(),
            timestamp: None,
        }
    }

    /// Override the runner binary. Defaults to `forge` resolved from `PATH`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Override the script target. Defaults to `CreateOrder`.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Pin the block timestamp the script runs at. When unset, each
    /// invocation uses the current Unix time.
    pub const fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Get the runner binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Get the script target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get the Foundry project directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The environment contract between the SDK and the order script.
    ///
    /// Every request field crosses the process boundary as a named variable,
    /// formatted but never otherwise coerced: the chain id and amounts in
    /// decimal, the addresses as 0x-prefixed lowercase hex.
    pub fn env(&self, request: &OrderRequest) -> Vec<(String, String)> {
        vec![
            ("CHAIN".into(), request.chain_id().to_string()),
            ("FOUNDRY_BLOCK_TIMESTAMP".into(), self.block_timestamp().to_string()),
            ("LH_SWAPPER".into(), format!("{:#x}", request.swapper())),
            ("LH_INTOKEN".into(), format!("{:#x}", request.in_token())),
            ("LH_OUTTOKEN".into(), format!("{:#x}", request.out_token())),
            ("LH_INAMOUNT".into(), request.in_amount().to_string()),
            ("LH_OUTAMOUNT".into(), request.out_amount().to_string()),
        ]
    }

    /// Construct and sign an order for the given request.
    ///
    /// Runs the script once and waits for it to exit, capturing both output
    /// streams. Anything on the error stream fails the call with the
    /// diagnostic text verbatim; otherwise the standard output is parsed as
    /// the script's JSON document and converted into a [`SignedOrder`].
    #[instrument(skip_all, fields(chain_id = request.chain_id(), target = %self.target))]
    pub async fn create_order(&self, request: &OrderRequest) -> Result<SignedOrder> {
        let output = Command::new(&self.program)
            .arg("script")
            .arg(&self.target)
            .args(SCRIPT_FLAGS)
            .envs(self.env(request))
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .inspect_err(|e| warn!(%e, program = %self.program.display(), "failed to run order script"))?;

        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(%stderr, "order script reported an error");
            return Err(ForgeScriptError::Script(stderr));
        }

        debug!(status = %output.status, "order script finished");

        let stdout = String::from_utf8_lossy(&output.stdout);
        ScriptOutput::parse(&stdout)
            .inspect_err(|e| warn!(%e, "failed to parse order script output"))?
            .into_signed_order()
    }

    fn block_timestamp(&self) -> u64 {
        self.timestamp.unwrap_or_else(|| Utc::now().timestamp() as u64)
    }
}
