//! Liquidity Hub order construction via Foundry.
//!
//! Order construction, Permit2 encoding, and signing are performed by a
//! Foundry script in the settlement repository. This crate drives that
//! script: it maps an [`OrderRequest`] onto the script's environment
//! contract, runs `forge script` once per request, and parses the emitted
//! JSON into a [`SignedOrder`].
//!
//! [`OrderRequest`]: lh_types::OrderRequest
//! [`SignedOrder`]: lh_types::SignedOrder

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::ForgeScriptError;

mod output;

mod script;
pub use script::ForgeScript;

/// Result type for [`ForgeScript`] operations.
pub type Result<T> = std::result::Result<T, ForgeScriptError>;
