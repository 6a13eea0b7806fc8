//! Liquidity Hub order types used throughout the SDK.

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

mod order;
pub use order::{OrderRequest, SignedOrder};

mod permit;
pub use permit::{PermitData, PermitDecodeError};
