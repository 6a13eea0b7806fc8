use crate::PermitData;
use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// A request to construct a Liquidity Hub order.
///
/// An `OrderRequest` captures the parameters quoted to a swapper: the chain
/// the order settles on, the swapper's address, and the token pair with the
/// exact input and minimum output amounts. It is immutable once built and is
/// consumed whole by the order script, one request per invocation.
///
/// Wire names match the RFQ JSON produced by the quoting service, so a
/// request can be deserialized directly from an RFQ payload.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// The chain id the order settles on.
    chain_id: u64,
    /// The address tokens are pulled from and delivered to.
    swapper: Address,
    /// The token the swapper is selling.
    in_token: Address,
    /// The token the swapper is buying.
    out_token: Address,
    /// The exact input amount.
    in_amount: U256,
    /// The minimum output amount.
    out_amount: U256,
}

impl OrderRequest {
    /// Create a new order request.
    pub const fn new(
        chain_id: u64,
        swapper: Address,
        in_token: Address,
        out_token: Address,
        in_amount: U256,
        out_amount: U256,
    ) -> Self {
        Self { chain_id, swapper, in_token, out_token, in_amount, out_amount }
    }

    /// Set the chain id on the request.
    pub fn with_chain(self, chain_id: u64) -> Self {
        Self { chain_id, ..self }
    }

    /// Set the input token and amount on the request.
    pub fn with_input(self, in_token: Address, in_amount: U256) -> Self {
        Self { in_token, in_amount, ..self }
    }

    /// Set the output token and amount on the request.
    pub fn with_output(self, out_token: Address, out_amount: U256) -> Self {
        Self { out_token, out_amount, ..self }
    }

    /// Get the chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the swapper address.
    pub const fn swapper(&self) -> Address {
        self.swapper
    }

    /// Get the input token address.
    pub const fn in_token(&self) -> Address {
        self.in_token
    }

    /// Get the output token address.
    pub const fn out_token(&self) -> Address {
        self.out_token
    }

    /// Get the input amount.
    pub const fn in_amount(&self) -> U256 {
        self.in_amount
    }

    /// Get the output amount.
    pub const fn out_amount(&self) -> U256 {
        self.out_amount
    }
}

/// A constructed, signed Liquidity Hub order.
///
/// A `SignedOrder` is the artifact emitted by the order script: the
/// ABI-encoded order payload ready for settlement, the order hash the
/// swapper signed over, and the Permit2 authorization consumed by the
/// settlement contract to pull the input tokens. It has no identity beyond
/// the invocation that produced it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    /// The ABI-encoded order payload.
    encoded: Bytes,
    /// The order hash.
    hash: B256,
    /// The permit payload authorizing the input token transfer.
    permit_data: PermitData,
}

impl SignedOrder {
    /// Create a new signed order.
    pub const fn new(encoded: Bytes, hash: B256, permit_data: PermitData) -> Self {
        Self { encoded, hash, permit_data }
    }

    /// Get the ABI-encoded order payload.
    pub const fn encoded(&self) -> &Bytes {
        &self.encoded
    }

    /// Get the order hash.
    pub const fn hash(&self) -> B256 {
        self.hash
    }

    /// Get the permit payload.
    pub const fn permit_data(&self) -> &PermitData {
        &self.permit_data
    }

    /// Decompose the order into its parts.
    pub fn into_parts(self) -> (Bytes, B256, PermitData) {
        (self.encoded, self.hash, self.permit_data)
    }
}
