use alloy::primitives::{Address, U256};
use eyre::Error;
use lh_orders::{ForgeScript, OrderRequest};

/// Helper fn to convert from a human readable amount to a U256 token amount.
fn token_amount(amount: u64, decimals: u32) -> U256 {
    U256::from(amount * 10u64.pow(decimals))
}

/// Empty main to silence clippy.
fn main() {}

/// Example code demonstrating API usage and patterns for constructing a
/// signed order.
#[derive(Debug)]
pub struct CreateOrder {
    /// Launch configuration pointing at a settlement repository checkout.
    script: ForgeScript,
    /// The chain id the order settles on.
    chain_id: u64,
    /// The swapper's address.
    swapper: Address,
    /// The address of USDC on the target chain.
    usdc_address: Address,
    /// The address of WETH on the target chain.
    weth_address: Address,
}

impl CreateOrder {
    /// Create a new CreateOrder instance.
    pub const fn new(
        script: ForgeScript,
        chain_id: u64,
        swapper: Address,
        usdc_address: Address,
        weth_address: Address,
    ) -> Self {
        Self { script, chain_id, swapper, usdc_address, weth_address }
    }

    /// Construct a simple example order and print its hash.
    pub async fn run(&self) -> Result<(), Error> {
        // get an example request
        let request = self.example_request();

        // drive the order script
        let order = self.script.create_order(&request).await?;

        println!("order hash: {}", order.hash());
        println!("permit data: {}", order.permit_data().as_value());

        Ok(())
    }

    /// Get an example request which swaps 2500 USDC for at least 1 WETH.
    fn example_request(&self) -> OrderRequest {
        let usdc_decimals: u32 = 6;
        let weth_decimals: u32 = 18;

        OrderRequest::new(
            self.chain_id,
            self.swapper,
            self.usdc_address,
            self.weth_address,
            token_amount(2500, usdc_decimals),
            token_amount(1, weth_decimals),
        )
    }
}
