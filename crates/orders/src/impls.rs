use crate::OrderScript;
use lh_forge::{ForgeScript, ForgeScriptError};
use lh_types::{OrderRequest, SignedOrder};

impl OrderScript for ForgeScript {
    type Error = ForgeScriptError;

    async fn create_order(&self, request: &OrderRequest) -> Result<SignedOrder, Self::Error> {
        ForgeScript::create_order(self, request).await
    }
}
