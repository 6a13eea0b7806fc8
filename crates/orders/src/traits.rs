use core::future::Future;
use lh_types::{OrderRequest, SignedOrder};

/// A trait for services that construct signed orders.
///
/// Implementors of this trait turn an [`OrderRequest`] into a
/// [`SignedOrder`], typically by driving the settlement repository's order
/// script. Consumers should bound on this trait rather than a concrete
/// backend so tests can substitute a canned implementation.
pub trait OrderScript {
    /// The error type returned by order construction.
    type Error;

    /// Construct and sign an order for the given request.
    fn create_order(
        &self,
        request: &OrderRequest,
    ) -> impl Future<Output = Result<SignedOrder, Self::Error>> + Send;
}
