//! The external dependency-resolution capability.

use crate::{processor::DynProcessor, routing::Token};
use std::sync::Arc;

/// Maps an opaque handler identity to a live processor instance.
///
/// This is the seam where a host plugs in its dependency-injection
/// container. The engine calls `resolve` at most once per path (resolved
/// instances are cached per *path*, not per identity) but must be able to
/// call it repeatedly across paths; the resolver itself is free to hand out
/// the same instance twice or construct a fresh one each time.
///
/// Returning `None` surfaces to the caller as
/// [`DispatchError::ResolutionFailed`](crate::DispatchError::ResolutionFailed).
pub trait Resolver: Send + Sync + 'static {
    /// Produce an instance for the given identity, or `None`.
    fn resolve(&self, token: &Token) -> Option<Arc<dyn DynProcessor>>;
}

// Blanket impl for closures
impl<F> Resolver for F
where
    F: Fn(&Token) -> Option<Arc<dyn DynProcessor>> + Send + Sync + 'static,
{
    fn resolve(&self, token: &Token) -> Option<Arc<dyn DynProcessor>> {
        (self)(token)
    }
}
