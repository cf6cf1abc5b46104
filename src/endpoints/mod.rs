use crate::router::RouteBuilder;

/// A single route registration, optionally belonging to an [`EndpointGroup`].
///
/// Endpoints without a group are mapped directly onto the top-level router.
///
/// [`EndpointGroup`]: crate::groups::EndpointGroup
pub trait Endpoint<R: RouteBuilder>: Send + Sync {
    /// Name of the group this endpoint belongs to, or `None` for the root
    fn group_name(&self) -> Option<&str> {
        None
    }

    /// Register this endpoint's routes on `router` and hand it back
    fn map(&self, router: R) -> R;
}
