pub mod config;

use std::sync::Arc;

use crate::endpoints::Endpoint;
use crate::router::RouteBuilder;

/// Route prefix used by groups that do not override [`EndpointGroup::route_prefix`]
pub const DEFAULT_ROUTE_PREFIX: &str = "api";

/// A named set of endpoints sharing a route prefix and common configuration.
///
/// Group names must be unique across a registry. Uniqueness is checked when
/// routes are composed, not when groups are constructed.
///
/// The provided [`map_group`](EndpointGroup::map_group) scopes a sub-router
/// under the effective prefix, passes it through
/// [`configure`](EndpointGroup::configure), maps every member endpoint onto
/// the builder `configure` returned and mounts the result. Most groups only
/// need `name` and, optionally, `route_prefix` and `configure`.
pub trait EndpointGroup<R: RouteBuilder>: Send + Sync {
    /// Logical name of the group, used to match endpoints to groups
    fn name(&self) -> &str;

    /// Base route pattern for this group, relative to the parent router.
    ///
    /// Defaults to `"api"`. Return `None` or an empty string to mount the
    /// group's endpoints without an additional path segment.
    fn route_prefix(&self) -> Option<&str> {
        Some(DEFAULT_ROUTE_PREFIX)
    }

    /// Attach shared configuration (layers, policies, metadata) to the
    /// group's sub-router. The returned builder is the one endpoints are
    /// mapped onto.
    fn configure(&self, group: R) -> R {
        group
    }

    /// Map the given endpoints as part of this group.
    ///
    /// `prefix` is the prefix the group is mounted at: its own
    /// [`route_prefix`](EndpointGroup::route_prefix), or the value an
    /// operator configured in its place. Overrides should scope under
    /// `prefix` rather than calling `route_prefix` again.
    fn map_group(&self, router: R, prefix: &str, endpoints: &[&dyn Endpoint<R>]) -> R {
        let mut group = self.configure(router.group(prefix));

        for endpoint in endpoints {
            group = endpoint.map(group);
        }

        router.mount(group)
    }
}

/// Wraps a registered group and replaces its route prefix.
///
/// Mapping is forwarded to the wrapped group with the replacement prefix,
/// so custom `map_group` implementations keep working.
pub(crate) struct PrefixedGroup<R: RouteBuilder> {
    inner: Arc<dyn EndpointGroup<R>>,
    prefix: String,
}

impl<R: RouteBuilder> PrefixedGroup<R> {
    pub(crate) fn new(inner: Arc<dyn EndpointGroup<R>>, prefix: String) -> Self {
        Self { inner, prefix }
    }
}

impl<R: RouteBuilder> EndpointGroup<R> for PrefixedGroup<R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn route_prefix(&self) -> Option<&str> {
        Some(&self.prefix)
    }

    fn configure(&self, group: R) -> R {
        self.inner.configure(group)
    }

    fn map_group(&self, router: R, prefix: &str, endpoints: &[&dyn Endpoint<R>]) -> R {
        self.inner.map_group(router, prefix, endpoints)
    }
}
