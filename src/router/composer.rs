use std::collections::HashMap;
use std::sync::Arc;

use crate::endpoints::Endpoint;
use crate::error::{ComposeError, Result};
use crate::groups::EndpointGroup;
use crate::registry::EndpointRegistry;
use crate::router::{validate, RouteBuilder};

/// Map every endpoint onto `router`, grouped endpoints first.
///
/// Groups are visited in ascending name order. A group with no member
/// endpoints is skipped without creating a sub-router. Endpoints keep the
/// order they were supplied in, both within a group and among ungrouped
/// endpoints, which are mapped onto `router` itself after all groups.
///
/// Composition is not idempotent: composing the same descriptors twice
/// registers every route twice.
pub fn compose<R: RouteBuilder>(
    mut router: R,
    groups: &[Arc<dyn EndpointGroup<R>>],
    endpoints: &[Arc<dyn Endpoint<R>>],
) -> Result<R> {
    validate(groups, endpoints)?;

    let mut ordered: Vec<&Arc<dyn EndpointGroup<R>>> = groups.iter().collect();
    ordered.sort_by(|a, b| a.name().cmp(b.name()));

    let mut by_group: HashMap<&str, Vec<&dyn Endpoint<R>>> = HashMap::new();
    let mut ungrouped: Vec<&dyn Endpoint<R>> = Vec::new();
    for endpoint in endpoints {
        match endpoint.group_name() {
            Some(name) => by_group.entry(name).or_default().push(endpoint.as_ref()),
            None => ungrouped.push(endpoint.as_ref()),
        }
    }

    let mut mapped_groups = 0usize;
    for group in ordered {
        let members = match by_group.get(group.name()) {
            Some(members) if !members.is_empty() => members,
            _ => {
                tracing::debug!("Skipping endpoint group '{}': no endpoints", group.name());
                continue;
            }
        };

        let prefix = group.route_prefix().unwrap_or_default();
        tracing::debug!(
            "Mapping endpoint group '{}' ({} endpoints) at prefix '{}'",
            group.name(),
            members.len(),
            prefix
        );
        router = group.map_group(router, prefix, members);
        mapped_groups += 1;
    }

    for endpoint in &ungrouped {
        router = endpoint.map(router);
    }

    tracing::info!(
        "Mapped {} endpoints: {} groups, {} ungrouped",
        endpoints.len(),
        mapped_groups,
        ungrouped.len()
    );

    Ok(router)
}

/// Extension for composing a whole [`EndpointRegistry`] onto a router
pub trait MapEndpoints: RouteBuilder {
    /// Maps all registered endpoints using their associated groups
    fn map_all_endpoints(self, registry: &EndpointRegistry<Self>) -> Result<Self> {
        compose(self, registry.groups(), registry.endpoints())
    }
}

impl<R: RouteBuilder> MapEndpoints for R {}

/// Composition with explicitly supplied descriptor collections.
///
/// Both collections are required; calling [`compose`](Composer::compose)
/// without one fails with [`ComposeError::MissingArgument`].
pub struct Composer<R: RouteBuilder> {
    groups: Option<Vec<Arc<dyn EndpointGroup<R>>>>,
    endpoints: Option<Vec<Arc<dyn Endpoint<R>>>>,
}

impl<R: RouteBuilder> Default for Composer<R> {
    fn default() -> Self {
        Self {
            groups: None,
            endpoints: None,
        }
    }
}

impl<R: RouteBuilder> Composer<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn EndpointGroup<R>>>,
    {
        self.groups = Some(groups.into_iter().collect());
        self
    }

    pub fn with_endpoints<I>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Endpoint<R>>>,
    {
        self.endpoints = Some(endpoints.into_iter().collect());
        self
    }

    pub fn compose(self, router: R) -> Result<R> {
        let groups = self.groups.ok_or(ComposeError::MissingArgument("groups"))?;
        let endpoints = self
            .endpoints
            .ok_or(ComposeError::MissingArgument("endpoints"))?;
        compose(router, &groups, &endpoints)
    }
}

impl<R: RouteBuilder> From<EndpointRegistry<R>> for Composer<R> {
    fn from(registry: EndpointRegistry<R>) -> Self {
        let (groups, endpoints) = registry.into_parts();
        Self::new().with_groups(groups).with_endpoints(endpoints)
    }
}
