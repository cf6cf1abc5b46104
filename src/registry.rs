//! Explicit registration of endpoint and group descriptors.
//!
//! The registry is the static stand-in for service discovery: the host
//! application lists every endpoint and group once at startup and hands the
//! registry to [`MapEndpoints::map_all_endpoints`]. Descriptors are held as
//! `Arc` singletons for the lifetime of the process.
//!
//! [`MapEndpoints::map_all_endpoints`]: crate::router::MapEndpoints::map_all_endpoints

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::endpoints::Endpoint;
use crate::error::{ComposeError, Result};
use crate::groups::{EndpointGroup, PrefixedGroup};
use crate::router::validate::duplicate_group_names;
use crate::router::RouteBuilder;

pub struct EndpointRegistry<R: RouteBuilder> {
    groups: Vec<Arc<dyn EndpointGroup<R>>>,
    endpoints: Vec<Arc<dyn Endpoint<R>>>,
}

impl<R: RouteBuilder> Default for EndpointRegistry<R> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            endpoints: Vec::new(),
        }
    }
}

impl<R: RouteBuilder + 'static> EndpointRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an endpoint, builder style
    pub fn endpoint<E>(mut self, endpoint: E) -> Self
    where
        E: Endpoint<R> + 'static,
    {
        self.register_endpoint(endpoint);
        self
    }

    /// Add a group, builder style
    pub fn group<G>(mut self, group: G) -> Self
    where
        G: EndpointGroup<R> + 'static,
    {
        self.register_group(group);
        self
    }

    pub fn register_endpoint<E>(&mut self, endpoint: E) -> &mut Self
    where
        E: Endpoint<R> + 'static,
    {
        self.endpoints.push(Arc::new(endpoint));
        self
    }

    pub fn register_group<G>(&mut self, group: G) -> &mut Self
    where
        G: EndpointGroup<R> + 'static,
    {
        self.groups.push(Arc::new(group));
        self
    }

    /// Apply operator overrides from `config`.
    ///
    /// Overridden prefixes replace the group's own. Disabled groups are
    /// removed, and so are the endpoints that belong to them. An override
    /// for a group that was never registered is an error, and so is a
    /// registry with duplicate group names, which overrides cannot resolve.
    pub fn with_config(self, config: &Config) -> Result<Self> {
        let duplicates = duplicate_group_names(&self.groups);
        if !duplicates.is_empty() {
            return Err(ComposeError::DuplicateGroupName(duplicates));
        }

        for name in config.groups.keys() {
            if !self.groups.iter().any(|g| g.name() == name) {
                return Err(ConfigError::UnknownGroup(name.clone()).into());
            }
        }

        let mut disabled: HashSet<String> = HashSet::new();
        let mut groups: Vec<Arc<dyn EndpointGroup<R>>> = Vec::with_capacity(self.groups.len());

        for group in self.groups {
            match config.groups.get(group.name()) {
                Some(overrides) if !overrides.enabled => {
                    tracing::info!("Endpoint group '{}' disabled by configuration", group.name());
                    disabled.insert(group.name().to_string());
                }
                Some(overrides) => match &overrides.prefix {
                    Some(prefix) => {
                        tracing::debug!(
                            "Endpoint group '{}' prefix overridden to '{}'",
                            group.name(),
                            prefix
                        );
                        groups.push(Arc::new(PrefixedGroup::new(group, prefix.clone())));
                    }
                    None => groups.push(group),
                },
                None => groups.push(group),
            }
        }

        let endpoints = self
            .endpoints
            .into_iter()
            .filter(|e| e.group_name().map_or(true, |name| !disabled.contains(name)))
            .collect();

        Ok(Self { groups, endpoints })
    }
}

impl<R: RouteBuilder> EndpointRegistry<R> {
    pub fn groups(&self) -> &[Arc<dyn EndpointGroup<R>>] {
        &self.groups
    }

    pub fn endpoints(&self) -> &[Arc<dyn Endpoint<R>>] {
        &self.endpoints
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.endpoints.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Arc<dyn EndpointGroup<R>>>, Vec<Arc<dyn Endpoint<R>>>) {
        (self.groups, self.endpoints)
    }
}
