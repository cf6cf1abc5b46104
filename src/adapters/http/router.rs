use std::convert::Infallible;
use std::fmt;

use axum::extract::Request;
use axum::http::Method;
use axum::response::IntoResponse;
use axum::routing::Route;
use axum::Router;
use tower::{Layer, Service};

use super::{join_path, normalize_pattern, normalize_prefix, RouteHandler};
use crate::router::RouteBuilder;

type Convention<S> = Box<dyn FnOnce(Router<S>) -> Router<S> + Send>;

/// axum router builder with group-wide conventions.
///
/// Conventions added with [`layer`](RouteGroup::layer),
/// [`route_layer`](RouteGroup::route_layer) or
/// [`with_convention`](RouteGroup::with_convention) are deferred until the
/// group is mounted (or, for the top-level builder, until
/// [`into_router`](RouteGroup::into_router)). They therefore cover every
/// route mapped onto the group, including routes mapped after the
/// convention was added.
///
/// The builder also keeps a route table keyed on `(method, path)`. Handlers
/// registering different methods on one path are merged into a single axum
/// route. axum panics on overlapping method routes, so overlaps are skipped
/// instead: a handler whose method is already registered for its path is
/// ignored, and a group that collides with its parent is dropped as a whole.
/// Every skipped registration is logged and listed by
/// [`conflicts`](RouteGroup::conflicts).
pub struct RouteGroup<S = ()> {
    prefix: String,
    router: Router<S>,
    conventions: Vec<Convention<S>>,
    routes: Vec<(Method, String)>,
    conflicts: Vec<(Method, String)>,
}

impl<S> RouteGroup<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Top-level builder with no prefix
    pub fn new() -> Self {
        Self::scoped(String::new())
    }

    fn scoped(prefix: String) -> Self {
        Self {
            prefix,
            router: Router::new(),
            conventions: Vec::new(),
            routes: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Normalised prefix this builder is scoped under; empty at the root
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registered `(method, path)` pairs, relative to this builder, in registration order
    pub fn routes(&self) -> &[(Method, String)] {
        &self.routes
    }

    /// Distinct registered paths in first-registration order
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for (_, path) in &self.routes {
            if !paths.contains(&path.as_str()) {
                paths.push(path);
            }
        }
        paths
    }

    /// Registrations skipped because their method and path were already taken
    pub fn conflicts(&self) -> &[(Method, String)] {
        &self.conflicts
    }

    fn is_registered(&self, method: &Method, path: &str) -> bool {
        self.routes.iter().any(|(m, p)| m == method && p == path)
    }

    /// Apply `layer` to every route in the group
    pub fn layer<L>(self, layer: L) -> Self
    where
        L: Layer<Route> + Clone + Send + Sync + 'static,
        L::Service: Service<Request> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Error: Into<Infallible> + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.with_convention(move |router| router.layer(layer))
    }

    /// Apply `layer` to matched routes only, leaving fallbacks untouched
    pub fn route_layer<L>(self, layer: L) -> Self
    where
        L: Layer<Route> + Clone + Send + Sync + 'static,
        L::Service: Service<Request> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Error: Into<Infallible> + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.with_convention(move |router| router.route_layer(layer))
    }

    /// Apply an arbitrary transformation to the group's router when it is mounted
    pub fn with_convention<F>(mut self, convention: F) -> Self
    where
        F: FnOnce(Router<S>) -> Router<S> + Send + 'static,
    {
        self.conventions.push(Box::new(convention));
        self
    }

    /// Finish building and return the underlying axum router
    pub fn into_router(self) -> Router<S> {
        if self.routes.is_empty() {
            if !self.conventions.is_empty() {
                tracing::debug!("No routes registered; skipping {} conventions", self.conventions.len());
            }
            return self.router;
        }
        apply_conventions(self.router, self.conventions)
    }
}

fn apply_conventions<S>(router: Router<S>, conventions: Vec<Convention<S>>) -> Router<S> {
    conventions
        .into_iter()
        .fold(router, |router, convention| convention(router))
}

impl<S> Default for RouteGroup<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for RouteGroup<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteGroup")
            .field("prefix", &self.prefix)
            .field("routes", &self.routes)
            .field("conflicts", &self.conflicts)
            .field("conventions", &self.conventions.len())
            .finish()
    }
}

impl<S> RouteBuilder for RouteGroup<S>
where
    S: Clone + Send + Sync + 'static,
{
    type Handler = RouteHandler<S>;

    fn map(mut self, pattern: &str, handler: RouteHandler<S>) -> Self {
        let path = normalize_pattern(pattern);
        let (methods, method_router) = handler.into_parts();

        let taken: Vec<Method> = methods
            .iter()
            .filter(|m| self.is_registered(m, &path))
            .cloned()
            .collect();
        if !taken.is_empty() {
            for method in taken {
                tracing::warn!(
                    "Skipping duplicate route: {} {}",
                    method,
                    join_path(&self.prefix, &path)
                );
                self.conflicts.push((method, path.clone()));
            }
            return self;
        }

        self.router = self.router.route(&path, method_router);
        self.routes
            .extend(methods.into_iter().map(|m| (m, path.clone())));
        self
    }

    fn group(&self, prefix: &str) -> Self {
        Self::scoped(normalize_prefix(prefix))
    }

    fn mount(mut self, group: Self) -> Self {
        let RouteGroup {
            prefix,
            router,
            conventions,
            routes,
            conflicts,
        } = group;

        self.conflicts.extend(
            conflicts
                .into_iter()
                .map(|(m, p)| (m, join_path(&prefix, &p))),
        );

        if routes.is_empty() {
            tracing::debug!("Not mounting empty route group at '{}'", prefix);
            return self;
        }

        let full: Vec<(Method, String)> = routes
            .into_iter()
            .map(|(m, p)| (m, join_path(&prefix, &p)))
            .collect();
        let taken: Vec<(Method, String)> = full
            .iter()
            .filter(|(m, p)| self.is_registered(m, p))
            .cloned()
            .collect();
        if !taken.is_empty() {
            for (method, path) in taken {
                tracing::warn!(
                    "Dropping route group at '{}' due to route conflict: {} {}",
                    prefix,
                    method,
                    join_path(&self.prefix, &path)
                );
                self.conflicts.push((method, path));
            }
            return self;
        }

        let router = apply_conventions(router, conventions);
        self.router = if prefix.is_empty() {
            self.router.merge(router)
        } else {
            self.router.nest(&prefix, router)
        };
        self.routes.extend(full);
        self
    }
}
