//! axum adapter
//!
//! [`RouteGroup`] wraps an `axum::Router` and implements
//! [`RouteBuilder`](crate::router::RouteBuilder) for it, so descriptors can
//! be composed straight onto an axum application.

pub mod router;

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::MethodRouter;

pub use router::RouteGroup;

/// A method router together with the HTTP methods it serves.
///
/// The methods key the builder's route table, so two endpoints may share a
/// path as long as they register different methods.
pub struct RouteHandler<S = ()> {
    methods: Vec<Method>,
    router: MethodRouter<S>,
}

impl<S> RouteHandler<S> {
    /// `router` must serve exactly `methods`
    pub fn new(methods: impl IntoIterator<Item = Method>, router: MethodRouter<S>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
            router,
        }
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub(crate) fn into_parts(self) -> (Vec<Method>, MethodRouter<S>) {
        (self.methods, self.router)
    }
}

macro_rules! method_handler {
    ($name:ident, $method:ident) => {
        #[doc = concat!("Route `", stringify!($method), "` requests to `handler`")]
        pub fn $name<H, T, S>(handler: H) -> RouteHandler<S>
        where
            H: Handler<T, S>,
            T: 'static,
            S: Clone + Send + Sync + 'static,
        {
            RouteHandler::new([Method::$method], axum::routing::$name(handler))
        }
    };
}

method_handler!(get, GET);
method_handler!(post, POST);
method_handler!(put, PUT);
method_handler!(delete, DELETE);
method_handler!(patch, PATCH);
method_handler!(head, HEAD);
method_handler!(options, OPTIONS);

/// Normalise a route pattern to a single leading `/`.
///
/// `""` and `"/"` both become `"/"`; a trailing `/` is kept so that
/// `/items/` stays distinct from `/items`.
pub(crate) fn normalize_pattern(pattern: &str) -> String {
    let trimmed = pattern.trim_start_matches('/');
    format!("/{trimmed}")
}

/// Normalise a group prefix for `Router::nest`.
///
/// Leading and trailing slashes are stripped and a single leading `/` is
/// added back; the root prefix is the empty string.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Full path of `pattern` once nested under `prefix`
pub(crate) fn join_path(prefix: &str, pattern: &str) -> String {
    match (prefix.is_empty(), pattern) {
        (true, _) => pattern.to_string(),
        (false, "/") => prefix.to_string(),
        (false, _) => format!("{prefix}{pattern}"),
    }
}
