pub mod composer;
pub mod validate;

pub use composer::{compose, Composer, MapEndpoints};
pub use validate::validate;

/// Routing capability the composer maps endpoints onto.
///
/// A builder accepts `pattern + handler` registrations and can produce
/// scoped children under a path prefix, which are mounted back once their
/// endpoints have been mapped. Builders are consumed and returned so that
/// configuration hooks can swap in a different builder.
pub trait RouteBuilder: Sized {
    /// Handler type accepted by [`map`](RouteBuilder::map)
    type Handler;

    /// Register `handler` at `pattern`, relative to this builder's prefix
    fn map(self, pattern: &str, handler: Self::Handler) -> Self;

    /// Create an empty child builder scoped under `prefix`.
    ///
    /// An empty prefix scopes the child at the same path as `self`.
    fn group(&self, prefix: &str) -> Self;

    /// Attach a child created with [`group`](RouteBuilder::group)
    fn mount(self, group: Self) -> Self;
}
