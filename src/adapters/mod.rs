//! Adapters binding [`RouteBuilder`](crate::router::RouteBuilder) to concrete routing engines

pub mod http;
