use axum::{extract::Request, middleware::Next, response::Response, Json};
use endpoint_groups::adapters::http::{get, post};
use endpoint_groups::{
    logging, Config, Endpoint, EndpointGroup, EndpointRegistry, MapEndpoints, RouteBuilder,
    RouteGroup,
};

type App = RouteGroup;

struct UsersGroup;

impl EndpointGroup<App> for UsersGroup {
    fn name(&self) -> &str {
        "users"
    }

    fn route_prefix(&self) -> Option<&str> {
        Some("api/users")
    }

    fn configure(&self, group: App) -> App {
        group.layer(axum::middleware::from_fn(tag_group))
    }
}

struct OrdersGroup;

impl EndpointGroup<App> for OrdersGroup {
    fn name(&self) -> &str {
        "orders"
    }

    fn route_prefix(&self) -> Option<&str> {
        Some("api/orders")
    }
}

struct ListUsers;

impl Endpoint<App> for ListUsers {
    fn group_name(&self) -> Option<&str> {
        Some("users")
    }

    fn map(&self, router: App) -> App {
        router.map("/", get(list_users))
    }
}

struct CreateUser;

impl Endpoint<App> for CreateUser {
    fn group_name(&self) -> Option<&str> {
        Some("users")
    }

    fn map(&self, router: App) -> App {
        router.map("/", post(create_user))
    }
}

struct ListOrders;

impl Endpoint<App> for ListOrders {
    fn group_name(&self) -> Option<&str> {
        Some("orders")
    }

    fn map(&self, router: App) -> App {
        router.map("/", get(list_orders))
    }
}

struct Health;

impl Endpoint<App> for Health {
    fn map(&self, router: App) -> App {
        router.map("/health", get(health))
    }
}

async fn tag_group(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    response.headers_mut().insert(
        "x-endpoint-group",
        axum::http::HeaderValue::from_static("users"),
    );
    response
}

async fn list_users() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "users": [] }))
}

async fn create_user(Json(user): Json<serde_json::Value>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "created": user }))
}

async fn list_orders() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "orders": [] }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Compose the sample descriptors and print the resulting route table.
///
/// Usage: `endpoint-groups [config.toml]`
fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    logging::init(&config.logging)?;

    let registry = EndpointRegistry::new()
        .group(UsersGroup)
        .group(OrdersGroup)
        .endpoint(ListUsers)
        .endpoint(CreateUser)
        .endpoint(ListOrders)
        .endpoint(Health)
        .with_config(&config)?;

    let app = RouteGroup::new().map_all_endpoints(&registry)?;

    for (method, path) in app.routes() {
        tracing::info!("Registered route {} {}", method, path);
        println!("{method} {path}");
    }

    let _router: axum::Router = app.into_router();
    Ok(())
}
