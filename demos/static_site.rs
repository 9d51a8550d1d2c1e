//! Minimal runnable wiring: a static resource root plus a few REST routes.
//!
//! Run with `cargo run --example static_site`, then try:
//!
//! ```text
//! curl 'http://127.0.0.1:35000/hello?name=world'
//! curl 'http://127.0.0.1:35000/status'
//! curl 'http://127.0.0.1:35000/index.html'
//! ```
//!
//! Static files are served from a `public/` directory next to the working
//! directory; requests ending in `/` fall back to that directory's
//! `index.html`.

use monoserve::dispatch::Selector;
use monoserve::resource::StaticResources;
use monoserve::router::Routes;
use monoserve::server::Server;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut routes = Routes::new();

    routes.register("/hello", |query| {
        let name = query
            .and_then(|q| q.split('&').find_map(|pair| pair.strip_prefix("name=")))
            .unwrap_or("world");
        format!("hello, {name}!")
    });

    routes.register("/status", |_query| {
        json!({ "status": "ok", "server": "monoserve" }).to_string()
    });

    let selector = Selector::new(routes, StaticResources::new("public"));
    let server = Server::bind("127.0.0.1:35000").await?;
    println!("Listening on http://{}", server.local_addr());
    server.run(selector).await?;
    Ok(())
}
