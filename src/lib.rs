//! # monoserve
//!
//! A single-connection-at-a-time web server: static files (text and image)
//! out of a fixed resource root, plus exact-match REST-style routes
//! dispatched to registered handlers.
//!
//! The interesting part is the decision core, [`dispatch::Selector`]: given
//! a parsed request it produces exactly one [`dispatch::Decision`] — route
//! body, static text file, static image file, or not-found — as a plain
//! value, with wire formatting left to the transport layer. That makes the
//! dispatch logic testable without ever opening a socket.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use monoserve::dispatch::Selector;
//! use monoserve::resource::StaticResources;
//! use monoserve::router::Routes;
//! use monoserve::server::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut routes = Routes::new();
//!     routes.register("/hello", |_query| "world".to_owned());
//!
//!     let selector = Selector::new(routes, StaticResources::new("public"));
//!     let server = Server::bind("127.0.0.1:35000").await?;
//!     println!("Listening on http://127.0.0.1:35000");
//!     server.run(selector).await?;
//!     Ok(())
//! }
//! ```

pub mod dispatch;
pub mod http;
pub mod media;
pub mod resource;
pub mod router;
pub mod server;

// ── Convenience re-exports ────────────────────────────────────────────────────
pub use dispatch::{Decision, Selector};
pub use http::{Headers, Request, Response, StatusCode};
pub use media::FileFormat;
pub use resource::StaticResources;
pub use router::Routes;
pub use server::{Server, ServerError};
