//! Sequential TCP request loop.
//!
//! Accepts one connection at a time: read the request head, select a
//! response strategy, render it, write it, close, and only then accept the
//! next connection. There are no per-connection tasks and no timeouts; a
//! slow client stalls the loop, which is the documented trade-off of this
//! server. A failed connection is logged and never takes the loop down.

pub mod transport;

use std::net::SocketAddr;

use bytes::BytesMut;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use crate::dispatch::{Decision, Selector};
use crate::http::request::{Request, RequestError};

/// Errors produced by the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Maximum size of a request head we will buffer before answering 404 (16 KiB).
const MAX_HEAD_SIZE: usize = 16 * 1024;

/// Initial read buffer capacity per connection.
const INITIAL_BUF_SIZE: usize = 4096;

/// The monoserve HTTP server.
///
/// Binds one TCP address and serves connections strictly one at a time,
/// dispatching each request through a [`Selector`].
///
/// # Examples
///
/// ```rust,no_run
/// use monoserve::dispatch::Selector;
/// use monoserve::resource::StaticResources;
/// use monoserve::router::Routes;
/// use monoserve::server::Server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut routes = Routes::new();
///     routes.register("/hello", |_query| "world".to_owned());
///
///     let selector = Selector::new(routes, StaticResources::new("public"));
///     let server = Server::bind("127.0.0.1:35000").await?;
///     server.run(selector).await?;
///     Ok(())
/// }
/// ```
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Binds the server to the given TCP address.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be bound
    /// (e.g. port already in use, insufficient permissions).
    pub async fn bind(addr: impl AsRef<str>) -> Result<Self, ServerError> {
        let addr = addr.as_ref();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.to_owned(),
                source: e,
            })?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Starts the accept loop, dispatching every request through `selector`.
    ///
    /// The route registry inside `selector` is consumed here and can no
    /// longer be mutated — registration is complete before the first accept.
    /// Runs until the process is terminated or the listener itself fails.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if the TCP listener fails irrecoverably.
    pub async fn run(self, selector: Selector) -> Result<(), ServerError> {
        info!(
            address = %self.local_addr,
            root = %selector.resources().root().display(),
            "monoserve listening"
        );

        loop {
            let (stream, peer_addr) = match self.listener.accept().await {
                Ok(pair) => pair,
                Err(e) => {
                    error!(error = %e, "failed to accept connection");
                    continue;
                }
            };

            debug!(peer = %peer_addr, "connection accepted");

            // One connection at a time: the next accept happens only after
            // this response is fully written and the stream dropped.
            if let Err(e) = handle_connection(stream, peer_addr, &selector).await {
                warn!(peer = %peer_addr, error = %e, "connection closed with error");
            }
        }
    }
}

/// Serves a single connection: one request head in, one response out.
async fn handle_connection(
    mut stream: TcpStream,
    peer_addr: SocketAddr,
    selector: &Selector,
) -> Result<(), std::io::Error> {
    let mut buf = BytesMut::with_capacity(INITIAL_BUF_SIZE);

    let decision = loop {
        let bytes_read = stream.read_buf(&mut buf).await?;

        if bytes_read == 0 {
            debug!(peer = %peer_addr, "connection closed by peer before a complete head");
            return Ok(());
        }

        if buf.len() > MAX_HEAD_SIZE {
            warn!(peer = %peer_addr, "request head too large");
            break Decision::NotFound;
        }

        match Request::parse(&buf) {
            Ok(request) => {
                debug!(
                    peer = %peer_addr,
                    method = %request.method(),
                    path = %request.path(),
                    "dispatching request"
                );
                break selector.select(&request);
            }
            Err(RequestError::Incomplete) => {
                // Head not fully received — read more data.
                continue;
            }
            Err(e) => {
                // A head we cannot understand is answered like a missing
                // resource rather than propagated as a fault.
                warn!(peer = %peer_addr, error = %e, "malformed request head");
                break Decision::NotFound;
            }
        }
    };

    let response = transport::render(decision).await;
    let status = response.status();
    stream.write_all(&response.into_bytes()).await?;
    stream.flush().await?;
    debug!(peer = %peer_addr, status = %status, "response sent");

    Ok(())
}
