//! Access-logging middleware demo.
//!
//! Run with:
//!   TRELLIS_ADDR=127.0.0.1:3000 cargo run --example logged_routes
//!
//! Try:
//!   curl http://localhost:3000/foo
//!   curl http://localhost:3000/bar
//!
//! Every request prints one `trellis::access` line with its path.

use tracing_subscriber::EnvFilter;
use trellis::apps::logged;
use trellis::{Config, Error, Server};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    Server::bind(config.addr).serve(logged::router()).await
}
