//! Path-template routing demo.
//!
//! Run with:
//!   TRELLIS_ADDR=127.0.0.1:3000 cargo run --example books
//!
//! Try:
//!   curl http://localhost:3000/books/dune/page/42

use tracing_subscriber::EnvFilter;
use trellis::apps::books;
use trellis::{Config, Error, Server};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    Server::bind(config.addr).serve(books::router()).await
}
