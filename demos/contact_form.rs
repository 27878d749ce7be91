//! Contact form demo.
//!
//! Run with:
//!   TRELLIS_ADDR=127.0.0.1:3000 cargo run --example contact_form
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl -d 'email=a@b.c&subject=hi&message=hello' http://localhost:3000/

use tracing_subscriber::EnvFilter;
use trellis::apps::contact::{self, ContactPage};
use trellis::{Config, Error, Server};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    // A missing or malformed page stops the process before it serves anything.
    let page = ContactPage::load(&config.template)?;

    Server::bind(config.addr).serve(contact::router(page)).await
}
