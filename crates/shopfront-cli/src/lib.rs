pub mod args;
pub mod handlers;
pub mod output;

pub use args::{Cli, Commands};

use anyhow::Result;
use shopfront_runtime::{Config, Storefront, resolve_api_url};
use shopfront_source::{HttpSource, InMemorySource, ProductSource};
use std::time::Duration;

pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        api_url,
        offline,
        command,
        ..
    } = cli;

    if offline {
        let storefront = Storefront::new(InMemorySource::demo());
        return dispatch(command, &storefront).await;
    }

    let config = Config::load()?;
    let url = resolve_api_url(api_url.as_deref(), &config);
    let timeout = Duration::from_secs(config.request_timeout_secs.unwrap_or(10));

    let storefront = Storefront::new(HttpSource::with_timeout(url, timeout)?);
    dispatch(command, &storefront).await
}

async fn dispatch<S: ProductSource>(command: Commands, storefront: &Storefront<S>) -> Result<()> {
    match command {
        Commands::Browse {
            category,
            search,
            sort,
        } => handlers::browse::handle(storefront, category, search, sort).await,
        Commands::Show {
            id,
            quantity,
            wishlist,
            add_to_cart,
        } => handlers::show::handle(storefront, id, quantity, wishlist, add_to_cart).await,
        Commands::Categories => handlers::categories::handle(storefront).await,
    }
}
