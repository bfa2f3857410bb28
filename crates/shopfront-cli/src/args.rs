use clap::{Parser, Subcommand};
use shopfront_types::{CategoryFilter, SortKey};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Browse a remote product catalog from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the product API (overrides config and SHOPFRONT_API)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Use the built-in demo catalog instead of the network
    #[arg(long, global = true)]
    pub offline: bool,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List products, filtered and sorted
    Browse {
        /// Category to show ("all" or a concrete label)
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Free-text search over title and description
        #[arg(long, default_value = "")]
        search: String,

        /// Sort key: featured, price-low, price-high or name
        #[arg(long, default_value = "featured")]
        sort: SortKey,
    },

    /// Show one product in detail
    Show {
        /// Product identifier
        id: u64,

        /// Desired quantity (values below 1 are ignored)
        #[arg(long)]
        quantity: Option<i64>,

        /// Toggle the wishlist flag before rendering
        #[arg(long)]
        wishlist: bool,

        /// Add to cart before rendering (shows the acknowledgement)
        #[arg(long)]
        add_to_cart: bool,
    },

    /// List the category labels offered by the data source
    Categories,
}
