//! CLI command implementations.

pub mod config;
pub mod reconcile;
pub mod render;

use clap::Args;

/// Arguments for the reconcile command.
#[derive(Args)]
pub struct ReconcileArgs {
    /// Product JSON file (a product document or a query response).
    #[arg(short, long)]
    pub product: String,

    /// Search query, e.g. "color=Red&size=M".
    #[arg(short, long, default_value = "")]
    pub query: String,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog JSON file (an array of product documents).
    #[arg(short, long)]
    pub products: String,

    /// Page URL, e.g. "https://shop.example.com/product/72?color=Red".
    #[arg(short, long)]
    pub url: String,

    /// Render as if the client were offline.
    #[arg(long)]
    pub offline: bool,

    /// Print the rendered head tags.
    #[arg(long)]
    pub html: bool,
}
