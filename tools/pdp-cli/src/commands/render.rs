//! Product page render command.

use anyhow::{Context as _, Result};

use product_details::collaborators::{Location, MemoryCart, PageUrl, StaticNetworkStatus};
use product_details::data::InMemoryProductSource;
use product_details::view::{PageOutcome, ProductView};

use super::RenderArgs;
use crate::context::Context;
use crate::output::branch_badge;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.read_file(&args.products)?;
    let source = InMemoryProductSource::from_json(&catalog)
        .with_context(|| format!("Failed to parse catalog: {}", args.products))?;

    let url = PageUrl::parse(&args.url).with_context(|| format!("Invalid URL: {}", args.url))?;
    let route_id = url
        .route_product_id()
        .map(str::to_string)
        .with_context(|| format!("Not a product URL: {}", args.url))?;

    let network = if args.offline {
        StaticNetworkStatus::offline()
    } else {
        StaticNetworkStatus::online()
    };

    tracing::debug!(products = source.len(), route_id = %route_id, "Rendering product page");

    let mut view =
        ProductView::new(source, network, url, MemoryCart::new()).with_config(ctx.config.clone());
    let outcome = view.load(&route_id).await?;

    if ctx.output.is_json() {
        ctx.output.json(&outcome);
        return Ok(());
    }

    ctx.output.header(&format!("Product {}", route_id));
    ctx.output.kv("branch", &branch_badge(outcome.branch()));
    ctx.output.kv("url", &view.url().href());

    match &outcome {
        PageOutcome::Product(page) => {
            ctx.output.kv("title", &page.meta.title);
            for (id, value) in page.selection.iter() {
                ctx.output.kv(&format!("selected {}", id), value);
            }
            if let Some(variant) = &page.selected_variant {
                ctx.output.kv("variant", variant.as_str());
            }
            if args.html {
                ctx.output.block(&page.head.render());
            }
        }
        PageOutcome::Offline => ctx.output.warn("Client is offline."),
        PageOutcome::NotFound | PageOutcome::Pending => {}
    }

    Ok(())
}
