//! Query attribute reconciliation command.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use turbo_catalog::catalog::ProductDetails;
use turbo_catalog::selection::{reconcile, QueryAttributes, SelectionMap};
use turbo_catalog::VariantId;

use product_details::data::{Fetched, ProductQueryResponse};

use super::ReconcileArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ReconcileReport<'a> {
    query: &'a QueryAttributes,
    selection: &'a SelectionMap,
    variant: Option<&'a VariantId>,
}

/// Run the reconcile command.
pub async fn run(args: ReconcileArgs, ctx: &Context) -> Result<()> {
    let content = ctx.read_file(&args.product)?;
    let product = parse_product(&content)
        .with_context(|| format!("Failed to parse product: {}", args.product))?;

    let query = QueryAttributes::parse(&args.query);
    let variants = product.variants_or_empty();
    let selection = reconcile(&query, variants);
    let variant = selection.find_variant(variants).map(|v| &v.id);

    if ctx.output.is_json() {
        ctx.output.json(&ReconcileReport {
            query: &query,
            selection: &selection,
            variant,
        });
        return Ok(());
    }

    ctx.output.header(&format!(
        "Selection for {}",
        product.name.as_deref().unwrap_or(product.id.as_str())
    ));

    if selection.is_empty() {
        ctx.output.info("No attributes selected.");
        return Ok(());
    }

    for (id, value) in selection.iter() {
        let slug = variants
            .iter()
            .find_map(|v| v.attribute(id))
            .map(|assignment| assignment.slug().as_str())
            .unwrap_or("?");
        ctx.output.kv(&format!("{} ({})", id, slug), value);
    }

    match variant.and_then(|id| product.variant(id)) {
        Some(v) => ctx.output.success(&format!("Matches variant {} ({})", v.id, v.build_name())),
        None => ctx.output.info("No single variant matches the selection."),
    }

    Ok(())
}

/// Accept either a bare product document or a query response.
fn parse_product(content: &str) -> Result<ProductDetails> {
    if let Ok(product) = ProductDetails::from_json(content) {
        return Ok(product);
    }

    match ProductQueryResponse::from_json(content)?.into_fetched() {
        Fetched::Present(product) => Ok(product),
        Fetched::Missing => bail!("Response has no product"),
        Fetched::Failed(errors) => bail!("Response carries errors only: {}", errors),
        Fetched::Pending => bail!("Response has no data"),
    }
}
