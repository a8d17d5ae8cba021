//! Configuration display command.

use anyhow::Result;

use crate::context::Context;

/// Run the config command.
pub async fn run(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if ctx.output.is_json() {
        ctx.output.json(config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[catalog]");
    ctx.output.kv("global_id_type", &config.catalog.global_id_type);

    ctx.output.info("[meta]");
    ctx.output.kv("content_type", &config.meta.content_type);
    ctx.output.kv("in_stock_label", &config.meta.in_stock_label);
    ctx.output.kv("out_of_stock_label", &config.meta.out_of_stock_label);

    ctx.output.info("[telemetry]");
    ctx.output.kv("filter", &config.telemetry.filter);
    ctx.output.kv("format", &format!("{:?}", config.telemetry.format).to_lowercase());

    Ok(())
}
