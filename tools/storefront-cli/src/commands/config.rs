//! Site configuration inspection.

use anyhow::{Context as _, Result};

use super::ConfigArgs;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    let source = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());
    ctx.output.debug(&format!("Config source: {}", source));

    ctx.config.validate().context("Site config is invalid")?;

    if args.validate {
        ctx.output.success(&format!("{} is valid", source));
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let toml = ctx.config.to_toml().context("Failed to serialize config")?;
    println!("# {}", source);
    print!("{}", toml);

    Ok(())
}
