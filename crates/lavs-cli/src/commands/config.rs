//! `lavs config`.

use anyhow::Result;

use super::CommandContext;

/// Effective configuration as TOML. Unset values stay unset; their
/// compiled defaults apply.
pub fn run(ctx: &CommandContext) -> Result<String> {
    Ok(ctx.config.to_toml()?)
}
