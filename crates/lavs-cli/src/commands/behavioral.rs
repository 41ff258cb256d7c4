//! `lavs behavioral`.

use anyhow::Result;
use clap::Args;

use super::{load_evidence, CommandContext};

#[derive(Args, Debug)]
pub struct BehavioralArgs {
    /// Evidence document (JSON), `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,
}

pub fn run(ctx: &CommandContext, args: &BehavioralArgs) -> Result<String> {
    let doc = load_evidence(&args.input)?;
    let layer = ctx.pipeline().behavioral().analyze(&doc.layers);
    ctx.render(&layer)
}
