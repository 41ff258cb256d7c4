//! `lavs classify`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lavs_core::errors::InputError;

use super::CommandContext;

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// File to classify
    #[arg(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// URL to classify
    #[arg(long)]
    pub url: Option<String>,
}

pub fn run(ctx: &CommandContext, args: &TargetArgs) -> Result<String> {
    let classifier = ctx.pipeline().classifier();
    let classification = match (&args.url, &args.file) {
        (Some(url), _) => classifier.classify_url(url),
        (None, Some(path)) => classifier.classify_file(path)?,
        (None, None) => return Err(InputError::NoInput.into()),
    };
    ctx.render(&classification)
}
