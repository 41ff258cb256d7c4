//! `lavs fuse` and `lavs aggregate`.

use anyhow::Result;
use clap::Args;

use lavs_core::types::ContentType;

use super::{load_evidence, CommandContext};

/// Evidence input shared by `fuse` and `aggregate`.
#[derive(Args, Debug)]
pub struct EvidenceArgs {
    /// Evidence document (JSON), `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Declared content type; overrides the document's `content_type`
    #[arg(short = 't', long)]
    pub content_type: Option<String>,
}

impl EvidenceArgs {
    fn declared<'a>(&'a self, document: &'a Option<String>) -> Option<&'a str> {
        self.content_type.as_deref().or(document.as_deref())
    }
}

/// Producer evidence plus the behavioral layer, aggregated.
pub fn fuse(ctx: &CommandContext, args: &EvidenceArgs) -> Result<String> {
    let doc = load_evidence(&args.input)?;
    let content_type = ContentType::from_declared(args.declared(&doc.content_type));
    let verdict = ctx.pipeline().fuse(&doc.layers, content_type);
    ctx.render(&verdict)
}

/// Evidence aggregated exactly as given.
pub fn aggregate(ctx: &CommandContext, args: &EvidenceArgs) -> Result<String> {
    let doc = load_evidence(&args.input)?;
    let verdict = ctx
        .pipeline()
        .engine()
        .aggregate_declared(&doc.layers, args.declared(&doc.content_type));
    ctx.render(&verdict)
}
