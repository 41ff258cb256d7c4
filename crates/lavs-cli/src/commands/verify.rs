//! `lavs verify`: classify a subject, replay evidence producers for it, fuse.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lavs_core::errors::InputError;
use lavs_fusion::pipeline::VerifyRequest;
use lavs_fusion::producers::{ProducerSet, StaticProducer};

use super::{load_evidence, CommandContext};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Evidence document with every producer's output (JSON), `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// File under verification
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// URL under verification (takes precedence over --file)
    #[arg(long)]
    pub url: Option<String>,
}

pub fn run(ctx: &CommandContext, args: &VerifyArgs) -> Result<String> {
    let request = VerifyRequest {
        url: args.url.clone(),
        file: args.file.clone(),
    };
    // Validate the subject before touching the evidence input.
    if request.url.as_deref().map_or(true, str::is_empty) && request.file.is_none() {
        return Err(InputError::NoInput.into());
    }

    let doc = load_evidence(&args.input)?;
    let producers = StaticProducer::from_layers(doc.layers)
        .into_iter()
        .fold(ProducerSet::new(ctx.config.producers.clone()), |set, p| {
            set.with(p)
        });

    let report = ctx.pipeline().verify(&request, &producers)?;
    ctx.render(&report)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_verify_png() {
        let evidence = evidence_file();
        let png = write_temp(".png", b"\x89PNG\r\n\x1A\n\0\0\0\rIHDR");
        let out = run(
            &context(),
            &VerifyArgs {
                input: evidence.path().to_str().unwrap().to_string(),
                file: Some(png.path().to_path_buf()),
                url: None,
            },
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["classification"]["content_type"], "image");
        assert_eq!(json["verdict"], "Suspicious");
        assert_eq!(json["confidence"], json["breakdown"]["final_score"]);
        // URL layer was not applicable to an image
        assert_eq!(json["breakdown"]["layer_breakdown"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_verify_without_subject() {
        let err = run(
            &context(),
            &VerifyArgs {
                input: "-".to_string(),
                file: None,
                url: None,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::NoInput)
        ));
    }
}
