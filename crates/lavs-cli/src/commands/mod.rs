//! Subcommand implementations. Each returns the text to print on stdout.

pub mod behavioral;
pub mod classify;
pub mod config;
pub mod fuse;
pub mod verify;

use std::io::Read;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use lavs_core::config::LavsConfig;
use lavs_core::errors::InputError;
use lavs_fusion::evidence::{parse_evidence, EvidenceDocument};
use lavs_fusion::pipeline::FusionPipeline;

/// Input path meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Resolved configuration plus output settings shared by all commands.
pub struct CommandContext {
    pub config: LavsConfig,
    pub pretty: bool,
    pipeline: FusionPipeline,
}

impl CommandContext {
    pub fn new(config: LavsConfig, pretty: bool) -> Self {
        let pipeline = FusionPipeline::new(&config);
        Self {
            config,
            pretty,
            pipeline,
        }
    }

    pub fn pipeline(&self) -> &FusionPipeline {
        &self.pipeline
    }

    /// Serialize `value` as JSON, pretty-printed if requested.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

/// Read an evidence document from a file, or stdin for `-`.
pub fn load_evidence(input: &str) -> Result<EvidenceDocument, InputError> {
    let text = read_input(input)?;
    let source_name = if input == STDIN_MARKER { "<stdin>" } else { input };
    parse_evidence(source_name, &text)
}

fn read_input(input: &str) -> Result<String, InputError> {
    let unreadable = |e: std::io::Error| InputError::Unreadable {
        path: input.to_string(),
        message: e.to_string(),
    };
    if input == STDIN_MARKER {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(unreadable)?;
        Ok(text)
    } else {
        std::fs::read_to_string(Path::new(input)).map_err(unreadable)
    }
}
