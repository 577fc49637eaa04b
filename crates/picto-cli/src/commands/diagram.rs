use std::path::{Path, PathBuf};

use anyhow::Context;
use picto_config::PictoConfig;
use picto_core::schema::TABLES;
use picto_schema::{DiagramOptions, render_er};

use crate::cli::{DiagramArgs, GlobalFlags};

/// Handle `picto diagram`.
pub fn handle(
    args: &DiagramArgs,
    config: &PictoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.diagram.output));

    match render(&output, config) {
        Ok(path) => {
            if !flags.quiet {
                println!("Success! Check the {} file", path.display());
            }
            Ok(())
        }
        Err(error) => {
            println!("There was a problem generating the diagram");
            Err(error)
        }
    }
}

fn render(output: &Path, config: &PictoConfig) -> anyhow::Result<PathBuf> {
    let options = DiagramOptions {
        graphviz: config.diagram.graphviz.clone(),
        rankdir: config.diagram.validated_rankdir()?,
    };
    render_er(TABLES, output, &options)
        .with_context(|| format!("failed to render diagram to {}", output.display()))
}
