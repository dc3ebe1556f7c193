//! Command line: `code-xray view <FILE>` or just `code-xray <FILE>`.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::ExplainConfig;

#[derive(Parser, Debug)]
#[command(
    name = "code-xray",
    version,
    about = "Terminal source viewer that asks a local model to explain selected lines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// File to view (same as `view <FILE>`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub service: ServiceArgs,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Open a source file in the viewer
    View {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Overrides for the explanation service. Accepted before or after the subcommand.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceArgs {
    /// Model name sent with every request
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Port of the model service
    #[arg(short = 'p', long, global = true)]
    pub port: Option<u16>,

    /// Host of the model service
    #[arg(long, global = true)]
    pub host: Option<String>,
}

impl Cli {
    /// The file to open, from either form of the command line.
    pub fn file(&self) -> Option<&Path> {
        match &self.command {
            Some(CliCommand::View { file }) => Some(file.as_path()),
            None => self.file.as_deref(),
        }
    }
}

impl ServiceArgs {
    pub fn apply_to(&self, config: &mut ExplainConfig) {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
