//! CLI for the filedrop file server and upload client.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use filedrop_core::config;
use std::net::IpAddr;
use std::path::PathBuf;

use commands::{run_delete, run_serve, run_session, run_upload};

/// Top-level CLI for the filedrop file server and upload client.
#[derive(Debug, Parser)]
#[command(name = "filedrop")]
#[command(about = "filedrop: HTTP file-drop server and upload client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve a local directory over HTTP.
    Serve {
        /// Directory mapped to `/` (defaults to the current directory).
        #[arg(long)]
        root: Option<PathBuf>,

        /// Listen address (defaults to the configured address).
        #[arg(long)]
        listen: Option<IpAddr>,

        /// Listen port (defaults to the configured port).
        #[arg(long)]
        port: Option<u16>,

        /// Allow uploads (PUT/POST) and deletes in addition to reads.
        #[arg(long)]
        writable: bool,

        /// Serve this file from inside a directory when the directory itself
        /// is requested.
        #[arg(long, value_name = "FILE")]
        index: Option<String>,
    },

    /// Upload a local file to the server (PUT of the raw bytes to /<name>).
    Upload {
        /// Path of the file to upload.
        path: PathBuf,

        /// Server base URL (defaults to the configured server_url).
        #[arg(long)]
        server: Option<String>,
    },

    /// Delete an uploaded file from the server.
    Delete {
        /// File name or `/`-prefixed resource path on the server.
        name: String,

        /// Server base URL (defaults to the configured server_url).
        #[arg(long)]
        server: Option<String>,
    },

    /// Interactive upload/delete session against one server.
    Session {
        /// Server base URL (defaults to the configured server_url).
        #[arg(long)]
        server: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve {
                root,
                listen,
                port,
                writable,
                index,
            } => run_serve(&cfg, root, listen, port, writable, index).await?,
            CliCommand::Upload { path, server } => {
                tokio::task::spawn_blocking(move || {
                    run_upload(&cfg, &path, server.as_deref())
                })
                .await??
            }
            CliCommand::Delete { name, server } => {
                tokio::task::spawn_blocking(move || {
                    run_delete(&cfg, &name, server.as_deref())
                })
                .await??
            }
            CliCommand::Session { server } => {
                tokio::task::spawn_blocking(move || run_session(&cfg, server.as_deref()))
                    .await??
            }
            CliCommand::Completions { shell } => {
                let mut command = Cli::command();
                let name = command.get_name().to_string();
                clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
