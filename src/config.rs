use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "fitscore", about = "True-to-size fit rating service", version)]
pub struct CliArgs {
    /// Address to listen on.
    #[arg(long, env = "FITSCORE_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Persist records to this file. Records are kept in memory only when omitted.
    #[arg(long, env = "FITSCORE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log output format.
    #[arg(long, env = "FITSCORE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            bind,
            data_file,
            log_format,
        } = args;

        let bind: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address {:?}", bind))?;

        Ok(ServerConfig {
            bind,
            data_file,
            log_format,
        })
    }

    /// Fail fast on settings that would only break at the first write.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.data_file {
            anyhow::ensure!(
                !path.is_dir(),
                "data file {:?} is a directory",
                path
            );
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                anyhow::ensure!(
                    parent.is_dir(),
                    "directory for data file {:?} does not exist",
                    path
                );
            }
        }
        Ok(())
    }
}
