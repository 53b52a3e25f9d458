//! Clap config
use crate::config::LOGIN_LATENCY_MS;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// AuthGate - terminal login flow with a persisted session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Durable storage backend for the session (default: "file")
    #[arg(long, value_enum, default_value_t = StorageBackend::File)]
    pub storage: StorageBackend,

    /// Directory for the file backend (default: platform data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Simulated login latency in milliseconds (default: 500)
    #[arg(long, default_value_t = LOGIN_LATENCY_MS)]
    pub latency_ms: u64,

    /// Clear the stored session and exit
    #[arg(long)]
    pub logout: bool,
}

/// Where the session flag and stored profile are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// JSON file under the data directory
    File,
    /// OS keyring, one entry per key
    Keyring,
    /// Process memory only; nothing survives a restart
    Memory,
}
