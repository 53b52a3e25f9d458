//! AuthGate - terminal login flow with a persisted session and guarded navigation.

mod app;
mod auth;
mod cli;
mod config;
mod error;
mod launcher;
mod router;
mod storage;
mod ui;

use app::App;
use auth::{AuthService, CredentialDirectory};
use clap::Parser;
use cli::{Args, StorageBackend};
use std::time::Duration;
use storage::{FileStore, KeyValueStore, KeyringStore, MemoryStore};

fn open_storage(args: &Args) -> Box<dyn KeyValueStore> {
    match args.storage {
        StorageBackend::File => {
            let dir = args
                .data_dir
                .clone()
                .unwrap_or_else(config::default_data_dir);
            let store = FileStore::in_dir(&dir);
            tracing::debug!("Using file storage at {}", store.path().display());
            Box::new(store)
        }
        StorageBackend::Keyring => Box::new(KeyringStore::new(config::KEYRING_SERVICE)),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting AuthGate");

    let mut auth = AuthService::new(CredentialDirectory::builtin(), open_storage(&args))
        .with_latency(Duration::from_millis(args.latency_ms));

    if args.logout {
        auth.logout()?;
        return Ok(());
    }

    let app = App::new(auth);
    launcher::start(app).await
}
