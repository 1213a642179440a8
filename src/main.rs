/*!
# Whispers - A Personal Archive

Entry point for the interactive journal. The archive lives in `whispers.db`
in the working directory and is created on first run.

## Usage

```
whispers

Menu:
1. Write a new entry
2. Read a random entry
3. Search entries
4. Exit
```

Diagnostic logs go to stderr and are off below `warn` unless `RUST_LOG`
asks for more.
*/

use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use whispers::constants::{DEFAULT_LOG_FILTER, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use whispers::{AppResult, ArchiveStore, Config, SessionController, ThreadRandom};

/// Installs the stderr fmt subscriber. Stdout is reserved for the menu.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Opens the archive and runs one interactive session.
fn run_application() -> AppResult<()> {
    let config = Config::default();
    config.validate()?;

    let archive = ArchiveStore::open(&config.archive_path)?;

    let stdin = io::stdin();
    let mut session = SessionController::new(
        archive,
        config.quotes,
        stdin.lock(),
        io::stdout(),
        ThreadRandom,
    );
    session.run()
}

fn main() -> ExitCode {
    init_tracing();

    let correlation_id = uuid::Uuid::new_v4().to_string();
    let root_span = tracing::span!(
        tracing::Level::INFO,
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting whispers");

    match run_application() {
        Ok(()) => {
            info!("Whispers exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
