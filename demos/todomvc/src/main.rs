//! Scripted driver for the TodoMVC example.
//!
//! Reads a script (see [`todomvc::script`]) from the file named by the first
//! argument, or from stdin, and plays it against a fresh application.
//!
//! ```text
//! $ printf 'input .new-todo Buy milk\nkey .new-todo Enter\nrender\n' | todomvc
//! ```

use anyhow::Context;
use std::io::Read;
use todomvc::{program, script, Config, TodoEnvironment};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // Logging first, so configuration warnings are reported
    let (filter, filter_error) =
        match tracing_subscriber::EnvFilter::try_new(Config::log_filter_from_env()) {
            Ok(filter) => (filter, None),
            Err(e) => (
                tracing_subscriber::EnvFilter::new(todomvc::config::DEFAULT_LOG_FILTER),
                Some(e),
            ),
        };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    if let Some(e) = filter_error {
        tracing::warn!(error = %e, "Invalid TODOMVC_LOG; using default filter");
    }

    let config = Config::from_env();

    tracing::info!(
        confirm = %config.keys.confirm,
        cancel = %config.keys.cancel,
        "Starting TodoMVC"
    );

    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read script {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };

    let commands = script::parse_script(&source).context("invalid script")?;

    let mut app = program(TodoEnvironment::new(config.keys));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    script::run(&mut app, &commands, &mut out).context("script failed")?;

    let state = app.into_state();
    tracing::info!(
        todos = state.todos.len(),
        completed = state.todos.completed_todos().count(),
        "Script complete"
    );
    Ok(())
}
