//! # Notes Server
//!
//! The binary is intentionally thin: this file starts the async runtime,
//! invokes `cli::run()` and handles process termination. Everything the
//! server does with notes goes through the `notesapp` library.
//!
//! ## Workspace Structure
//!
//! - `crates/notesapp/` — Core library: model, validation, store, backends
//! - `crates/notes/` — This binary: CLI, configuration loading, HTTP server
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - config resolution + subcommand dispatch (commands.rs)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (src/server/)                                   │
//! │  - routes, CORS, request tracing (mod.rs)                   │
//! │  - request parsing + response shaping (handlers.rs)         │
//! │  - error → status code mapping (error.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (notesapp::store)                                    │
//! │  - validation, ids, timestamps, persistence                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Store**: unit and integration tests in `notesapp`.
//! - **HTTP**: handler tests drive the router in-process with
//!   `tower::ServiceExt::oneshot` against an in-memory store.
//! - **CLI**: `tests/cli_e2e.rs` runs the built binary with `assert_cmd`.

mod cli;
mod logging;
mod server;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
