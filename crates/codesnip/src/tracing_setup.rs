//! Tracing subscriber setup for the CLI.

use std::sync::Once;

/// Environment variable that switches log output to an indented span tree.
pub const LOG_TREE_ENV_VAR: &str = "CODESNIP_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Does nothing unless `RUST_LOG` is set.
///
/// Logs go to stderr so `--tokens` output stays clean. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os(LOG_TREE_ENV_VAR).is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
