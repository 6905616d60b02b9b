//! Tracing subscriber setup.
//!
//! The form owns the terminal, so logs go to stderr and stay off unless
//! `RUST_LOG` asks for them (e.g. `RUST_LOG=two_value_form=debug 2>form.log`).

use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
