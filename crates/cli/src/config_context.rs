//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Distinguish between real and placeholder configs at compile time.
//! - Provide type-safe extraction of config for commands that need it.
//!
//! Does NOT handle:
//! - Configuration loading (done in `main()`).
//!
//! Invariants:
//! - Placeholder configs cannot be used for Grafana API connections.

/// Config handed to `dispatch`: either loaded and validated, or absent for
/// offline commands.
pub(crate) enum ConfigCommandContext {
    /// A validated config loaded from profiles/environment/CLI args.
    Real(Box<grafana_config::Config>),
    /// No connection details; only valid for offline commands such as `diff`.
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the real config, failing if this is a placeholder.
    pub(crate) fn into_real_config(self) -> anyhow::Result<grafana_config::Config> {
        match self {
            ConfigCommandContext::Real(config) => Ok(*config),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring real connection details"
                )
            }
        }
    }
}
