use std::time::Duration;

use business::application::cart::sessions::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_TTL};

use super::env::{Vars, parse_or, process_env};

/// Limits of the in-memory cart session registry.
#[derive(Debug, Clone)]
pub struct CartConfig {
    pub max_sessions: usize,
    pub session_idle_ttl: Duration,
}

impl CartConfig {
    /// Environment variables:
    /// - CART_MAX_SESSIONS: Live carts kept in memory (default: 10000)
    /// - CART_SESSION_IDLE_SECS: Idle time before a cart is unloaded (default: 1800)
    pub fn from_env() -> Self {
        Self::from_vars(&process_env)
    }

    pub fn from_vars(vars: Vars) -> Self {
        let idle_secs = parse_or(
            vars,
            "CART_SESSION_IDLE_SECS",
            DEFAULT_SESSION_IDLE_TTL.as_secs(),
        );
        Self {
            max_sessions: parse_or(vars, "CART_MAX_SESSIONS", DEFAULT_MAX_SESSIONS),
            session_idle_ttl: Duration::from_secs(idle_secs),
        }
    }
}
