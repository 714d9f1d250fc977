pub mod config;

use std::{env, net::SocketAddr};

pub use config::{AppConfig, ConfigError, Environment};

/// Address used when `APP_BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Loads environment variables from `.env` when available.
///
/// A missing file is not an error.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

/// Resolves the HTTP listen address from `APP_BIND_ADDR`, falling back to
/// [`DEFAULT_BIND_ADDR`].
pub fn server_bind_address() -> Result<SocketAddr, std::net::AddrParseError> {
    env::var("APP_BIND_ADDR")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .as_deref()
        .unwrap_or(DEFAULT_BIND_ADDR)
        .trim()
        .parse()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{LazyLock, Mutex};

    /// Serialises tests that touch process environment variables.
    pub static ENV_GUARD: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ENV_GUARD;

    #[test]
    fn falls_back_to_default_address() {
        let _lock = ENV_GUARD.lock().expect("env guard poisoned");
        env::remove_var("APP_BIND_ADDR");
        let addr = server_bind_address().expect("default address is valid");
        assert_eq!(addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn blank_value_uses_default_address() {
        let _lock = ENV_GUARD.lock().expect("env guard poisoned");
        env::set_var("APP_BIND_ADDR", "   ");
        let addr = server_bind_address().expect("default address is valid");
        assert_eq!(addr.port(), 8080);
        env::remove_var("APP_BIND_ADDR");
    }

    #[test]
    fn reads_address_from_env() {
        let _lock = ENV_GUARD.lock().expect("env guard poisoned");
        env::set_var("APP_BIND_ADDR", "127.0.0.1:3001");
        let addr = server_bind_address().expect("custom address should parse");
        assert_eq!(addr.to_string(), "127.0.0.1:3001");
        env::remove_var("APP_BIND_ADDR");
    }
}
