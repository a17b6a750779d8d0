use anyhow::Context as _;
use std::net::SocketAddr;

pub mod server;
mod snapshot;

pub const SWITCHER_PLATFORM_ENV: &str = "SWITCHER_PLATFORM";
pub const SWITCHER_SERVER_ADDR_ENV: &str = "SWITCHER_SERVER_ADDR";
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8422";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Hosted mode with many projects per organization; self-hosted installs have one.
    pub platform: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { platform: true }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let mut out = Self::default();

        if let Ok(value) = std::env::var(SWITCHER_PLATFORM_ENV) {
            out.platform = parse_flag(&value);
        }

        out
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn server_addr_from_env() -> anyhow::Result<SocketAddr> {
    std::env::var(SWITCHER_SERVER_ADDR_ENV)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_owned())
        .parse()
        .with_context(|| format!("invalid {SWITCHER_SERVER_ADDR_ENV}"))
}

/// A switcher server bound to `addr`; dropping it stops serving.
pub struct StartedServer {
    pub addr: SocketAddr,
    /// Platform mode the server falls back to when a request does not set one.
    pub platform: bool,
    handle: Option<tokio::task::JoinHandle<anyhow::Result<()>>>,
}

impl StartedServer {
    pub async fn wait(mut self) -> anyhow::Result<()> {
        let addr = self.addr;
        let handle = self
            .handle
            .take()
            .with_context(|| format!("switcher server on {addr} already awaited"))?;

        handle
            .await
            .with_context(|| format!("switcher server on {addr} panicked"))??;
        Ok(())
    }
}

impl Drop for StartedServer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

pub async fn start_server(addr: SocketAddr) -> anyhow::Result<StartedServer> {
    start_server_with_config(addr, ServerConfig::from_env()).await
}

pub async fn start_server_with_config(
    addr: SocketAddr,
    config: ServerConfig,
) -> anyhow::Result<StartedServer> {
    let platform = config.platform;
    let app = server::router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let actual = listener.local_addr().context("failed to read local addr")?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .with_context(|| format!("switcher server on {actual} failed"))
    });

    Ok(StartedServer {
        addr: actual,
        platform,
        handle: Some(handle),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_env<T>(key: &str, value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = lock_env();
        let prev = std::env::var_os(key);
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }

        let out = f();

        unsafe {
            match prev {
                Some(prev) => std::env::set_var(key, prev),
                None => std::env::remove_var(key),
            }
        }
        out
    }

    #[test]
    fn platform_defaults_to_enabled() {
        let config = with_env(SWITCHER_PLATFORM_ENV, None, ServerConfig::from_env);
        assert!(config.platform);
    }

    #[test]
    fn platform_flag_parses_common_spellings() {
        for (raw, expected) in [
            ("1", true),
            (" TRUE ", true),
            ("yes", true),
            ("on", true),
            ("0", false),
            ("false", false),
            ("", false),
            ("nope", false),
        ] {
            let config = with_env(SWITCHER_PLATFORM_ENV, Some(raw), ServerConfig::from_env);
            assert_eq!(config.platform, expected, "value: {raw:?}");
        }
    }

    #[tokio::test]
    async fn start_server_reads_platform_from_env() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();

        let server = {
            let _guard = lock_env();
            let prev = std::env::var_os(SWITCHER_PLATFORM_ENV);
            unsafe {
                std::env::set_var(SWITCHER_PLATFORM_ENV, "0");
            }
            let server = start_server(addr).await;
            unsafe {
                match prev {
                    Some(prev) => std::env::set_var(SWITCHER_PLATFORM_ENV, prev),
                    None => std::env::remove_var(SWITCHER_PLATFORM_ENV),
                }
            }
            server.expect("server should start on an ephemeral port")
        };

        assert!(!server.platform);
        assert_ne!(server.addr.port(), 0);
    }

    #[test]
    fn server_addr_falls_back_to_default() {
        let addr = with_env(SWITCHER_SERVER_ADDR_ENV, None, server_addr_from_env)
            .expect("default addr should parse");
        assert_eq!(addr, DEFAULT_SERVER_ADDR.parse::<SocketAddr>().unwrap());

        let addr = with_env(SWITCHER_SERVER_ADDR_ENV, Some("  "), server_addr_from_env)
            .expect("blank addr should use default");
        assert_eq!(addr, DEFAULT_SERVER_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn server_addr_reports_invalid_values() {
        let err = with_env(
            SWITCHER_SERVER_ADDR_ENV,
            Some("not-an-addr"),
            server_addr_from_env,
        )
        .expect_err("invalid addr should error");
        assert!(
            err.to_string().contains("invalid SWITCHER_SERVER_ADDR"),
            "unexpected error: {err:?}"
        );
    }
}
