//! Server configuration.
//!
//! The binary builds this from command-line arguments; tests build it directly.

use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:5173";
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
/// Shortest period the vacant-room sweeper runs at
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port number to bind to (`0` picks an ephemeral port)
    pub port: u16,
    /// Base URL of the frontend, used to build shareable room links
    pub public_url: String,
    /// How long a room may stay empty before it is reclaimed.
    /// `None` keeps rooms until the process exits.
    pub room_ttl: Option<Duration>,
    /// How often vacant rooms are swept when `room_ttl` is set.
    /// Read through [`ServerConfig::sweep_period`].
    pub sweep_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            room_ttl: None,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Sweep period, never shorter than `MIN_SWEEP_INTERVAL`
    pub fn sweep_period(&self) -> Duration {
        self.sweep_interval.max(MIN_SWEEP_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // テスト項目: デフォルト設定は 127.0.0.1:3001 で、Room の回収は無効
        // given (前提条件):
        let config = ServerConfig::default();

        // when (操作):
        let addr = config.bind_addr();

        // then (期待する結果):
        assert_eq!(addr, "127.0.0.1:3001");
        assert_eq!(config.public_url, "http://localhost:5173");
        assert_eq!(config.room_ttl, None);
    }

    #[test]
    fn test_zero_sweep_interval_is_clamped() {
        // テスト項目: 0 秒の掃除間隔は最小間隔に引き上げられる
        // given (前提条件):
        let config = ServerConfig {
            room_ttl: Some(Duration::from_secs(60)),
            sweep_interval: Duration::ZERO,
            ..ServerConfig::default()
        };

        // when (操作):
        let period = config.sweep_period();

        // then (期待する結果):
        assert_eq!(period, MIN_SWEEP_INTERVAL);
        assert!(!period.is_zero());
    }

    #[test]
    fn test_sweep_interval_above_minimum_is_kept() {
        // テスト項目: 最小間隔以上の掃除間隔はそのまま使われる
        // given (前提条件):
        let config = ServerConfig {
            sweep_interval: Duration::from_secs(30),
            ..ServerConfig::default()
        };

        // when (操作):
        let period = config.sweep_period();

        // then (期待する結果):
        assert_eq!(period, Duration::from_secs(30));
    }
}
