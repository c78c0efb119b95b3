use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CHART_LIMIT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub chart_limit: usize,
}

impl ApiConfig {
    /// Read `SOLACE_BIND_ADDR`, `SOLACE_LOG_FORMAT` and `SOLACE_CHART_LIMIT`.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unset variables fall back
    /// to their defaults; set but unparsable ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("SOLACE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid SOLACE_BIND_ADDR: {e}"))?;

        let log_format = match lookup("SOLACE_LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid SOLACE_LOG_FORMAT: {other} (expected \"json\" or \"pretty\")"
                ));
            }
        };

        let chart_limit = match lookup("SOLACE_CHART_LIMIT") {
            None => DEFAULT_CHART_LIMIT,
            Some(raw) => match raw.parse::<usize>() {
                Ok(limit) if limit >= 1 => limit,
                _ => {
                    return Err(eyre::eyre!(
                        "invalid SOLACE_CHART_LIMIT: {raw} (expected a positive integer)"
                    ));
                }
            },
        };

        Ok(Self {
            bind_addr,
            log_format,
            chart_limit,
        })
    }
}
