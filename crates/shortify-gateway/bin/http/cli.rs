use clap::{Parser, ValueEnum};
use shortify_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use url::Url;

pub const LISTEN_ADDR_ENV: &str = "SHORTIFY_LISTEN_ADDR";
pub const STORE_BACKEND_ENV: &str = "SHORTIFY_STORE";
pub const STORE_URL_ENV: &str = "UPSTASH_REDIS_REST_URL";
pub const STORE_TOKEN_ENV: &str = "UPSTASH_REDIS_REST_TOKEN";
pub const REDIS_URL_ENV: &str = "SHORTIFY_REDIS_URL";
pub const PUBLIC_BASE_URL_ENV: &str = "SHORTIFY_PUBLIC_BASE_URL";
pub const LOG_FORMAT_ENV: &str = "SHORTIFY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackendArg {
    #[value(name = "rest")]
    Rest,
    #[value(name = "redis")]
    Redis,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StoreBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackendArg::Rest => write!(f, "rest"),
            StoreBackendArg::Redis => write!(f, "redis"),
            StoreBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shortify-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORE_BACKEND_ENV,
        value_enum,
        default_value_t = StoreBackendArg::Rest
    )]
    pub store: StoreBackendArg,

    #[arg(long, env = STORE_URL_ENV, default_value = "")]
    pub store_url: String,

    #[arg(long, env = STORE_TOKEN_ENV, default_value = "", hide_env_values = true)]
    pub store_token: String,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("store", "redis"))]
    pub redis_url: Option<String>,

    /// Origin for generated short links and the fallback redirect target.
    /// Any path is ignored: slugs are always served at the root.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, value_parser = parse_public_base_url)]
    pub public_base_url: Option<Url>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

fn parse_public_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err("expected an absolute http(s) url".to_string()),
    }
}
