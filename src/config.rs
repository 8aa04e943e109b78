use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(short, long, env = "FSBROWSE_BIND", value_name = "ADDR", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Directory listed when a request names no path.
    #[arg(short, long, env = "FSBROWSE_ROOT", value_name = "DIR")]
    pub root: Option<String>,

    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long, env = "FSBROWSE_LOG", value_name = "FILTER", default_value = "info")]
    pub log: String,

    /// Permit deleting under system directories such as /usr or C:\Windows.
    #[arg(long, env = "FSBROWSE_ALLOW_PROTECTED_DELETE")]
    pub allow_protected_delete: bool,
}

impl Config {
    pub fn default_root(&self) -> String {
        self.root.clone().unwrap_or_else(platform_root)
    }
}

/// `C:\` on Windows, `/` elsewhere.
pub fn platform_root() -> String {
    if cfg!(windows) {
        "C:\\".to_string()
    } else {
        "/".to_string()
    }
}
