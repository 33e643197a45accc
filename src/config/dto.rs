use std::net::IpAddr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub store: StoreConfig,
    pub static_dir: String,
    pub index_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub disable_proxy: bool,
}
