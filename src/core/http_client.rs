use std::time::Duration;

use reqwest::Client;

use crate::config::StoreConfig;

pub fn build_http_client(config: &StoreConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent("mentee-dashboard/0.1")
        .timeout(Duration::from_secs(config.timeout_secs));

    if config.disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}
