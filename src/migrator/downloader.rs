use std::time::Duration;

use anyhow::Result;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, instrument};

use crate::config::Config;

pub struct Downloader {
    client: Client,
    user_agent: String,
}

impl Downloader {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| ua_generator::ua::spoof_ua().to_owned());
        Ok(Self { client, user_agent })
    }

    /// 以浏览器 UA 拉取图片字节,超时或 HTTP 错误都作为普通错误返回
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("下载失败 {}: {}", url, e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("请求失败 {}: {}", url, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| anyhow::anyhow!("读取响应失败 {}: {}", url, e))?;

        debug!("已获取 {} 字节", bytes.len());
        Ok(bytes)
    }
}
