//! 企業サイト取得
//!
//! 1社1ページ・1回のみ取得する（リトライなし）。失敗はすべて
//! ScrapeOutcome::Failure に変換し、呼び出し側へエラーを返さない。

mod html;

pub use html::html_to_text;

use prospect_report_common::ScrapeOutcome;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// 取得失敗の種別
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("タイムアウト ({0}秒)")]
    Timeout(u64),

    #[error("接続エラー: {0}")]
    Connect(String),

    #[error("HTTPステータス {0}")]
    Status(u16),

    #[error("リクエストエラー: {0}")]
    Request(String),

    #[error("レスポンス読み込みエラー: {0}")]
    Body(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    Client(String),
}

/// サイト取得クライアント（全社で共有）
#[derive(Debug, Clone)]
pub struct SiteFetcher {
    client: Client,
    timeout_seconds: u64,
}

impl SiteFetcher {
    pub fn new(timeout_seconds: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            timeout_seconds,
        })
    }

    /// URLを取得して正規化テキストを返す
    pub async fn fetch(&self, url: &str) -> ScrapeOutcome {
        match self.fetch_text(url).await {
            Ok(text) => ScrapeOutcome::Success(text),
            Err(e) => {
                warn!(url = %url, "Error scraping {}: {}", url, e);
                ScrapeOutcome::Failure(e.to_string())
            }
        }
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_seconds)
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        let text = html_to_text(&body);
        debug!("Fetched {} chars from {}", text.len(), url);
        Ok(text)
    }

    fn classify(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout_seconds)
        } else if e.is_connect() {
            FetchError::Connect(error_chain(&e))
        } else {
            FetchError::Request(error_chain(&e))
        }
    }
}

/// DNS失敗などは source 側に詳細があるため連結して表示
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
