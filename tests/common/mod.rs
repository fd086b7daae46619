//! テスト用モックサーバ

#![allow(dead_code)]

use prospect_report_common::CompanyRecord;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACME_HTML: &str = "<html><head><title>Acme Foods</title></head>\
<body><h1>Our Probiotic Range</h1><p>Backed by science for Gut Health.</p></body></html>";

/// 指定パスでHTMLを返す
pub async fn mount_page(server: &MockServer, url_path: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// 指定パスで遅延レスポンス（タイムアウト検証用）
pub async fn mount_delayed(server: &MockServer, url_path: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>probiotic</p>")
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// 指定パスでエラーステータス
pub async fn mount_status(server: &MockServer, url_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_string("<p>probiotic</p>"))
        .mount(server)
        .await;
}

/// 接続を受け付けないURL
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind failed");
    let port = listener.local_addr().expect("no local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

pub fn company(name: &str, url: String, category: &str, manufacturer: bool) -> CompanyRecord {
    CompanyRecord {
        name: name.to_string(),
        url,
        category: category.to_string(),
        manufacturer,
        brand: false,
        distributor: !manufacturer,
    }
}

/// tracing の出力をメモリに集めるライタ
#[derive(Clone, Default)]
pub struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl LogBuffer {
    /// このスレッドで有効な subscriber を設定（guard を保持している間）
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
