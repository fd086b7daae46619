//! 取得 → 判定 → 表組みの実行
//!
//! 各社の処理は独立しているため並列実行してよい。結果は常に入力順で返す。

use crate::fetcher::SiteFetcher;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use prospect_report_common::{
    assemble_with_groups, classify_outcome, CompanyRecord, DerivedRow, KeywordGroup, Report,
    VerticalInfo,
};
use tracing::info;

/// 1社分を取得して分類
pub async fn classify(
    fetcher: &SiteFetcher,
    record: &CompanyRecord,
    groups: &[KeywordGroup],
    verticals: &VerticalInfo,
) -> DerivedRow {
    let outcome = fetcher.fetch(&record.url).await;
    classify_outcome(record, outcome, groups, verticals)
}

/// 全社を分類（同時実行数 concurrency、入力順を保持）
pub async fn classify_all(
    fetcher: &SiteFetcher,
    companies: &[CompanyRecord],
    groups: &[KeywordGroup],
    verticals: &VerticalInfo,
    concurrency: usize,
    progress: &ProgressBar,
) -> Vec<DerivedRow> {
    let rows: Vec<DerivedRow> = stream::iter(companies)
        .map(|record| async move {
            let row = classify(fetcher, record, groups, verticals).await;
            progress.inc(1);
            row
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let failures = rows.iter().filter(|r| r.scrape_error.is_some()).count();
    info!("classified {} companies ({} fetch failures)", rows.len(), failures);

    rows
}

/// 分類結果からレポートを組み立て
pub fn build_report(rows: &[DerivedRow], groups: &[KeywordGroup]) -> Report {
    let names: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();
    assemble_with_groups(rows, &names)
}

/// 取得用プログレスバー
pub fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("  {bar:30} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    bar
}
