//! 企業分類（取得結果からの行生成）
//!
//! ネットワーク取得はCLI側で行い、ここでは取得結果 + 静的情報から
//! 1社分の DerivedRow を組み立てる。

use crate::matcher::match_keywords;
use crate::types::{
    yes_no, CompanyRecord, DerivedRow, KeywordGroup, KeywordPresence, KeywordViewRow,
    ScrapeOutcome, ScrapedViewRow, VerticalInfo,
};

/// 取得結果から1社分の派生行を生成
///
/// 失敗時は照合を行わず全グループ false とする。
pub fn classify_outcome(
    record: &CompanyRecord,
    outcome: ScrapeOutcome,
    groups: &[KeywordGroup],
    verticals: &VerticalInfo,
) -> DerivedRow {
    let (presence, scrape_error) = match outcome {
        ScrapeOutcome::Success(text) => (match_keywords(&text, groups), None),
        ScrapeOutcome::Failure(reason) => (KeywordPresence::all_false(groups), Some(reason)),
    };

    build_row(record, &presence, verticals, scrape_error)
}

/// 同一の KeywordPresence から2つのビューを生成
fn build_row(
    record: &CompanyRecord,
    presence: &KeywordPresence,
    verticals: &VerticalInfo,
    scrape_error: Option<String>,
) -> DerivedRow {
    let keyword_view = KeywordViewRow {
        company_name: record.name.clone(),
        url: record.url.clone(),
        category: record.category.clone(),
        manufacturer: yes_no(record.manufacturer).to_string(),
        brand: yes_no(record.brand).to_string(),
        distributor: yes_no(record.distributor).to_string(),
        category_explanation: verticals.explain(&record.category).to_string(),
        keywords: presence
            .iter()
            .map(|(name, present)| (name.to_string(), yes_no(present).to_string()))
            .collect(),
        summary: presence.present_groups().join(", "),
    };

    let scraped_view = ScrapedViewRow {
        company_name: record.name.clone(),
        website: record.url.clone(),
        keywords: presence
            .iter()
            .map(|(name, present)| (name.to_string(), present))
            .collect(),
    };

    DerivedRow {
        keyword_view,
        scraped_view,
        scrape_error,
    }
}
