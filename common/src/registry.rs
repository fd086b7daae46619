//! 組み込みレジストリ
//!
//! 設定ファイルがない場合に使う企業・キーワード・業種の既定値。

use crate::error::{Error, Result};
use crate::types::{CompanyRecord, KeywordGroup, VerticalInfo};
use std::collections::HashSet;

/// 既定の出力ファイル名
pub const DEFAULT_OUTPUT: &str = "company_data_with_details.xlsx";

/// 一般的なブラウザのUser-Agent（既定クライアント名を拒否するサイト対策）
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

fn company(
    name: &str,
    url: &str,
    category: &str,
    manufacturer: bool,
    brand: bool,
    distributor: bool,
) -> CompanyRecord {
    CompanyRecord {
        name: name.to_string(),
        url: url.to_string(),
        category: category.to_string(),
        manufacturer,
        brand,
        distributor,
    }
}

pub fn default_companies() -> Vec<CompanyRecord> {
    vec![
        company("Nestle", "https://www.nestle.com", "F&B", false, false, false),
        company("Pfizer", "https://www.pfizer.com", "Distributor", false, false, true),
        company("Johnson & Johnson", "https://www.jnj.com", "Manufacturer", true, false, false),
        company("Unilever", "https://www.unilever.com", "F&B", false, false, false),
        company("General Mills", "https://www.generalmills.com", "Manufacturer", true, false, false),
        company("Kellogg's", "https://www.kelloggs.com", "Manufacturer", true, false, false),
    ]
}

pub fn default_keywords() -> Vec<KeywordGroup> {
    vec![
        KeywordGroup::new("Probiotics", &["probiotic", "probiotics"]),
        KeywordGroup::new("Fortification", &["fortified", "fortification"]),
        KeywordGroup::new("Gut Health", &["gut health", "digestive health"]),
        KeywordGroup::new(
            "Women's Health",
            &["women's health", "female health", "PCOD", "UTI"],
        ),
        KeywordGroup::new(
            "Cognitive Health",
            &["cognitive health", "mental wellness", "anxiety"],
        ),
    ]
}

pub fn default_verticals() -> VerticalInfo {
    [
        ("F&B", "Food & Beverages: Drinks, Milk, Cereal, Bakery products."),
        ("Bulk", "Pharma/Nutra companies that manufacture probiotic products using UBL's strains."),
        ("Formulations", "End product sold to brands that are into relevant health segments."),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// 強調表示の対象セグメントと背景色（RGB）
pub const HIGHLIGHT_SEGMENTS: &[(&str, u32)] = &[
    ("Gut Health", 0xFFCCCC),
    ("Women's Health", 0xCCFFCC),
    ("Cognitive Health", 0xCCCCFF),
];

/// Prospect列の背景色
pub const PROSPECT_FILL: u32 = 0xFFFF00;

/// 企業・キーワード定義の妥当性チェック（起動時の致命的エラー）
pub fn validate(companies: &[CompanyRecord], groups: &[KeywordGroup]) -> Result<()> {
    for (i, c) in companies.iter().enumerate() {
        if c.name.trim().is_empty() {
            return Err(Error::Config(format!("companies[{}]: name が空です", i)));
        }
        if c.url.trim().is_empty() {
            return Err(Error::Config(format!("{}: url が空です", c.name)));
        }
    }

    let mut seen = HashSet::new();
    for g in groups {
        if g.name.trim().is_empty() {
            return Err(Error::Config("キーワードグループ名が空です".into()));
        }
        if !seen.insert(g.name.as_str()) {
            return Err(Error::Config(format!("キーワードグループ名が重複: {}", g.name)));
        }
        if g.synonyms.is_empty() || g.synonyms.iter().any(|s| s.is_empty()) {
            return Err(Error::Config(format!("{}: 空の表記があります", g.name)));
        }
    }

    Ok(())
}
