//! パイプラインの型定義
//!
//! CLIとテストで共有される型:
//! - CompanyRecord / KeywordGroup / VerticalInfo: 呼び出し側が渡す静的設定
//! - ScrapeOutcome: サイト取得の結果（成功時は正規化済みテキスト）
//! - KeywordPresence: グループ名 → 有無
//! - DerivedRow: 1社分の派生結果（キーワードビュー + スクレイプビュー）

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 企業レコード（実行中は不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub url: String,
    pub category: String,

    #[serde(default)]
    pub manufacturer: bool,

    #[serde(default)]
    pub brand: bool,

    #[serde(default)]
    pub distributor: bool,
}

/// キーワードグループ: 名前 + 表記ゆれ（順序付き）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub name: String,
    pub synonyms: Vec<String>,
}

impl KeywordGroup {
    pub fn new(name: &str, synonyms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// カテゴリ説明の参照テーブル
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerticalInfo(BTreeMap<String, String>);

impl VerticalInfo {
    /// 未登録カテゴリの説明
    pub const FALLBACK: &'static str = "No explanation available.";

    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    /// カテゴリ説明を取得（未登録ならフォールバック文字列）
    pub fn explain(&self, category: &str) -> &str {
        self.0
            .get(category)
            .map(String::as_str)
            .unwrap_or(Self::FALLBACK)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for VerticalInfo {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// サイト取得の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// 正規化済み（タグ除去・小文字化）テキスト
    Success(String),
    /// 失敗理由
    Failure(String),
}

impl ScrapeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Success(_))
    }
}

/// グループごとのキーワード有無（グループ定義順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordPresence {
    entries: Vec<(String, bool)>,
}

impl KeywordPresence {
    /// 全グループを false にした有無表（取得失敗時）
    pub fn all_false(groups: &[KeywordGroup]) -> Self {
        Self {
            entries: groups.iter().map(|g| (g.name.clone(), false)).collect(),
        }
    }

    pub(crate) fn push(&mut self, name: String, present: bool) {
        self.entries.push((name, present));
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, present)| *present)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), *p))
    }

    /// 該当したグループ名（定義順）
    pub fn present_groups(&self) -> Vec<&str> {
        self.iter().filter(|(_, p)| *p).map(|(n, _)| n).collect()
    }

    pub fn any(&self) -> bool {
        self.entries.iter().any(|(_, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// bool → "Yes"/"No"
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// キーワードビューの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordViewRow {
    pub company_name: String,
    pub url: String,
    pub category: String,
    pub manufacturer: String,
    pub brand: String,
    pub distributor: String,
    pub category_explanation: String,
    /// (グループ名, "Yes"/"No")
    pub keywords: Vec<(String, String)>,
    /// 該当グループ名をカンマ区切り
    pub summary: String,
}

/// スクレイプビューの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedViewRow {
    pub company_name: String,
    pub website: String,
    pub keywords: Vec<(String, bool)>,
}

/// 1社分の派生結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRow {
    pub keyword_view: KeywordViewRow,
    pub scraped_view: ScrapedViewRow,
    /// 取得失敗時の理由
    pub scrape_error: Option<String>,
}

impl DerivedRow {
    pub fn is_prospect(&self) -> bool {
        self.keyword_view.manufacturer == "Yes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_info_explain_and_fallback() {
        let verticals: VerticalInfo = [("Bulk".to_string(), "Pharma/Nutra".to_string())]
            .into_iter()
            .collect();

        assert_eq!(verticals.explain("Bulk"), "Pharma/Nutra");
        assert_eq!(verticals.explain("UnknownVertical"), VerticalInfo::FALLBACK);
        // 大文字小文字は区別する
        assert_eq!(verticals.explain("bulk"), VerticalInfo::FALLBACK);
    }

    #[test]
    fn test_all_false_keeps_group_order() {
        let groups = vec![
            KeywordGroup::new("Probiotics", &["probiotic"]),
            KeywordGroup::new("Gut Health", &["gut health"]),
        ];
        let presence = KeywordPresence::all_false(&groups);

        let names: Vec<&str> = presence.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Probiotics", "Gut Health"]);
        assert!(!presence.any());
        assert_eq!(presence.get("Gut Health"), Some(false));
        assert_eq!(presence.get("Unknown"), None);
    }

    #[test]
    fn test_company_record_role_flags_default_false() {
        let json = r#"{"name": "Acme", "url": "https://acme.test", "category": "Bulk"}"#;
        let record: CompanyRecord = serde_json::from_str(json).unwrap();
        assert!(!record.manufacturer);
        assert!(!record.brand);
        assert!(!record.distributor);
    }

    #[test]
    fn test_company_record_missing_url_is_error() {
        let json = r#"{"name": "Acme", "category": "Bulk"}"#;
        assert!(serde_json::from_str::<CompanyRecord>(json).is_err());
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
