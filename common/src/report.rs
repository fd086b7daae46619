//! レポート組み立て
//!
//! 全社分の DerivedRow から2つの表と、出力側に渡す注釈指示
//! （派生列・条件付き書式）を生成する。I/Oは行わない。

use crate::registry::{HIGHLIGHT_SEGMENTS, PROSPECT_FILL};
use crate::types::DerivedRow;

pub const KEYWORD_SHEET: &str = "Company Keywords";
pub const SCRAPED_SHEET: &str = "Scraped Data";
pub const SUMMARY_COLUMN: &str = "Keyword Summary";
pub const MANUFACTURER_COLUMN: &str = "Manufacturer";

/// セル値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Bool(bool),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Bool(_) => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// シート1枚分の表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn cell(&self, row: usize, header: &str) -> Option<&Cell> {
        let col = self.column_index(header)?;
        self.rows.get(row)?.get(col)
    }
}

/// 行ごとの条件値: source_column == equals なら then、それ以外は otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalValue {
    pub source_column: String,
    pub equals: String,
    pub then: String,
    pub otherwise: String,
}

impl ConditionalValue {
    /// 表の1行に対して評価（列がなければ None）
    pub fn evaluate<'a>(&'a self, table: &Table, row: usize) -> Option<&'a str> {
        let cell = table.cell(row, &self.source_column)?;
        let matched = cell.as_text() == Some(self.equals.as_str());
        Some(if matched { &self.then } else { &self.otherwise })
    }
}

/// 表の右端に追加する派生列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedColumn {
    pub header: String,
    pub rule: ConditionalValue,
    /// 背景色（RGB）
    pub fill: Option<u32>,
}

/// 部分一致による強調表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRule {
    pub column: String,
    pub contains: String,
    /// 背景色（RGB）
    pub color: u32,
}

impl HighlightRule {
    pub fn applies_to(&self, value: &str) -> bool {
        value.contains(&self.contains)
    }
}

/// 出力側への注釈指示（キーワードシート対象）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    pub derived_columns: Vec<DerivedColumn>,
    pub highlights: Vec<HighlightRule>,
}

/// 組み立て結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub keyword_table: Table,
    pub scraped_table: Table,
    pub directives: Directives,
}

/// 実行サマリ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub companies: usize,
    pub fetch_failures: usize,
    pub prospects: usize,
}

impl ReportSummary {
    pub fn from_rows(rows: &[DerivedRow]) -> Self {
        Self {
            companies: rows.len(),
            fetch_failures: rows.iter().filter(|r| r.scrape_error.is_some()).count(),
            prospects: rows.iter().filter(|r| r.is_prospect()).count(),
        }
    }
}

/// 派生行から表と注釈指示を生成（入力順を保持）
pub fn assemble(rows: &[DerivedRow]) -> Report {
    // グループ列は先頭行から取る（全行同じグループ構成）
    let group_names: Vec<String> = rows
        .first()
        .map(|r| r.scraped_view.keywords.iter().map(|(n, _)| n.clone()).collect())
        .unwrap_or_default();

    Report {
        keyword_table: keyword_table(rows, &group_names),
        scraped_table: scraped_table(rows, &group_names),
        directives: directives(),
    }
}

/// グループ列名を指定して組み立て（0件でもヘッダを揃える）
pub fn assemble_with_groups(rows: &[DerivedRow], group_names: &[String]) -> Report {
    Report {
        keyword_table: keyword_table(rows, group_names),
        scraped_table: scraped_table(rows, group_names),
        directives: directives(),
    }
}

fn keyword_table(rows: &[DerivedRow], group_names: &[String]) -> Table {
    let mut headers: Vec<String> = [
        "Company Name",
        "URL",
        "Category",
        MANUFACTURER_COLUMN,
        "Brand",
        "Distributor",
        "Category Explanation",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    headers.extend(group_names.iter().cloned());
    headers.push(SUMMARY_COLUMN.to_string());

    let rows = rows
        .iter()
        .map(|r| {
            let kv = &r.keyword_view;
            let mut cells = vec![
                Cell::Text(kv.company_name.clone()),
                Cell::Text(kv.url.clone()),
                Cell::Text(kv.category.clone()),
                Cell::Text(kv.manufacturer.clone()),
                Cell::Text(kv.brand.clone()),
                Cell::Text(kv.distributor.clone()),
                Cell::Text(kv.category_explanation.clone()),
            ];
            cells.extend(
                kv.keywords
                    .iter()
                    .map(|(_, value)| Cell::Text(value.clone())),
            );
            cells.push(Cell::Text(kv.summary.clone()));
            cells
        })
        .collect();

    Table {
        name: KEYWORD_SHEET.to_string(),
        headers,
        rows,
    }
}

fn scraped_table(rows: &[DerivedRow], group_names: &[String]) -> Table {
    let mut headers = vec!["Company Name".to_string(), "Website".to_string()];
    headers.extend(group_names.iter().cloned());

    let rows = rows
        .iter()
        .map(|r| {
            let sv = &r.scraped_view;
            let mut cells = vec![
                Cell::Text(sv.company_name.clone()),
                Cell::Text(sv.website.clone()),
            ];
            cells.extend(sv.keywords.iter().map(|(_, present)| Cell::Bool(*present)));
            cells
        })
        .collect();

    Table {
        name: SCRAPED_SHEET.to_string(),
        headers,
        rows,
    }
}

fn directives() -> Directives {
    let prospect = DerivedColumn {
        header: "Prospect".to_string(),
        rule: ConditionalValue {
            source_column: MANUFACTURER_COLUMN.to_string(),
            equals: "Yes".to_string(),
            then: "Prospect".to_string(),
            otherwise: "Not Relevant".to_string(),
        },
        fill: Some(PROSPECT_FILL),
    };

    let highlights = HIGHLIGHT_SEGMENTS
        .iter()
        .map(|(segment, color)| HighlightRule {
            column: SUMMARY_COLUMN.to_string(),
            contains: segment.to_string(),
            color: *color,
        })
        .collect();

    Directives {
        derived_columns: vec![prospect],
        highlights,
    }
}
