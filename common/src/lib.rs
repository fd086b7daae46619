//! Prospect Report Common Library
//!
//! 取得 → 正規化 → キーワード判定 → 表組みのうち、I/Oを伴わない部分

pub mod types;
pub mod error;
pub mod matcher;
pub mod classifier;
pub mod report;
pub mod registry;
pub mod export;

pub use types::{
    yes_no, CompanyRecord, DerivedRow, KeywordGroup, KeywordPresence, KeywordViewRow,
    ScrapeOutcome, ScrapedViewRow, VerticalInfo,
};
pub use error::{Error, Result};
pub use matcher::match_keywords;
pub use classifier::classify_outcome;
pub use report::{assemble, assemble_with_groups, Cell, Directives, Report, ReportSummary, Table};
