//! prospect-report
//!
//! 企業サイトを1ページずつ取得し、健康・栄養系キーワードの有無を判定して
//! 2シート構成のExcelレポートを生成する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod pipeline;
