//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを生成してファイルに保存する

use crate::error::{ReportError, Result};
use prospect_report_common::export::excel_core::generate_excel_buffer;
use prospect_report_common::Report;
use std::path::Path;

pub fn generate_excel(report: &Report, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(report).map_err(ReportError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
