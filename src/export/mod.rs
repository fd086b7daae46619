pub mod excel;

use crate::error::Result;
use prospect_report_common::Report;
use std::path::{Path, PathBuf};

/// 出力先パスを決定（ディレクトリ指定なら既定ファイル名を付ける）
pub fn output_path(output: &Path, default_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(default_name)
    } else {
        output.to_path_buf()
    }
}

pub fn export_report(report: &Report, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    excel::generate_excel(report, output)
}
