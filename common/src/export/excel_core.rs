//! Excel生成（共通ライブラリ）
//!
//! Report の2つの表をシートに書き出し、注釈指示を
//! 数式列・条件付き書式として反映する。

use crate::report::{Cell, DerivedColumn, HighlightRule, Report, Table};
use rust_xlsxwriter::utility::column_number_to_name;
use rust_xlsxwriter::{
    Color, ConditionalFormatText, ConditionalFormatTextRule, Format, FormatBorder, Formula,
    Workbook, Worksheet,
};

/// Excelをバッファに生成
pub fn generate_excel_buffer(report: &Report) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    // キーワードシート
    {
        let table = &report.keyword_table;
        let worksheet = workbook.add_worksheet();
        write_table(worksheet, table, &header_format)?;

        let mut next_col = table.headers.len();
        for column in &report.directives.derived_columns {
            write_derived_column(worksheet, table, column, next_col, &header_format)?;
            next_col += 1;
        }

        for rule in &report.directives.highlights {
            add_highlight(worksheet, table, rule)?;
        }

        worksheet.autofit();
    }

    // スクレイプシート
    {
        let worksheet = workbook.add_worksheet();
        write_table(worksheet, &report.scraped_table, &header_format)?;
        worksheet.autofit();
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

fn write_table(worksheet: &mut Worksheet, table: &Table, header_format: &Format) -> Result<(), String> {
    worksheet.set_name(&table.name)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, header_format)
            .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
    }

    for (i, cells) in table.rows.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            let written = match cell {
                Cell::Text(s) => worksheet.write_string(row, col, s),
                Cell::Bool(b) => worksheet.write_boolean(row, col, *b),
            };
            written.map_err(|e| format!("セル書き込みエラー: {}", e))?;
        }
    }

    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    Ok(())
}

/// 派生列を =IF(...) 数式として書き出す（評価値もキャッシュ）
fn write_derived_column(
    worksheet: &mut Worksheet,
    table: &Table,
    column: &DerivedColumn,
    col: usize,
    header_format: &Format,
) -> Result<(), String> {
    let col = col as u16;
    worksheet.write_string_with_format(0, col, &column.header, header_format)
        .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;

    let rule = &column.rule;
    let Some(source_col) = table.column_index(&rule.source_column) else {
        return Ok(());
    };
    let source_letter = column_number_to_name(source_col as u16);

    let mut cell_format = Format::new();
    if let Some(fill) = column.fill {
        cell_format = cell_format.set_background_color(Color::RGB(fill));
    }

    for i in 0..table.rows.len() {
        let excel_row = i as u32 + 2;
        let expression = format!(
            "=IF({}{}=\"{}\",\"{}\",\"{}\")",
            source_letter, excel_row, rule.equals, rule.then, rule.otherwise
        );
        let mut formula = Formula::new(expression);
        if let Some(value) = rule.evaluate(table, i) {
            formula = formula.set_result(value);
        }
        worksheet.write_formula_with_format(i as u32 + 1, col, formula, &cell_format)
            .map_err(|e| format!("数式書き込みエラー: {}", e))?;
    }

    Ok(())
}

/// 部分一致の条件付き書式（対象列なし・0行なら何もしない）
fn add_highlight(worksheet: &mut Worksheet, table: &Table, rule: &HighlightRule) -> Result<(), String> {
    let Some(col) = table.column_index(&rule.column) else {
        return Ok(());
    };
    if table.rows.is_empty() {
        return Ok(());
    }

    let format = Format::new().set_background_color(Color::RGB(rule.color));
    let conditional = ConditionalFormatText::new()
        .set_rule(ConditionalFormatTextRule::Contains(rule.contains.clone()))
        .set_format(format);

    let col = col as u16;
    worksheet.add_conditional_format(1, col, table.rows.len() as u32, col, &conditional)
        .map_err(|e| format!("条件付き書式エラー: {}", e))?;

    Ok(())
}
