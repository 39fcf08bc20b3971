//! Summary sheet and workbook serialization.

use chrono::{DateTime, Local};
use pocket_core::InsightRecord;
use pocket_core::timestamp::korean_datetime;
use rust_xlsxwriter::Workbook;

use crate::cell::{Cell, Rows};
use crate::error::ExportError;
use crate::row;

pub const SUMMARY_SHEET: &str = "Summary";
pub const SUMMARY_TITLE: &str = "LANEIGE Amazon 데이터 분석 자료";

/// Name of the sheet for the `index`-th (zero-based) exported record.
#[must_use]
pub fn card_sheet_name(index: usize) -> String {
    format!("Card_{}", index + 1)
}

/// Overview of the export: when, how many, and one line per record.
#[must_use]
pub fn summary_rows(records: &[InsightRecord], generated_at: &DateTime<Local>) -> Rows {
    let mut rows = vec![
        row![SUMMARY_TITLE],
        row!["Generated:", korean_datetime(generated_at)],
        row!["Total Cards:", records.len()],
        row![""],
        row!["Page", "Card Type", "Title", "Added Time"],
    ];
    rows.extend(records.iter().map(|r| {
        row![
            r.page.label(),
            r.record_type.label(),
            r.title.as_str(),
            korean_datetime(&r.timestamp.with_timezone(&Local)),
        ]
    }));
    rows
}

/// Serialize named sheets, in order, to XLSX bytes.
///
/// # Errors
///
/// Returns [`ExportError::Workbook`] if a sheet name is rejected or a cell
/// cannot be written.
pub fn to_xlsx(sheets: &[(String, Rows)]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        for (r, cells) in rows.iter().enumerate() {
            let r = u32::try_from(r).map_err(|_| {
                rust_xlsxwriter::XlsxError::RowColumnLimitError
            })?;
            for (c, cell) in cells.iter().enumerate() {
                let c = u16::try_from(c).map_err(|_| {
                    rust_xlsxwriter::XlsxError::RowColumnLimitError
                })?;
                match cell {
                    Cell::Empty => {}
                    Cell::Text(text) if text.is_empty() => {}
                    Cell::Text(text) => {
                        worksheet.write_string(r, c, text)?;
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                }
            }
        }
    }
    Ok(workbook.save_to_buffer()?)
}
