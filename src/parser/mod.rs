//! Parser Module
//!
//! ワークブックのデコード（calamine）と、シート選択・行の正規化を行うモジュール。

mod row;
mod sheets;
mod workbook;

pub use row::{normalize_row, normalize_rows};
pub use sheets::{is_weekly_sheet_name, select_sheets, select_weekly_sheets};
pub(crate) use workbook::WorkbookReader;
