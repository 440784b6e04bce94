//! Workbook Decoding
//!
//! calamineを使用してXLS/XLSXファイルを`Workbook`（シート名 → グリッド）に変換する。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::io::{Cursor, Read};

use crate::error::TrainingTableError;
use crate::security::SecurityConfig;
use crate::types::{CellValue, Grid, Workbook};

/// ワークブックリーダー
///
/// calamineのラッパーとして、アップロードされたファイルを読み込みます。
/// ファイル全体（サイズ上限まで）を一度だけメモリに読み込み、以降の処理はすべてメモリ上で行います。
pub(crate) struct WorkbookReader {
    /// calamineのワークブック（XLSまたはXLSX）
    sheets: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookReader {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - ファイルを読み込むためのリーダー
    /// * `security` - 入力サイズの制限
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookReader)` - 読み込みに成功した場合
    /// * `Err(TrainingTableError::SecurityViolation)` - サイズ上限を超えた場合
    /// * `Err(TrainingTableError::Parse)` - ファイルを解析できない場合
    /// * `Err(TrainingTableError::Config)` - XLS/XLSX以外の形式の場合
    pub fn open<R: Read>(
        reader: R,
        security: &SecurityConfig,
    ) -> Result<Self, TrainingTableError> {
        // 上限 + 1バイトまでしか読み込まない
        let limit = security.max_input_file_size.saturating_add(1);
        let mut buffer = Vec::new();
        let bytes_read = reader.take(limit).read_to_end(&mut buffer)?;
        security.check_input_size(bytes_read as u64)?;

        let sheets = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        if !matches!(sheets, Sheets::Xls(_) | Sheets::Xlsx(_)) {
            return Err(TrainingTableError::Config(
                "Only XLS and XLSX formats are supported".to_string(),
            ));
        }

        Ok(Self { sheets })
    }

    /// すべてのシートをグリッドに変換する
    ///
    /// シート名の順序はワークブック内の順序を保ちます。
    pub fn read_workbook(&mut self) -> Result<Workbook, TrainingTableError> {
        let mut workbook = Workbook::new();

        for sheet_name in self.sheets.sheet_names() {
            let range = self.sheets.worksheet_range(&sheet_name)?;
            workbook.add_sheet(sheet_name, range_to_grid(&range));
        }

        Ok(workbook)
    }
}

/// calamineの範囲をヘッダーなしのグリッドに変換する
///
/// 列0はシートの使用範囲の開始列です（A列が空のシートではB列以降が列0になります）。
/// 各行の末尾の空セルは取り除くため、行の長さは最後の空でないセルの位置 + 1 になります。
fn range_to_grid(range: &Range<Data>) -> Grid {
    range
        .rows()
        .map(|row| {
            let mut cells: Vec<CellValue> = row.iter().map(convert_cell).collect();
            while cells.last().is_some_and(CellValue::is_empty) {
                cells.pop();
            }
            cells
        })
        .collect()
}

/// calamineのセルを`CellValue`に変換する
///
/// 日付セルはシリアル値の数値として扱います。
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
    }
}
