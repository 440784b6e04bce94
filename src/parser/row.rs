//! Row Normalization
//!
//! ヘッダーなしで読み込んだ行を`SpreadsheetRow`に変換する。

use crate::types::{CellValue, Grid, SpreadsheetRow};

/// ロースター行のセル数
const ROW_WIDTH: usize = 14;

const DAY: usize = 0;
const DATE: usize = 1;
const TIME: usize = 2;
const HEADCOUNT: usize = 3;
const CATERER: usize = 4;
const MENU: usize = 5;

/// 1行を検証し、`SpreadsheetRow`に変換する
///
/// 行がちょうど14セルで、曜日・時刻・人数・ケータリング・メニューが空でない文字列、
/// 日付が正の数値である場合のみ`Some`を返します。それ以外は`None`（行は破棄される）。
///
/// 日付はシリアル値のまま保持します。
pub fn normalize_row(row: &[CellValue]) -> Option<SpreadsheetRow> {
    if row.len() != ROW_WIDTH {
        return None;
    }

    let date = row[DATE].as_number().filter(|n| *n > 0.0)?;

    Some(SpreadsheetRow {
        day: row[DAY].as_text()?.to_string(),
        date,
        time: row[TIME].as_text()?.to_string(),
        headcount: row[HEADCOUNT].as_text()?.to_string(),
        caterer: row[CATERER].as_text()?.to_string(),
        menu: row[MENU].as_text()?.to_string(),
    })
}

/// 複数のグリッドの全行を順に正規化する
///
/// 不正な行は読み飛ばし、エラーにはしません。
pub fn normalize_rows<'a, I>(grids: I) -> Vec<SpreadsheetRow>
where
    I: IntoIterator<Item = &'a Grid>,
{
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for row in grids.into_iter().flatten() {
        match normalize_row(row) {
            Some(normalized) => rows.push(normalized),
            None => dropped += 1,
        }
    }

    tracing::debug!(kept = rows.len(), dropped, "normalized roster rows");
    rows
}
