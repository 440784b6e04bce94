//! Sheet Selection
//!
//! ワークブックから処理対象のシートを選び出す。

use std::sync::LazyLock;

use regex::Regex;

use crate::api::SheetSelector;
use crate::types::{Grid, Workbook};

/// 週範囲を表すシート名（例: `Sep 5 - 11`）
///
/// 英字、任意の文字、1〜2桁の数字、ハイフン（前後の空白は任意）、1〜2桁の数字。
/// 部分一致で判定する。
static WEEK_RANGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+.+[0-9]{1,2} ?- ?[0-9]{1,2}").expect("week range pattern is valid")
});

/// シート名が週範囲の形式かどうかを判定
pub fn is_weekly_sheet_name(name: &str) -> bool {
    WEEK_RANGE_NAME.is_match(name)
}

/// 週範囲の名前を持つシートのグリッドを、ワークブック内の順序で返す
///
/// 一致するシートがない場合は空のリストを返します（エラーではありません）。
pub fn select_weekly_sheets(workbook: &Workbook) -> Vec<&Grid> {
    select_sheets(workbook, &SheetSelector::WeeklyRanges)
}

/// シート選択方式に基づいてグリッドを選択
///
/// # 引数
///
/// * `workbook` - デコード済みのワークブック
/// * `selector` - シート選択方式
///
/// # 戻り値
///
/// 選択されたグリッドのリスト（ワークブック内のシート順）
pub fn select_sheets<'a>(workbook: &'a Workbook, selector: &SheetSelector) -> Vec<&'a Grid> {
    workbook
        .sheet_names()
        .iter()
        .filter(|name| {
            let selected = match selector {
                SheetSelector::WeeklyRanges => is_weekly_sheet_name(name),
                SheetSelector::All => true,
                SheetSelector::Names(names) => names.contains(*name),
            };
            if !selected {
                tracing::debug!(sheet = %name, "skipping sheet");
            }
            selected
        })
        .filter_map(|name| workbook.sheet(name))
        .collect()
}
