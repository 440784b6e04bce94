//! Schedule Aggregation Module
//!
//! 正規化済みの全行から、チームごとの食事リストとチーム詳細を組み立てるモジュール。

use std::collections::BTreeMap;

use crate::detail::derive_team_detail;
use crate::error::TrainingTableError;
use crate::formatter::DateFormatter;
use crate::meal::derive_meal_with;
use crate::teams::{scan_team_codes, TeamCode};
use crate::types::{Meal, MealSchedule, SpreadsheetRow, Team};

/// 行ごとに食事を導出し、チームごとのリストにまとめる
///
/// 各行の食事は主コード（レジストリ順で最初に見つかったコード）から1回だけ導出し、
/// 同じ内容を行が参照するすべてのチームのリストに追加します。
/// チームを参照しない行は読み飛ばします。
///
/// # 戻り値
///
/// * `Ok(BTreeMap)` - チームコード → 行の走査順の食事リスト
/// * `Err(TrainingTableError)` - いずれかの行で時刻・種類・日付を解釈できない場合
pub(crate) fn meals_by_team_with(
    rows: &[SpreadsheetRow],
    dates: &DateFormatter,
) -> Result<BTreeMap<TeamCode, Vec<Meal>>, TrainingTableError> {
    let mut meals_by_team: BTreeMap<TeamCode, Vec<Meal>> = BTreeMap::new();

    for row in rows {
        let codes = scan_team_codes(&row.headcount);
        let Some(&primary) = codes.first() else {
            tracing::debug!(headcount = %row.headcount, "row references no team");
            continue;
        };

        let meal = derive_meal_with(row, primary, dates).inspect_err(|e| {
            tracing::warn!(day = %row.day, team = %primary, error = %e, "meal derivation failed");
        })?;

        for code in codes {
            meals_by_team.entry(code).or_default().push(meal.clone());
        }
    }

    Ok(meals_by_team)
}

/// デフォルトの日付表示で`meals_by_team_with`を実行する
pub fn meals_by_team(
    rows: &[SpreadsheetRow],
) -> Result<BTreeMap<TeamCode, Vec<Meal>>, TrainingTableError> {
    meals_by_team_with(rows, &DateFormatter::default())
}

/// 指定されたチームの詳細情報を導出する
///
/// どの行からも参照されないチームは結果に含まれません。
pub fn team_details<I>(rows: &[SpreadsheetRow], codes: I) -> BTreeMap<TeamCode, Team>
where
    I: IntoIterator<Item = TeamCode>,
{
    codes
        .into_iter()
        .filter_map(|code| derive_team_detail(rows, code).map(|team| (code, team)))
        .collect()
}

/// 正規化済みの行から`MealSchedule`を組み立てる
pub(crate) fn build_schedule_with(
    rows: &[SpreadsheetRow],
    dates: &DateFormatter,
) -> Result<MealSchedule, TrainingTableError> {
    let meals_by_team = meals_by_team_with(rows, dates)?;
    let team_details = team_details(rows, meals_by_team.keys().copied());

    tracing::info!(
        rows = rows.len(),
        teams = meals_by_team.len(),
        "built meal schedule"
    );

    Ok(MealSchedule {
        meals_by_team,
        team_details,
    })
}

/// 正規化済みの行から`MealSchedule`を組み立てる（デフォルトの日付表示）
///
/// 入力のみから決まる純粋な計算で、同じ行に対しては常に同じ結果を返します。
pub fn build_schedule(rows: &[SpreadsheetRow]) -> Result<MealSchedule, TrainingTableError> {
    build_schedule_with(rows, &DateFormatter::default())
}
