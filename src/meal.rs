//! Meal Derivation Module
//!
//! ロースター行とチームコードから`Meal`を導出するモジュール。
//!
//! 時刻は次の順で探します。
//!
//! 1. チーム別の時刻指定: `0700 (FB)` のように3〜4桁の数字の直後に括弧付きのコード
//! 2. 時刻範囲: `1800-1930`、`1800 - 1930`
//!
//! 食事の種類は `Breakfast`、`Dinner` の順でキーワードを探し、どちらもなければ
//! チーム別の時刻指定があった場合に限り朝食とみなします。

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TrainingTableError;
use crate::formatter::DateFormatter;
use crate::teams::TeamCode;
use crate::types::{Meal, MealType, SpreadsheetRow};

/// チーム別の時刻指定（`TeamCode`の宣言順）
static TEAM_TIME: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TeamCode::ALL
        .iter()
        .map(|code| {
            let pattern = format!(r"([0-9]{{3,4}}) ?\({}\)", regex::escape(code.as_str()));
            Regex::new(&pattern).expect("team time pattern is valid")
        })
        .collect()
});

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{3,4} ?- ?[0-9]{3,4}").expect("time range pattern is valid")
});

/// 時刻セルから読み取った食事時刻
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MealTime {
    /// 表示用の時刻
    pub time: String,
    /// チーム別の時刻指定から得たかどうか
    pub team_specific: bool,
}

/// 時刻セルから食事時刻を検出する
///
/// # 戻り値
///
/// * `Ok(MealTime)` - チーム別の時刻、または時刻範囲
/// * `Err(TrainingTableError::MealTimeUndetectable)` - どちらも見つからない場合
pub(crate) fn detect_meal_time(
    time: &str,
    code: TeamCode,
) -> Result<MealTime, TrainingTableError> {
    if let Some(digits) = TEAM_TIME[code as usize]
        .captures(time)
        .and_then(|captures| captures.get(1))
    {
        return Ok(MealTime {
            time: digits.as_str().trim().to_string(),
            team_specific: true,
        });
    }

    if let Some(range) = TIME_RANGE.find(time) {
        return Ok(MealTime {
            time: range.as_str().trim().to_string(),
            team_specific: false,
        });
    }

    Err(TrainingTableError::MealTimeUndetectable {
        cell: time.to_string(),
    })
}

/// 時刻セルから食事の種類を判別する
///
/// キーワードは大文字小文字を区別します。
pub(crate) fn detect_meal_type(
    time: &str,
    team_specific: bool,
) -> Result<MealType, TrainingTableError> {
    if time.contains("Breakfast") {
        Ok(MealType::Breakfast)
    } else if time.contains("Dinner") {
        Ok(MealType::Dinner)
    } else if team_specific {
        Ok(MealType::Breakfast)
    } else {
        Err(TrainingTableError::MealTypeUndetectable {
            cell: time.to_string(),
        })
    }
}

/// 複数行のセルの1行目を返す
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

/// ロースター行から指定チームの`Meal`を導出する
///
/// # 引数
///
/// * `row` - 正規化済みの行
/// * `code` - 時刻の解釈に使うチームコード（通常は行の主コード）
/// * `dates` - 日付の補正と表示に使うフォーマッター
///
/// # 戻り値
///
/// * `Ok(Meal)` - 導出に成功した場合
/// * `Err(TrainingTableError)` - 時刻、種類、日付のいずれかを解釈できない場合
pub(crate) fn derive_meal_with(
    row: &SpreadsheetRow,
    code: TeamCode,
    dates: &DateFormatter,
) -> Result<Meal, TrainingTableError> {
    let meal_time = detect_meal_time(&row.time, code)?;
    let meal_type = detect_meal_type(&row.time, meal_time.team_specific)?;

    Ok(Meal {
        day: row.day.clone(),
        date: dates.format(row.date)?,
        time: meal_time.time,
        meal_type,
        caterer_name: first_line(&row.caterer).to_string(),
        meal_description: first_line(&row.menu).to_string(),
    })
}

/// デフォルトの日付表示（`DD MMM`、UTC-05:00）で`Meal`を導出する
///
/// ```rust
/// use training_table::{derive_meal, MealType, SpreadsheetRow, TeamCode};
///
/// let row = SpreadsheetRow {
///     day: "Fri".to_string(),
///     date: 45184.0,
///     time: "0700 (FB) Breakfast".to_string(),
///     headcount: "FB - 120".to_string(),
///     caterer: "Chef Co".to_string(),
///     menu: "Pancakes".to_string(),
/// };
///
/// let meal = derive_meal(&row, TeamCode::Fb).unwrap();
/// assert_eq!(meal.time, "0700");
/// assert_eq!(meal.meal_type, MealType::Breakfast);
/// assert_eq!(meal.date, "15 Sep");
/// ```
pub fn derive_meal(row: &SpreadsheetRow, code: TeamCode) -> Result<Meal, TrainingTableError> {
    derive_meal_with(row, code, &DateFormatter::default())
}
