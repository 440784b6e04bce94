//! Output Formatters Implementation
//!
//! 各出力フォーマットの実装を提供するモジュール。

use crate::error::TrainingTableError;
use crate::types::{Meal, MealSchedule};
use std::io::Write;

/// 食事リストを表示用の行に変換する
///
/// 各行は `<曜日>, <日付>: <ケータリング> - <メニュー>` の形式です。
///
/// ```rust
/// use training_table::{format_meals, Meal, MealType};
///
/// let meals = vec![Meal {
///     day: "Fri".to_string(),
///     date: "15 Sep".to_string(),
///     time: "0700".to_string(),
///     meal_type: MealType::Breakfast,
///     caterer_name: "Chef Co".to_string(),
///     meal_description: "Pancakes".to_string(),
/// }];
///
/// assert_eq!(format_meals(&meals), vec!["Fri, 15 Sep: Chef Co - Pancakes"]);
/// ```
pub fn format_meals(meals: &[Meal]) -> Vec<String> {
    meals
        .iter()
        .map(|meal| {
            format!(
                "{}, {}: {} - {}",
                meal.day, meal.date, meal.caterer_name, meal.meal_description
            )
        })
        .collect()
}

/// テキスト形式のフォーマッター
pub struct TextFormatter;

impl TextFormatter {
    pub fn render<W: Write>(
        &self,
        schedule: &MealSchedule,
        writer: &mut W,
    ) -> Result<(), TrainingTableError> {
        for (index, (code, meals)) in schedule.meals_by_team.iter().enumerate() {
            if index > 0 {
                writeln!(writer)?;
            }

            match schedule.team(*code) {
                Some(team) => {
                    writeln!(writer, "{} - {} ({})", code, team.name, team.headcount)?;
                    if !team.special_diets.is_empty() {
                        writeln!(writer, "Special diets: {}", team.special_diets)?;
                    }
                }
                None => writeln!(writer, "{} - {}", code, code.name())?,
            }

            for line in format_meals(meals) {
                writeln!(writer, "{}", line)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

/// JSON形式のフォーマッター
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn render<W: Write>(
        &self,
        schedule: &MealSchedule,
        writer: &mut W,
    ) -> Result<(), TrainingTableError> {
        serde_json::to_writer_pretty(&mut *writer, schedule).map_err(|e| {
            TrainingTableError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }
}
