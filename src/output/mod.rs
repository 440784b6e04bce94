//! Output Format Module
//!
//! 解析結果の出力フォーマットを切り替えるモジュール。

mod formatters;

use crate::api::OutputFormat;
use crate::error::TrainingTableError;
use crate::types::MealSchedule;
use std::io::Write;

pub use formatters::*;

/// 出力フォーマッター
///
/// 各出力フォーマット（テキスト, JSON）をenumとして表現します。
#[derive(Debug, Clone, Copy)]
pub enum OutputFormatter {
    Text,
    Json,
}

impl OutputFormatter {
    /// 出力フォーマットからフォーマッターを生成
    pub fn from_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => OutputFormatter::Text,
            OutputFormat::Json => OutputFormatter::Json,
        }
    }

    /// スケジュールを指定されたフォーマットで出力する
    pub fn render<W: Write>(
        &self,
        schedule: &MealSchedule,
        writer: &mut W,
    ) -> Result<(), TrainingTableError> {
        match self {
            OutputFormatter::Text => TextFormatter.render(schedule, writer),
            OutputFormatter::Json => JsonFormatter.render(schedule, writer),
        }
    }
}
