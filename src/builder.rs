//! Builder Module
//!
//! Fluent Builder APIを提供し、`ScheduleParser`インスタンスを段階的に構築する。

use crate::api::{OutputFormat, SheetSelector};
use crate::error::TrainingTableError;
use crate::formatter::{
    default_utc_offset, is_valid_date_format, DateFormatter, DEFAULT_DATE_FORMAT,
};
use crate::output::OutputFormatter;
use crate::parser::{normalize_rows, select_sheets, WorkbookReader};
use crate::schedule::build_schedule_with;
use crate::security::SecurityConfig;
use crate::types::{MealSchedule, Workbook};
use chrono::FixedOffset;
use std::io::{Read, Write};

/// 解析処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ParseConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 日付を表示するタイムゾーン
    pub utc_offset: FixedOffset,

    /// 日付形式（chrono互換）
    pub date_format: String,

    /// 入力ファイルの最大サイズ（バイト）
    pub max_input_size: u64,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::WeeklyRanges,
            utc_offset: default_utc_offset(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            max_input_size: SecurityConfig::default().max_input_file_size,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use training_table::{ScheduleParserBuilder, SheetSelector};
///
/// # fn main() -> Result<(), training_table::TrainingTableError> {
/// let parser = ScheduleParserBuilder::new()
///     .with_sheet_selector(SheetSelector::All)
///     .with_date_format("%a %d %b")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ScheduleParserBuilder {
    /// 内部設定（構築中）
    config: ParseConfig,
}

impl ScheduleParserBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 週範囲の名前を持つシート
    /// - タイムゾーン: UTC-05:00
    /// - 日付形式: `%d %b`（例: `15 Sep`）
    /// - 入力サイズ上限: 2GB
    pub fn new() -> Self {
        Self::default()
    }

    /// 処理対象のシートを選択する
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 日付を表示するタイムゾーンを指定する
    ///
    /// エポック補正後の時刻をこのタイムゾーンの日付として表示します。
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use chrono::FixedOffset;
    /// use training_table::ScheduleParserBuilder;
    ///
    /// let builder = ScheduleParserBuilder::new()
    ///     .with_utc_offset(FixedOffset::east_opt(0).unwrap());
    /// ```
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.config.utc_offset = offset;
        self
    }

    /// 日付の表示形式を指定する（chrono互換の書式文字列）
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.config.date_format = format.into();
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.max_input_size = bytes;
        self
    }

    /// 設定を検証し、`ScheduleParser`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `TrainingTableError::Config(String)`: 設定の検証に失敗した場合
    ///   * 日付形式が空、または不正な書式文字列
    ///   * 入力サイズ上限が0
    pub fn build(self) -> Result<ScheduleParser, TrainingTableError> {
        // 1. 日付形式の検証
        if !is_valid_date_format(&self.config.date_format) {
            return Err(TrainingTableError::Config(format!(
                "Invalid date format string: '{}'",
                self.config.date_format
            )));
        }

        // 2. 入力サイズ上限の検証
        if self.config.max_input_size == 0 {
            return Err(TrainingTableError::Config(
                "Invalid max input size: must be greater than 0".to_string(),
            ));
        }

        Ok(ScheduleParser::new(self.config))
    }
}

/// 解析処理のファサード
///
/// アップロードされたロースターファイルからチームごとの食事スケジュールを生成する
/// メインエントリーポイントです。呼び出しごとに結果を最初から計算し、状態は保持しません。
///
/// # 使用例
///
/// ```rust,no_run
/// use training_table::{ScheduleParserBuilder, TeamCode};
/// use std::fs::File;
///
/// # fn main() -> Result<(), training_table::TrainingTableError> {
/// let parser = ScheduleParserBuilder::new().build()?;
/// let schedule = parser.parse(File::open("roster.xlsx")?)?;
///
/// for meal in schedule.meals_for(TeamCode::Fb) {
///     println!("{} {} {}", meal.day, meal.time, meal.meal_type);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ScheduleParser {
    /// 解析設定
    config: ParseConfig,

    /// 日付フォーマッター
    dates: DateFormatter,
}

impl ScheduleParser {
    pub(crate) fn new(config: ParseConfig) -> Self {
        Self {
            dates: DateFormatter::new(config.utc_offset, config.date_format.clone()),
            config,
        }
    }

    /// XLS/XLSXファイルを読み込み、スケジュールを生成する
    ///
    /// # 処理フロー
    ///
    /// 1. 入力全体をメモリに読み込み、ワークブックをデコード
    /// 2. `parse_workbook`でスケジュールを生成
    ///
    /// # 戻り値
    ///
    /// * `Ok(MealSchedule)` - 生成に成功した場合
    /// * `Err(TrainingTableError)` - デコード失敗、または時刻セルを解釈できない場合
    pub fn parse<R: Read>(&self, input: R) -> Result<MealSchedule, TrainingTableError> {
        let security = SecurityConfig {
            max_input_file_size: self.config.max_input_size,
        };
        let workbook = WorkbookReader::open(input, &security)?.read_workbook()?;
        self.parse_workbook(&workbook)
    }

    /// デコード済みのワークブックからスケジュールを生成する
    ///
    /// # 処理フロー
    ///
    /// 1. シート選択
    /// 2. 全行の正規化（不正な行は破棄）
    /// 3. 行ごとの食事の導出とチームへの振り分け
    /// 4. 食事のあるチームの詳細情報の導出
    pub fn parse_workbook(&self, workbook: &Workbook) -> Result<MealSchedule, TrainingTableError> {
        let grids = select_sheets(workbook, &self.config.sheet_selector);
        tracing::debug!(sheets = grids.len(), "selected sheets");

        let rows = normalize_rows(grids);
        build_schedule_with(&rows, &self.dates)
    }

    /// スケジュールを指定された形式で書き出す
    pub fn render<W: Write>(
        &self,
        schedule: &MealSchedule,
        format: OutputFormat,
        mut output: W,
    ) -> Result<(), TrainingTableError> {
        OutputFormatter::from_format(format).render(schedule, &mut output)
    }

    /// スケジュールを指定された形式の文字列に変換する
    pub fn render_to_string(
        &self,
        schedule: &MealSchedule,
        format: OutputFormat,
    ) -> Result<String, TrainingTableError> {
        let mut buffer = Vec::new();
        self.render(schedule, format, &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| {
            TrainingTableError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}
