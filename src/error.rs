//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// training_tableクレート全体で使用するエラー型
///
/// ロースターファイルの読み込み、解析、スケジュール生成中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: アップロードされたファイルの読み込み失敗
/// - `Parse`: ワークブックの解析失敗（calamine由来）
/// - `Config`: 設定の検証失敗、またはサポート外のファイル形式
/// - `SecurityViolation`: 入力サイズ制限の違反
/// - `MealTimeUndetectable` / `MealTypeUndetectable`: 時刻セルの解釈失敗
///
/// 行の構造不正やチーム参照のない行はエラーではなく、単に読み飛ばされます。
///
/// # 使用例
///
/// ```rust,no_run
/// use training_table::TrainingTableError;
/// use std::fs::File;
///
/// fn open_roster(path: &str) -> Result<File, TrainingTableError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(file)
/// }
/// ```
#[derive(Error, Debug)]
pub enum TrainingTableError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ScheduleParserBuilder::build()`時、またはXLS/XLSX以外の
    /// ワークブックが渡された場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// 時刻セルから食事時刻を検出できなかったエラー
    ///
    /// チーム別の時刻指定（例: `0700 (FB)`）も時刻範囲（例: `1800-1930`）も
    /// 見つからなかった場合に発生します。アップロード全体の処理が中断されます。
    #[error("Could not detect meal time in cell: {cell}")]
    MealTimeUndetectable {
        /// 問題のあった時刻セルの内容
        cell: String,
    },

    /// 時刻セルから食事の種類を判別できなかったエラー
    #[error("Could not detect meal type (breakfast or dinner) in cell: {cell}")]
    MealTypeUndetectable {
        /// 問題のあった時刻セルの内容
        cell: String,
    },

    /// 日付のシリアル値がカレンダー日付として表現できないエラー
    #[error("Date serial out of range: {serial}")]
    DateOutOfRange {
        /// 問題のあったシリアル値
        serial: f64,
    },
}
