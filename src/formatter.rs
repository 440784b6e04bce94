//! Date Formatter Module
//!
//! スプレッドシートのシリアル日付値を表示用の日付文字列に変換するモジュール。

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::error::TrainingTableError;

/// エポック補正の日数
///
/// 1970-01-01からのシリアル値のずれ（25567日）に1日を加えた値。
/// スプレッドシート形式の1900年うるう年の数え誤りを補正する。
pub(crate) const EPOCH_CORRECTION_DAYS: f64 = 25_568.0;

/// 1日あたりのミリ秒
const MILLIS_PER_DAY: f64 = 86_400.0 * 1_000.0;

/// デフォルトの日付形式（`DD MMM`、例: `15 Sep`）
pub(crate) const DEFAULT_DATE_FORMAT: &str = "%d %b";

/// デフォルトの表示タイムゾーン（UTC-05:00）
pub(crate) const DEFAULT_UTC_OFFSET_WEST_SECS: i32 = 5 * 3600;

/// デフォルトの表示タイムゾーンを取得
pub(crate) fn default_utc_offset() -> FixedOffset {
    FixedOffset::west_opt(DEFAULT_UTC_OFFSET_WEST_SECS).unwrap_or_else(|| Utc.fix())
}

/// chrono互換の書式文字列が有効かどうかを判定
///
/// 空文字列、または解釈できない指定子を含む場合は無効です。
pub(crate) fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// 日付フォーマッター
///
/// シリアル値からエポック補正日数を引き、ゼロエポック（1970-01-01 00:00 UTC）からの
/// ミリ秒オフセットとして時刻を求め、指定されたタイムゾーンで日付として表示します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateFormatter {
    /// 表示に使うタイムゾーン
    offset: FixedOffset,
    /// chrono互換の書式文字列
    format: String,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(default_utc_offset(), DEFAULT_DATE_FORMAT.to_string())
    }
}

impl DateFormatter {
    pub fn new(offset: FixedOffset, format: String) -> Self {
        Self { offset, format }
    }

    /// シリアル値をエポック補正後の時刻に変換
    ///
    /// # 戻り値
    ///
    /// * `Ok(DateTime<Utc>)` - 補正後の時刻
    /// * `Err(TrainingTableError::DateOutOfRange)` - 表現できない値の場合
    pub fn corrected_instant(&self, serial: f64) -> Result<DateTime<Utc>, TrainingTableError> {
        let millis = ((serial - EPOCH_CORRECTION_DAYS) * MILLIS_PER_DAY).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return Err(TrainingTableError::DateOutOfRange { serial });
        }

        DateTime::from_timestamp_millis(millis as i64)
            .ok_or(TrainingTableError::DateOutOfRange { serial })
    }

    /// シリアル値を表示用の日付文字列に変換
    pub fn format(&self, serial: f64) -> Result<String, TrainingTableError> {
        let instant = self.corrected_instant(serial)?;
        Ok(instant
            .with_timezone(&self.offset)
            .format(&self.format)
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn utc_formatter() -> DateFormatter {
        DateFormatter::new(Utc.fix(), "%Y-%m-%d".to_string())
    }

    #[test]
    fn test_default_format_known_dates() {
        let formatter = DateFormatter::default();
        // 2023-09-15
        assert_eq!(formatter.format(45184.0).unwrap(), "15 Sep");
        assert_eq!(formatter.format(1.0).unwrap(), "31 Dec");
        assert_eq!(formatter.format(45292.0).unwrap(), "01 Jan");
    }

    #[test]
    fn test_corrected_instant_in_utc() {
        let formatter = utc_formatter();
        assert_eq!(formatter.format(25568.0).unwrap(), "1970-01-01");
        assert_eq!(formatter.format(45184.0).unwrap(), "2023-09-16");
        assert_eq!(formatter.format(1.0).unwrap(), "1900-01-01");
    }

    #[test]
    fn test_corrected_instant_millis() {
        let instant = DateFormatter::default().corrected_instant(25569.0).unwrap();
        assert_eq!(instant.timestamp_millis(), 86_400_000);
    }

    #[test]
    fn test_out_of_range_serial() {
        let formatter = DateFormatter::default();
        assert!(matches!(
            formatter.format(f64::MAX),
            Err(TrainingTableError::DateOutOfRange { .. })
        ));
        assert!(formatter.format(f64::NAN).is_err());
    }

    #[test]
    fn test_is_valid_date_format() {
        assert!(is_valid_date_format("%d %b"));
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(!is_valid_date_format(""));
        assert!(!is_valid_date_format("%Q"));
    }

    proptest! {
        #[test]
        fn test_date_conversion_monotonicity(
            serial1 in 1u32..60000,
            serial2 in 1u32..60000
        ) {
            let formatter = utc_formatter();
            let date1 = formatter.format(serial1 as f64).unwrap();
            let date2 = formatter.format(serial2 as f64).unwrap();

            prop_assert_eq!(serial1.cmp(&serial2), date1.cmp(&date2));
        }
    }
}
