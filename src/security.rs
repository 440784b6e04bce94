//! Security Module
//!
//! アップロードされたファイルに対する制限を実装するモジュール。

use crate::error::TrainingTableError;

/// デフォルトの入力ファイルサイズ上限: 2GB
pub(crate) const DEFAULT_MAX_INPUT_FILE_SIZE: u64 = 2_147_483_648;

/// セキュリティ設定
///
/// ファイル処理時の制限を定義します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: DEFAULT_MAX_INPUT_FILE_SIZE,
        }
    }
}

impl SecurityConfig {
    /// 読み込んだバイト数が上限以内かを検証する
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 上限以内の場合
    /// * `Err(TrainingTableError::SecurityViolation)` - 上限を超えた場合
    pub fn check_input_size(&self, bytes_read: u64) -> Result<(), TrainingTableError> {
        if bytes_read > self.max_input_file_size {
            return Err(TrainingTableError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, self.max_input_file_size
            )));
        }
        Ok(())
    }
}
