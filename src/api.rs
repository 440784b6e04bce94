//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// シート選択方式
///
/// スケジュール抽出の対象とするシートを選択する方法を指定します。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum SheetSelector {
    /// 週範囲の名前を持つシートのみ（デフォルト）
    ///
    /// 例: `Sep 5 - 11`、`Oct 31-6`。表紙や凡例のシートは読み飛ばされます。
    #[default]
    WeeklyRanges,

    /// すべてのシート
    All,

    /// 複数のシート名指定
    ///
    /// ワークブックに存在しない名前は無視されます。
    /// 結果の順序はワークブック内のシート順に従います。
    Names(Vec<String>),
}

/// 出力フォーマット
///
/// 生成したスケジュールを書き出す際の形式を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// テキスト形式（デフォルト）
    ///
    /// # 出力例
    ///
    /// ```text
    /// FB - Football (120)
    /// Special diets: (gluten free)
    /// Mon, 15 Sep: Chef Co - Pancakes
    /// ```
    #[default]
    Text,

    /// JSON形式
    ///
    /// `mealsByTeam`と`teamDetails`を持つオブジェクトとして出力します。
    Json,
}
