//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::teams::TeamCode;

/// セルの値を表す列挙型
///
/// ヘッダーなしでシートを読み込んだ際の1セル分の値です。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 数値（日付セルはシリアル値として格納される）
    Number(f64),

    /// 文字列
    Text(String),

    /// 論理値
    Bool(bool),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 空でない文字列の場合のみ、その内容を返す
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// 数値の場合のみ、その値を返す
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// 1シート分のセルグリッド（行 → セル）
pub type Grid = Vec<Vec<CellValue>>;

/// デコード済みのワークブック
///
/// シート名の順序と、シート名からグリッドへの対応を保持します。
/// `WorkbookReader`が生成するほか、テストなどで直接組み立てることもできます。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheet_names: Vec<String>,
    sheets: HashMap<String, Grid>,
}

impl Workbook {
    /// 空のワークブックを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// シートを末尾に追加する
    ///
    /// 同名のシートが既に存在する場合は、順序を保ったままグリッドを置き換えます。
    pub fn add_sheet(&mut self, name: impl Into<String>, grid: Grid) {
        let name = name.into();
        if !self.sheets.contains_key(&name) {
            self.sheet_names.push(name.clone());
        }
        self.sheets.insert(name, grid);
    }

    /// ビルダー形式でシートを追加する
    pub fn with_sheet(mut self, name: impl Into<String>, grid: Grid) -> Self {
        self.add_sheet(name, grid);
        self
    }

    /// シート名をワークブック内の順序で取得
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// 名前でシートを取得
    pub fn sheet(&self, name: &str) -> Option<&Grid> {
        self.sheets.get(name)
    }
}

/// 検証済みのロースター行
///
/// 6つのフィールドはすべて空ではありません。`date`は補正前のシリアル値です。
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadsheetRow {
    /// 曜日（例: `Mon`）
    pub day: String,
    /// 日付のシリアル値（スプレッドシートのエポック基準）
    pub date: f64,
    /// 時刻テキスト（食事の種類やチーム別時刻を含むことがある）
    pub time: String,
    /// 人数テキスト（複数チームのコード、人数、食事制限の注記）
    pub headcount: String,
    /// ケータリング業者（複数行の場合あり）
    pub caterer: String,
    /// メニュー（複数行の場合あり）
    pub menu: String,
}

/// 食事の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MealType {
    Breakfast,
    Dinner,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 1チーム分の食事
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// 曜日
    pub day: String,
    /// 補正済みの日付（表示用テキスト、例: `15 Sep`）
    pub date: String,
    /// 表示用の時刻（例: `0700`、`1800-1930`）
    pub time: String,
    /// 食事の種類
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// ケータリング業者（1行目のみ）
    pub caterer_name: String,
    /// メニュー（1行目のみ）
    pub meal_description: String,
}

/// チームの詳細情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// チームコード
    pub code: TeamCode,
    /// 表示名
    pub name: String,
    /// 人数（検出できない場合は0）
    pub headcount: u32,
    /// 食事制限の注記（検出できない場合は空文字列）
    pub special_diets: String,
}

/// ワークブック1つ分の解析結果
///
/// キーはチームコードの登録順に並びます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSchedule {
    /// チームごとの食事リスト（行の走査順）
    pub meals_by_team: BTreeMap<TeamCode, Vec<Meal>>,
    /// チームごとの詳細情報（`meals_by_team`に現れるチームのみ）
    pub team_details: BTreeMap<TeamCode, Team>,
}

impl MealSchedule {
    /// 食事が1件以上あるチームのコードを登録順で返す
    pub fn team_codes(&self) -> impl Iterator<Item = TeamCode> + '_ {
        self.meals_by_team.keys().copied()
    }

    /// 指定チームの食事リストを取得
    pub fn meals_for(&self, code: TeamCode) -> &[Meal] {
        self.meals_by_team
            .get(&code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 指定チームの詳細情報を取得
    pub fn team(&self, code: TeamCode) -> Option<&Team> {
        self.team_details.get(&code)
    }

    /// 結果が空かどうか
    pub fn is_empty(&self) -> bool {
        self.meals_by_team.is_empty()
    }

    /// 指定チームの食事と詳細情報だけを持つスケジュールを返す
    pub fn for_team(&self, code: TeamCode) -> MealSchedule {
        MealSchedule {
            meals_by_team: self
                .meals_by_team
                .get_key_value(&code)
                .map(|(code, meals)| (*code, meals.clone()))
                .into_iter()
                .collect(),
            team_details: self
                .team_details
                .get_key_value(&code)
                .map(|(code, team)| (*code, team.clone()))
                .into_iter()
                .collect(),
        }
    }
}
