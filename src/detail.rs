//! Team Detail Module
//!
//! 人数テキストからチームの人数と食事制限の注記を抽出するモジュール。
//!
//! 抽出パターンはチームごとの規則表で管理します。各規則は優先順に並んだ
//! 位置決めパターンのリストで、最初に一致したものを採用します。
//! 標準の書式は `FB - 120 (gluten free)` で、一部のチームには
//! コードと人数の間に任意の文字を許す緩いパターンを先に試します。

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::teams::{scan_team_codes, TeamCode};
use crate::types::{SpreadsheetRow, Team};

/// 緩いパターンを優先するチーム
const LOOSE_HEADCOUNT_TEAMS: &[TeamCode] = &[TeamCode::Fb];

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,3}").expect("digits pattern is valid"));

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^\r\n]+\)").expect("parenthetical pattern is valid"));

/// 位置決めした範囲から食事制限の注記を切り出す方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DietsSlice {
    /// 最初の括弧書きのみ
    Parenthetical,
    /// 最初の`(`の1文字前から末尾まで（前後の空白は除く）
    FromBeforeParen,
}

impl DietsSlice {
    fn extract(self, located: &str) -> Option<String> {
        match self {
            DietsSlice::Parenthetical => PARENTHETICAL
                .find(located)
                .map(|diets| diets.as_str().trim().to_string()),
            DietsSlice::FromBeforeParen => {
                let paren = located.find('(')?;
                let start = located[..paren]
                    .char_indices()
                    .next_back()
                    .map_or(paren, |(index, _)| index);
                Some(located[start..].trim().to_string())
            }
        }
    }
}

/// 1チーム分の抽出規則
#[derive(Debug)]
struct DetailRule {
    /// 人数を含む範囲を見つけるパターン（優先順）
    headcount: Vec<Regex>,
    /// 食事制限の注記を含む範囲を見つけるパターンと切り出し方法（優先順）
    special_diets: Vec<(Regex, DietsSlice)>,
}

impl DetailRule {
    /// `<code> - <人数>` 形式の標準規則
    fn standard(code: &str) -> Self {
        Self {
            headcount: vec![standard_headcount(code)],
            special_diets: vec![(standard_special_diets(code), DietsSlice::FromBeforeParen)],
        }
    }

    /// コードの後の任意の文字を許す緩いパターンを先に試す規則
    fn loose_first(code: &str) -> Self {
        Self {
            headcount: vec![
                compile(&format!(r"{}[^\r\n]*[0-9]{{1,3}}", code)),
                standard_headcount(code),
            ],
            special_diets: vec![
                (
                    compile(&format!(r"{}[^\r\n]*(\r?\n)? ?\([^\r\n]+\)", code)),
                    DietsSlice::Parenthetical,
                ),
                (standard_special_diets(code), DietsSlice::FromBeforeParen),
            ],
        }
    }

    /// 人数テキストから人数を抽出する
    fn headcount(&self, text: &str) -> Option<u32> {
        self.headcount.iter().find_map(|pattern| {
            let located = pattern.find(text)?;
            DIGITS.find(located.as_str())?.as_str().parse().ok()
        })
    }

    /// 人数テキストから食事制限の注記を抽出する
    fn special_diets(&self, text: &str) -> Option<String> {
        self.special_diets.iter().find_map(|(pattern, slice)| {
            let located = pattern.find(text)?;
            slice.extract(located.as_str())
        })
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("team detail pattern is valid")
}

fn standard_headcount(code: &str) -> Regex {
    compile(&format!(r"{} ?- ?[0-9]{{1,3}}", code))
}

fn standard_special_diets(code: &str) -> Regex {
    compile(&format!(r"{} ?- ?[0-9]{{1,3}} ?(\r?\n)? ?\([^\r\n]+\)", code))
}

/// チームコード → 抽出規則
static DETAIL_RULES: LazyLock<HashMap<TeamCode, DetailRule>> = LazyLock::new(|| {
    TeamCode::ALL
        .iter()
        .map(|code| {
            let escaped = regex::escape(code.as_str());
            let rule = if LOOSE_HEADCOUNT_TEAMS.contains(code) {
                DetailRule::loose_first(&escaped)
            } else {
                DetailRule::standard(&escaped)
            };
            (*code, rule)
        })
        .collect()
});

/// 人数テキストから指定チームの人数を抽出する
///
/// 一致するパターンがない場合は0を返します。
pub fn team_headcount(headcount_text: &str, code: TeamCode) -> u32 {
    DETAIL_RULES
        .get(&code)
        .and_then(|rule| rule.headcount(headcount_text))
        .unwrap_or(0)
}

/// 人数テキストから指定チームの食事制限の注記を抽出する
///
/// 標準の書式では、最初の`(`の1文字前から末尾までを前後の空白を除いて返します
/// （例: `(gluten free)`、`MBB - 15(vegan)`なら`5(vegan)`）。
/// 見つからない場合は空文字列です。
pub fn team_special_diets(headcount_text: &str, code: TeamCode) -> String {
    DETAIL_RULES
        .get(&code)
        .and_then(|rule| rule.special_diets(headcount_text))
        .unwrap_or_default()
}

/// 全行から指定チームの`Team`を導出する
///
/// 人数テキストがそのチームを参照する最初の行（走査順）を使います。
/// 参照する行がない場合は`None`です（エラーではありません）。
pub fn derive_team_detail(rows: &[SpreadsheetRow], code: TeamCode) -> Option<Team> {
    let row = rows
        .iter()
        .find(|row| scan_team_codes(&row.headcount).contains(&code))?;

    Some(Team {
        code,
        name: code.name().to_string(),
        headcount: team_headcount(&row.headcount, code),
        special_diets: team_special_diets(&row.headcount, code),
    })
}

/// 文字列のチームコードから`Team`を導出する
///
/// 未登録のコードの場合は`None`です。
pub fn derive_team_detail_by_code(rows: &[SpreadsheetRow], code: &str) -> Option<Team> {
    derive_team_detail(rows, TeamCode::lookup(code)?)
}
