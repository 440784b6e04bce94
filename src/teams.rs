//! Team Registry Module
//!
//! 既知のチームコードと表示名の固定テーブル、および人数テキストから
//! チームコードを検出するスキャナーを提供するモジュール。

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// チームコード
///
/// 宣言順がレジストリ順であり、スキャン結果やマップのキーの並び順になります。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamCode {
    Ba,
    Box,
    Ch,
    Dv,
    Fb,
    Fn,
    Go,
    Ho,
    Lax,
    Mbb,
    Mgym,
    Msoc,
    Msw,
    Mten,
    Ri,
    Tr,
    Vo,
    Wbb,
    Wgym,
    Wp,
    Wr,
    Wsoc,
    Wsw,
    Wten,
    Xc,
}

/// レジストリ本体（コード、短縮表記、表示名）
const REGISTRY: [(TeamCode, &str, &str); 25] = [
    (TeamCode::Ba, "BA", "Baseball"),
    (TeamCode::Box, "BOX", "Boxing"),
    (TeamCode::Ch, "CH", "Spirit"),
    (TeamCode::Dv, "DV", "Diving"),
    (TeamCode::Fb, "FB", "Football"),
    (TeamCode::Fn, "FN", "Fencing"),
    (TeamCode::Go, "GO", "Golf"),
    (TeamCode::Ho, "HO", "Hockey"),
    (TeamCode::Lax, "LAX", "Lacrosse"),
    (TeamCode::Mbb, "MBB", "Men's Basketball"),
    (TeamCode::Mgym, "MGYM", "Men's Gymnastics"),
    (TeamCode::Msoc, "MSOC", "Men's Soccer"),
    (TeamCode::Msw, "MSW", "Men's Swimming"),
    (TeamCode::Mten, "MTEN", "Men's Tennis"),
    (TeamCode::Ri, "RI", "Rifle"),
    (TeamCode::Tr, "TR", "Track and Field"),
    (TeamCode::Vo, "VO", "Volleyball"),
    (TeamCode::Wbb, "WBB", "Women's Basketball"),
    (TeamCode::Wgym, "WGYM", "Women's Gymnastics"),
    (TeamCode::Wp, "WP", "Water Polo"),
    (TeamCode::Wr, "WR", "Wrestling"),
    (TeamCode::Wsoc, "WSOC", "Women's Soccer"),
    (TeamCode::Wsw, "WSW", "Women's Swimming"),
    (TeamCode::Wten, "WTEN", "Women's Tennis"),
    (TeamCode::Xc, "XC", "Cross Country"),
];

impl TeamCode {
    /// すべてのチームコード（レジストリ順）
    pub const ALL: [TeamCode; 25] = [
        TeamCode::Ba,
        TeamCode::Box,
        TeamCode::Ch,
        TeamCode::Dv,
        TeamCode::Fb,
        TeamCode::Fn,
        TeamCode::Go,
        TeamCode::Ho,
        TeamCode::Lax,
        TeamCode::Mbb,
        TeamCode::Mgym,
        TeamCode::Msoc,
        TeamCode::Msw,
        TeamCode::Mten,
        TeamCode::Ri,
        TeamCode::Tr,
        TeamCode::Vo,
        TeamCode::Wbb,
        TeamCode::Wgym,
        TeamCode::Wp,
        TeamCode::Wr,
        TeamCode::Wsoc,
        TeamCode::Wsw,
        TeamCode::Wten,
        TeamCode::Xc,
    ];

    /// スプレッドシート上の表記（例: `FB`）
    pub fn as_str(&self) -> &'static str {
        REGISTRY[*self as usize].1
    }

    /// 表示名（例: `Football`）
    pub fn name(&self) -> &'static str {
        REGISTRY[*self as usize].2
    }

    /// 表記からチームコードを検索する（完全一致、大文字小文字を区別）
    ///
    /// ```rust
    /// use training_table::TeamCode;
    ///
    /// assert_eq!(TeamCode::lookup("FB"), Some(TeamCode::Fb));
    /// assert_eq!(TeamCode::lookup("fb"), None);
    /// ```
    pub fn lookup(code: &str) -> Option<TeamCode> {
        REGISTRY
            .iter()
            .find(|(_, text, _)| *text == code)
            .map(|(team, _, _)| *team)
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 未登録のチームコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTeamCode(pub String);

impl fmt::Display for UnknownTeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown team code: '{}'", self.0)
    }
}

impl std::error::Error for UnknownTeamCode {}

impl FromStr for TeamCode {
    type Err = UnknownTeamCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamCode::lookup(s).ok_or_else(|| UnknownTeamCode(s.to_string()))
    }
}

/// 文字列が登録済みのチームコードかどうかを判定
pub fn is_team_code(code: &str) -> bool {
    TeamCode::lookup(code).is_some()
}

/// チームコードと表示名の対応をレジストリ順で返す
pub fn team_mapping() -> impl Iterator<Item = (TeamCode, &'static str)> {
    REGISTRY.iter().map(|(team, _, name)| (*team, *name))
}

/// 人数テキストに含まれるチームコードを検出する
///
/// レジストリ順に各コードの部分一致を調べます。単語境界は考慮しないため、
/// 別のトークンの一部として現れたコードも検出されます（例: `HOCKEY`は`HO`に一致する）。
///
/// # 戻り値
///
/// 検出されたコードのリスト（レジストリ順、重複なし）
pub fn scan_team_codes(headcount: &str) -> Vec<TeamCode> {
    REGISTRY
        .iter()
        .filter(|(_, text, _)| headcount.contains(*text))
        .map(|(team, _, _)| *team)
        .collect()
}
