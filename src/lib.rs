//! training_table - Team meal schedules from weekly training-table rosters
//!
//! このクレートは、複数チームの食事（ケータリング業者、メニュー、時間帯、
//! 複数チーム分の人数テキスト）を記載した週ごとのロースタースプレッドシートから、
//! チームごとの食事スケジュールと人数・食事制限の情報を抽出します。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use training_table::{format_meals, ScheduleParserBuilder, TeamCode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let parser = ScheduleParserBuilder::new().build()?;
//!     let schedule = parser.parse(File::open("roster.xlsx")?)?;
//!
//!     if let Some(team) = schedule.team(TeamCode::Fb) {
//!         println!("{} ({} athletes)", team.name, team.headcount);
//!     }
//!     for line in format_meals(schedule.meals_for(TeamCode::Fb)) {
//!         println!("{}", line);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # In-memory Workbooks
//!
//! デコード済みのグリッドから直接スケジュールを生成することもできます。
//!
//! ```rust
//! use training_table::{CellValue, ScheduleParserBuilder, TeamCode, Workbook};
//!
//! # fn main() -> Result<(), training_table::TrainingTableError> {
//! let mut row = vec![
//!     CellValue::from("Fri"),
//!     CellValue::Number(45184.0),
//!     CellValue::from("Dinner 1800-1930"),
//!     CellValue::from("FB - 120 (gluten free)\nBA - 40"),
//!     CellValue::from("Chef Co"),
//!     CellValue::from("Tacos"),
//! ];
//! row.resize(14, CellValue::from("-"));
//!
//! let workbook = Workbook::new().with_sheet("Sep 15 - 21", vec![row]);
//! let schedule = ScheduleParserBuilder::new().build()?.parse_workbook(&workbook)?;
//!
//! assert_eq!(schedule.meals_for(TeamCode::Ba).len(), 1);
//! assert_eq!(schedule.team(TeamCode::Fb).map(|t| t.headcount), Some(120));
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod detail;
mod error;
mod formatter;
mod meal;
mod output;
mod parser;
mod schedule;
mod security;
mod teams;
mod types;

// 公開API
pub use api::{OutputFormat, SheetSelector};
pub use builder::{ScheduleParser, ScheduleParserBuilder};
pub use detail::{
    derive_team_detail, derive_team_detail_by_code, team_headcount, team_special_diets,
};
pub use error::TrainingTableError;
pub use meal::derive_meal;
pub use output::format_meals;
pub use parser::{
    is_weekly_sheet_name, normalize_row, normalize_rows, select_sheets, select_weekly_sheets,
};
pub use schedule::{build_schedule, meals_by_team, team_details};
pub use teams::{is_team_code, scan_team_codes, team_mapping, TeamCode, UnknownTeamCode};
pub use types::{CellValue, Grid, Meal, MealSchedule, MealType, SpreadsheetRow, Team, Workbook};
