//! Integration Tests for training_table
//!
//! 実際のXLSXファイルをメモリ上で生成し、デコードからスケジュール生成までを検証する。

use rust_xlsxwriter::*;
use std::io::Cursor;
use training_table::{
    format_meals, MealType, OutputFormat, ScheduleParserBuilder, SheetSelector, TeamCode,
    TrainingTableError,
};

// Helper module for generating roster fixtures
mod fixtures {
    use super::*;

    /// ロースター1行分（先頭6列）の内容
    pub struct RosterRow<'a> {
        pub day: &'a str,
        pub date: f64,
        pub time: &'a str,
        pub headcount: &'a str,
        pub caterer: &'a str,
        pub menu: &'a str,
    }

    /// ロースター行を14列で書き込む（7列目以降は備考欄）
    pub fn write_roster_row(
        worksheet: &mut Worksheet,
        row: u32,
        roster: &RosterRow,
    ) -> Result<(), XlsxError> {
        worksheet.write_string(row, 0, roster.day)?;
        worksheet.write_number(row, 1, roster.date)?;
        worksheet.write_string(row, 2, roster.time)?;
        worksheet.write_string(row, 3, roster.headcount)?;
        worksheet.write_string(row, 4, roster.caterer)?;
        worksheet.write_string(row, 5, roster.menu)?;
        for col in 6..14 {
            worksheet.write_string(row, col, "n/a")?;
        }
        Ok(())
    }

    /// ヘッダー行を書き込む
    pub fn write_header(worksheet: &mut Worksheet) -> Result<(), XlsxError> {
        let headers = [
            "Day", "Date", "Time", "Headcount", "Caterer", "Menu", "Notes", "Delivery",
            "Setup", "Contact", "Phone", "Cost", "Invoice", "Paid",
        ];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }
        Ok(())
    }

    /// 表紙、2週分のシート、凡例を持つ典型的なロースター
    pub fn generate_roster() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();

        let cover = workbook.add_worksheet();
        cover.set_name("Cover")?;
        cover.write_string(0, 0, "Training Table Fall Schedule")?;

        let week1 = workbook.add_worksheet();
        week1.set_name("Sep 11 - 17")?;
        write_header(week1)?;
        write_roster_row(
            week1,
            1,
            &RosterRow {
                day: "Mon",
                date: 45180.0,
                time: "Breakfast 0700-0830",
                headcount: "FB - 120 (gluten free)\nBA - 40",
                caterer: "Morning Grill\nBackup: Campus Dining",
                menu: "Pancakes\nFruit",
            },
        )?;
        write_roster_row(
            week1,
            2,
            &RosterRow {
                day: "Mon",
                date: 45180.0,
                time: "Dinner 1800 - 1930",
                headcount: "MBB - 15 (1 vegan)\nWBB - 14",
                caterer: "Taco Truck",
                menu: "Tacos",
            },
        )?;

        let week2 = workbook.add_worksheet();
        week2.set_name("Sep 18 - 24")?;
        write_header(week2)?;
        write_roster_row(
            week2,
            1,
            &RosterRow {
                day: "Fri",
                date: 45191.0,
                time: "0630 (FB)\n0730 (BA)",
                headcount: "FB - 110\nBA - 38",
                caterer: "Morning Grill",
                menu: "Omelets",
            },
        )?;

        let legend = workbook.add_worksheet();
        legend.set_name("Legend")?;
        write_roster_row(
            legend,
            0,
            &RosterRow {
                day: "Sun",
                date: 45179.0,
                time: "Dinner 1800-1930",
                headcount: "XC - 22",
                caterer: "Sample",
                menu: "Sample",
            },
        )?;

        Ok(workbook.save_to_buffer()?)
    }

    /// 種類を判別できない時刻セルを含むロースター
    pub fn generate_untyped_time() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let week = workbook.add_worksheet();
        week.set_name("Oct 2 - 8")?;
        write_roster_row(
            week,
            0,
            &RosterRow {
                day: "Mon",
                date: 45201.0,
                time: "1800-1930",
                headcount: "VO - 16",
                caterer: "Pasta Place",
                menu: "Lasagna",
            },
        )?;
        Ok(workbook.save_to_buffer()?)
    }

    /// 日付書式付きの日付セルを持つロースター
    pub fn generate_formatted_dates() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let date_format = Format::new().set_num_format("d mmm");

        let week = workbook.add_worksheet();
        week.set_name("Sep 11 - 17")?;
        write_roster_row(
            week,
            0,
            &RosterRow {
                day: "Fri",
                date: 45184.0,
                time: "Dinner 1800-1930",
                headcount: "WP - 20",
                caterer: "Sushi Co",
                menu: "Rolls",
            },
        )?;
        week.write_number_with_format(0, 1, 45184.0, &date_format)?;

        Ok(workbook.save_to_buffer()?)
    }
}

#[test]
fn test_parse_typical_roster() {
    let data = fixtures::generate_roster().unwrap();
    let parser = ScheduleParserBuilder::new().build().unwrap();
    let schedule = parser.parse(Cursor::new(data)).unwrap();

    assert_eq!(
        schedule.team_codes().collect::<Vec<_>>(),
        vec![TeamCode::Ba, TeamCode::Fb, TeamCode::Mbb, TeamCode::Wbb]
    );

    let football = schedule.meals_for(TeamCode::Fb);
    assert_eq!(football.len(), 2);
    assert_eq!(football[0].time, "0700-0830");
    assert_eq!(football[0].meal_type, MealType::Breakfast);
    assert_eq!(football[0].date, "11 Sep");
    assert_eq!(football[0].caterer_name, "Morning Grill");
    assert_eq!(football[0].meal_description, "Pancakes");

    // 2行目の主コードはBAのため、FBにもBAの時刻が使われる
    assert_eq!(football[1].time, "0730");
    assert_eq!(football[1].meal_type, MealType::Breakfast);
    assert_eq!(football[1].date, "22 Sep");
    assert_eq!(schedule.meals_for(TeamCode::Ba), football);

    let basketball = schedule.meals_for(TeamCode::Mbb);
    assert_eq!(basketball[0].time, "1800 - 1930");
    assert_eq!(basketball[0].meal_type, MealType::Dinner);
}

#[test]
fn test_team_details_from_first_referencing_row() {
    let data = fixtures::generate_roster().unwrap();
    let parser = ScheduleParserBuilder::new().build().unwrap();
    let schedule = parser.parse(Cursor::new(data)).unwrap();

    let football = schedule.team(TeamCode::Fb).unwrap();
    assert_eq!(football.name, "Football");
    assert_eq!(football.headcount, 120);
    assert_eq!(football.special_diets, "(gluten free)");

    let baseball = schedule.team(TeamCode::Ba).unwrap();
    assert_eq!(baseball.headcount, 40);
    assert_eq!(baseball.special_diets, "");

    let mens_basketball = schedule.team(TeamCode::Mbb).unwrap();
    assert_eq!(mens_basketball.headcount, 15);
    assert_eq!(mens_basketball.special_diets, "(1 vegan)");

    // 凡例シートのチームは含まれない
    assert!(schedule.team(TeamCode::Xc).is_none());
}

#[test]
fn test_sheet_selector_all_includes_legend() {
    let data = fixtures::generate_roster().unwrap();
    let parser = ScheduleParserBuilder::new()
        .with_sheet_selector(SheetSelector::All)
        .build()
        .unwrap();
    let schedule = parser.parse(Cursor::new(data)).unwrap();

    assert_eq!(schedule.meals_for(TeamCode::Xc).len(), 1);
    assert_eq!(schedule.team(TeamCode::Xc).unwrap().headcount, 22);
}

#[test]
fn test_untyped_time_aborts_upload() {
    let data = fixtures::generate_untyped_time().unwrap();
    let parser = ScheduleParserBuilder::new().build().unwrap();

    match parser.parse(Cursor::new(data)) {
        Err(TrainingTableError::MealTypeUndetectable { cell }) => assert_eq!(cell, "1800-1930"),
        other => panic!("Expected MealTypeUndetectable, got {:?}", other),
    }
}

#[test]
fn test_formatted_date_cells_use_serial_value() {
    let data = fixtures::generate_formatted_dates().unwrap();
    let parser = ScheduleParserBuilder::new().build().unwrap();
    let schedule = parser.parse(Cursor::new(data)).unwrap();

    assert_eq!(schedule.meals_for(TeamCode::Wp)[0].date, "15 Sep");
}

#[test]
fn test_parse_is_idempotent() {
    let data = fixtures::generate_roster().unwrap();
    let parser = ScheduleParserBuilder::new().build().unwrap();

    let first = parser.parse(Cursor::new(data.clone())).unwrap();
    let second = parser.parse(Cursor::new(data)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_format_meals_lines() {
    let data = fixtures::generate_roster().unwrap();
    let parser = ScheduleParserBuilder::new().build().unwrap();
    let schedule = parser.parse(Cursor::new(data)).unwrap();

    assert_eq!(
        format_meals(schedule.meals_for(TeamCode::Wbb)),
        vec!["Mon, 11 Sep: Taco Truck - Tacos"]
    );
}

#[test]
fn test_json_output() {
    let data = fixtures::generate_roster().unwrap();
    let parser = ScheduleParserBuilder::new().build().unwrap();
    let schedule = parser.parse(Cursor::new(data)).unwrap();

    let json = parser.render_to_string(&schedule, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["mealsByTeam"]["FB"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["teamDetails"]["MBB"]["name"], "Men's Basketball");
    assert_eq!(value["teamDetails"]["FB"]["code"], "FB");
}

#[test]
fn test_single_team_json_output() {
    let data = fixtures::generate_roster().unwrap();
    let parser = ScheduleParserBuilder::new().build().unwrap();
    let schedule = parser.parse(Cursor::new(data)).unwrap();

    let json = parser
        .render_to_string(&schedule.for_team(TeamCode::Mbb), OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let teams = value["mealsByTeam"].as_object().unwrap();
    assert_eq!(teams.keys().collect::<Vec<_>>(), vec!["MBB"]);
    assert_eq!(value["teamDetails"]["MBB"]["specialDiets"], "(1 vegan)");
    assert!(value["teamDetails"]["FB"].is_null());
}
