use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::analysis::{Analysis, Distribution, PassFail, ResultRow, Summary, PASS_MARK};
use crate::config::ColorMode;

/// Width of section rules
const SECTION_WIDTH: usize = 40;
/// Width of the results table rules
const TABLE_WIDTH: usize = 45;
const NAME_COLUMN: usize = 15;
const VALUE_COLUMN: usize = 10;

/// Decide whether to emit ANSI colours.
/// `Auto` colours only when stdout is a TTY.
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Auto => std::io::stdout().is_terminal(),
        ColorMode::Always => true,
        ColorMode::Never => false,
    }
}

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// "=====" / " TITLE" / "-----"
fn section_heading(title: &str, use_colors: bool) -> String {
    let title = if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    };
    format!(
        "{}\n {}\n{}",
        rule('=', SECTION_WIDTH),
        title,
        rule('-', SECTION_WIDTH)
    )
}

/// Main menu with the three numbered options
pub fn format_menu(use_colors: bool) -> String {
    let title = if use_colors {
        "GradeBook Analyzer CLI".bold().cyan().to_string()
    } else {
        "GradeBook Analyzer CLI".to_string()
    };
    [
        String::new(),
        rule('=', SECTION_WIDTH),
        format!(" {}", title),
        rule('=', SECTION_WIDTH),
        "1. Manual entry of Student Marks".to_string(),
        "2. Load marks from CSV file".to_string(),
        "3. Exit Program".to_string(),
        rule('-', SECTION_WIDTH),
    ]
    .join("\n")
}

/// Count and extrema as integers; mean and median to two decimal places
pub fn format_statistics(summary: &Summary, use_colors: bool) -> String {
    [
        section_heading("STATISTICAL SUMMARY", use_colors),
        format!("Total Students: {}", summary.count),
        format!("Highest Score (Max): {}", summary.max),
        format!("Lowest Score (Min): {}", summary.min),
        format!("Class Average (Mean): {:.2}", summary.average),
        format!("Class Median: {:.2}", summary.median),
        rule('-', SECTION_WIDTH),
    ]
    .join("\n")
}

pub fn format_grade_distribution(distribution: &Distribution, use_colors: bool) -> String {
    let mut lines = vec![section_heading("GRADE DISTRIBUTION", use_colors)];
    lines.extend(
        distribution
            .iter()
            .map(|(grade, count)| format!("Grade {}: {} student(s)", grade, count)),
    );
    lines.push(rule('-', SECTION_WIDTH));
    lines.join("\n")
}

/// Pass and fail counts. Name lists are left out for an empty side.
pub fn format_pass_fail(pass_fail: &PassFail, use_colors: bool) -> String {
    let mut lines = vec![
        section_heading("PASS/FAIL SUMMARY", use_colors),
        format!(
            "Total Passed Students (Score >= {}): {}",
            PASS_MARK,
            pass_fail.passed.len()
        ),
    ];
    if !pass_fail.passed.is_empty() {
        let names = pass_fail.passed.join(", ");
        if use_colors {
            lines.push(format!("Names: {}", names.green()));
        } else {
            lines.push(format!("Names: {}", names));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Total Failed Students (Score < {}): {}",
        PASS_MARK,
        pass_fail.failed.len()
    ));
    if !pass_fail.failed.is_empty() {
        let names = pass_fail.failed.join(", ");
        if use_colors {
            lines.push(format!("Names: {}", names.red()));
        } else {
            lines.push(format!("Names: {}", names));
        }
    }
    lines.push(rule('-', SECTION_WIDTH));
    lines.join("\n")
}

/// Name, Marks and Grade columns, one row per student.
/// Names are left-aligned in 15 chars; longer names push the row wider.
pub fn format_results_table(rows: &[ResultRow], use_colors: bool) -> String {
    let title = if use_colors {
        "FINAL CLASS RESULTS TABLE".bold().to_string()
    } else {
        "FINAL CLASS RESULTS TABLE".to_string()
    };
    let mut lines = vec![
        rule('=', TABLE_WIDTH),
        format!(" {}", title),
        rule('=', TABLE_WIDTH),
        format!(
            "{:<name$}{:>value$}{:>value$}",
            "Name",
            "Marks",
            "Grade",
            name = NAME_COLUMN,
            value = VALUE_COLUMN
        ),
        rule('-', TABLE_WIDTH),
    ];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<name$}{:>value$}{:>value$}",
            row.name,
            row.score,
            row.grade.to_string(),
            name = NAME_COLUMN,
            value = VALUE_COLUMN
        )
    }));
    lines.push(rule('-', TABLE_WIDTH));
    lines.join("\n")
}

/// Full report: statistics, distribution, pass/fail, then the results table
pub fn format_report(analysis: &Analysis, use_colors: bool) -> String {
    [
        format_statistics(&analysis.summary, use_colors),
        format_grade_distribution(&analysis.distribution, use_colors),
        format_pass_fail(&analysis.pass_fail, use_colors),
        format_results_table(&analysis.rows, use_colors),
    ]
    .join("\n\n")
}
