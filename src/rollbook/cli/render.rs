//! # Rendering Module
//!
//! Turns command results into terminal text. Every renderer returns a `String`
//! so layout can be tested without a terminal; the public functions pick colour
//! from stdout and the `_internal` variants take it explicitly.
//!
//! Column widths are computed with `unicode-width` so names with wide
//! characters still line up.

use super::styles::{message_color, paint, Palette};
use rollbook::api::CmdMessage;
use rollbook::model::{StudentRecord, ThemePreference, ViewMode};
use rollbook::query::Stats;
use rollbook::validation::{phone_digits, ErrorMap};
use std::io::IsTerminal;
use unicode_width::UnicodeWidthStr;

pub const NAME_WIDTH: usize = 28;
pub const DEPARTMENT_WIDTH: usize = 34;
pub const CARD_WIDTH: usize = 56;

const TABLE_HEADERS: [&str; 6] = ["Roll No", "Name", "Department", "Year", "Email", "Phone"];

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Renders `students` in the requested layout. When nothing is listed, `has_records`
/// tells a search that matched nothing apart from an empty roll book.
pub fn render_student_list(
    students: &[StudentRecord],
    view: ViewMode,
    theme: ThemePreference,
    has_records: bool,
) -> String {
    if students.is_empty() {
        return render_empty_state(has_records);
    }
    let palette = Palette::for_theme(theme);
    match view {
        ViewMode::Table => render_table_internal(students, palette, use_color()),
        ViewMode::Cards => render_cards_internal(students, palette, false, use_color()),
    }
}

/// Full detail blocks, including each record's id.
pub fn render_full_students(students: &[StudentRecord], theme: ThemePreference) -> String {
    render_cards_internal(students, Palette::for_theme(theme), true, use_color())
}

pub fn render_empty_state(has_records: bool) -> String {
    if has_records {
        "No Matching Students\nTry adjusting your search criteria or filters\n".to_string()
    } else {
        "No Students Yet\nStart by adding your first student record\n".to_string()
    }
}

fn render_table_internal(students: &[StudentRecord], palette: Palette, use_color: bool) -> String {
    let rows: Vec<[String; 6]> = students
        .iter()
        .map(|s| {
            [
                s.roll_no.clone(),
                truncate_to_width(&s.name, NAME_WIDTH),
                truncate_to_width(&s.department, DEPARTMENT_WIDTH),
                s.year.label().to_string(),
                s.email.clone(),
                format_phone(&s.phone),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let header_line = join_columns(&header, &widths);
    out.push_str(&paint(&header_line, Some(palette.heading), true, use_color));
    out.push('\n');

    let rule_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&paint(&"─".repeat(rule_width), Some(palette.muted), false, use_color));
    out.push('\n');

    for row in &rows {
        let roll = pad_to_width(&row[0], widths[0]);
        let rest = join_columns(&row[1..], &widths[1..]);
        out.push_str(&paint(&roll, Some(palette.accent), true, use_color));
        out.push_str("  ");
        out.push_str(&rest);
        out.push('\n');
    }
    out
}

fn render_cards_internal(
    students: &[StudentRecord],
    palette: Palette,
    show_id: bool,
    use_color: bool,
) -> String {
    let border = |s: &str| paint(s, Some(palette.muted), false, use_color);
    let mut out = String::new();

    for (i, s) in students.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&border(&format!("┌{}", "─".repeat(CARD_WIDTH))));
        out.push('\n');

        let title = paint(
            &truncate_to_width(&s.name, CARD_WIDTH - 2),
            Some(palette.accent),
            true,
            use_color,
        );
        out.push_str(&format!("{} {}\n", border("│"), title));
        out.push_str(&format!(
            "{} {}\n",
            border("│"),
            paint(&s.roll_no, Some(palette.muted), false, use_color)
        ));

        let mut fields = vec![
            ("Department", s.department.clone()),
            ("Year", s.year.label().to_string()),
            ("Email", s.email.clone()),
            ("Phone", format_phone(&s.phone)),
        ];
        if show_id {
            fields.push(("Id", s.id.to_string()));
        }
        for (label, value) in fields {
            out.push_str(&format!("{}   {:<11}{}\n", border("│"), label, value));
        }

        out.push_str(&border(&format!("└{}", "─".repeat(CARD_WIDTH))));
        out.push('\n');
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    format!(
        "Total students: {}  Departments: {}  Showing: {}\n",
        stats.total, stats.departments, stats.listed
    )
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

/// One line per failing field, in field order.
pub fn render_field_errors(errors: &ErrorMap) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}\n", field, message))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|m| {
            let bold = message_color(&m.level).is_some();
            format!(
                "{}\n",
                paint(&m.content, message_color(&m.level), bold, use_color)
            )
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// `(123) 456-7890` for numbers with exactly ten digits, otherwise unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits = phone_digits(phone);
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

fn join_columns(cells: &[String], widths: &[usize]) -> String {
    let joined: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect();
    joined.join("  ").trim_end().to_string()
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
