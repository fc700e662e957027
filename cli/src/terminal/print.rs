use std::time::Duration;

use colored::*;
use scenegen_core::submit::SubmissionReport;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are written verbatim, without a level symbol.
pub const PRINT_TARGET: &str = "scenegen::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().yellow());
    print(&format!("{} {}", idx_str.bright_black(), name.bright_cyan().bold()));
}

pub fn as_tree_one_level(key_value_pair: &[(&str, ColoredString)]) {
    let key_width: usize = key_value_pair.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key,
            ".".repeat(key_width - key.len()).bright_black(),
            ":".bright_black(),
            value
        );
        print(&output);
    }
}

pub fn submission_summary(report: &SubmissionReport, total_time: Duration) {
    let created: ColoredString = format!("{} created", report.submitted.len()).bold().green();
    let skipped: ColoredString = format!("{} skipped", report.skipped.len()).bold().yellow();
    let failed: ColoredString = match report.failed.len() {
        0 => "0 failed".normal(),
        n => format!("{n} failed").bold().red(),
    };
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    fat_separator();
    print(&format!("Scenes: {created}, {skipped}, {failed} in {total_time}"));
}
