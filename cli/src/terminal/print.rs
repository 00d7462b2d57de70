use colored::*;
use tracing::info;

use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 10;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );

    print(&line);
}

/// Prints `key.....: value`, or only `value` from quiet level 2 on.
pub fn aligned_line(key: &str, value: &str, q_level: u8) {
    if q_level > 1 {
        print(value);
        return;
    }

    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let output: String = format!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.cyan(),
        dots.bright_black(),
        ":".bright_black(),
        value
    );
    print(&output);
}

pub fn fat_separator(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
}
