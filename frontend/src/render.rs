use std::fmt::Write;

use serde_json::json;
use shards_rewards::{RewardResult, ShardsError};

use crate::types::Outcome;

const HEADERS: [&str; 3] = ["User", "Lock Size", "Shards Reward"];

/// Render a result as a plain-text table with a closing `Total` row.
///
/// Lock sizes use two decimals, rewards four.
pub fn render_table(result: &RewardResult) -> String {
    let mut rows: Vec<[String; 3]> = result
        .users
        .iter()
        .map(|u| {
            [
                u.label.clone(),
                to_fixed(u.lock_size, 2),
                to_fixed(u.reward, 4),
            ]
        })
        .collect();
    rows.push([
        "Total".to_string(),
        to_fixed(result.total_locked_tokens, 2),
        to_fixed(result.total_rewards, 4),
    ]);

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<w0$}  {:>w1$}  {:>w2$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    );
    for row in &rows {
        let _ = writeln!(
            out,
            "{:<w0$}  {:>w1$}  {:>w2$}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        );
    }
    out
}

/// Format `value` with `digits` decimals, rounding exact ties away from zero.
///
/// `{:.N}` rounds a tie such as 0.125 to even ("0.12"); table cells round
/// it up ("0.13").
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // Every finite f64 has a terminating expansion within 1074 decimals.
    let exact = format!("{magnitude:.1074}");
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        return format!("{sign}{magnitude:.digits$}");
    };
    let tail = &frac_part[digits..];
    let tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if tie {
        format!("{sign}{}", increment_last_digit(int_part, &frac_part[..digits]))
    } else {
        format!("{sign}{magnitude:.digits$}")
    }
}

/// Add one unit in the last place of `int_part.frac`, carrying as needed.
fn increment_last_digit(int_part: &str, frac: &str) -> String {
    let mut digits: Vec<u8> = int_part.bytes().chain(frac.bytes()).collect();
    let mut i = digits.len();
    loop {
        if i == 0 {
            digits.insert(0, b'1');
            break;
        }
        i -= 1;
        if digits[i] == b'9' {
            digits[i] = b'0';
        } else {
            digits[i] += 1;
            break;
        }
    }

    let split = digits.len() - frac.len();
    let mut out = String::from_utf8_lossy(&digits[..split]).into_owned();
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&digits[split..]));
    }
    out
}

/// Render whatever the form currently shows.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Empty => "No results yet. Enter values and calculate.\n".to_string(),
        Outcome::Result(r) => render_table(r),
        Outcome::Error(e) => format!("Error: {e}\n"),
    }
}

/// JSON document for a calculation: the result itself, or `{"error": "..."}`.
pub fn to_json_value(result: &Result<RewardResult, ShardsError>) -> serde_json::Value {
    match result {
        Ok(r) => serde_json::to_value(r).unwrap_or_else(|e| json!({ "error": e.to_string() })),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

pub fn to_json(result: &Result<RewardResult, ShardsError>) -> String {
    // A `Value` always serializes.
    serde_json::to_string_pretty(&to_json_value(result)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shards_rewards::compute;

    #[test]
    fn test_table_formatting() {
        let result = compute(&[100.0; 5], 1000.0).unwrap();
        let table = render_table(&result);
        let lines: Vec<&str> = table.lines().collect();

        // header, rule, five users, total
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("User"));
        assert!(lines[0].contains("Shards Reward"));
        assert!(lines[2].starts_with("User 1"));
        assert!(lines[2].contains("100.00"));
        assert!(lines[2].contains("5.6569"));
        assert!(lines[7].starts_with("Total"));
        assert!(lines[7].contains("500.00"));
        assert!(lines[7].contains("28.2843"));
    }

    #[test]
    fn test_to_fixed_rounds_ties_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.625, 2), "0.63");
        assert_eq!(to_fixed(1.375, 2), "1.38");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(0.96875, 4), "0.9688");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_to_fixed_non_ties() {
        // 0.115 is stored slightly above the midpoint, 9.995 slightly below.
        assert_eq!(to_fixed(0.115, 2), "0.12");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        assert_eq!(to_fixed(100.0, 2), "100.00");
        assert_eq!(to_fixed(0.0, 4), "0.0000");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
    }

    #[test]
    fn test_table_rounds_tied_lock_sizes_up() {
        let result = compute(&[0.125, 0.625, 100.0, 100.0, 100.0], 1000.0).unwrap();
        let table = render_table(&result);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].starts_with("User 1"));
        assert!(lines[2].contains(" 0.13 "));
        assert!(lines[3].contains(" 0.63 "));
        assert!(lines[7].contains("300.75"));
    }

    #[test]
    fn test_columns_aligned() {
        let result = compute(&[123456.789, 1.0, 0.0, 0.0, 0.0], 1_000_000.0).unwrap();
        let table = render_table(&result);
        let widths: Vec<usize> = table.lines().map(str::len).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_error_outcome() {
        let outcome = Outcome::Error(ShardsError::ZeroLocked);
        assert_eq!(
            render_outcome(&outcome),
            "Error: Total Locked Tokens must be > 0\n"
        );
    }

    #[test]
    fn test_render_empty_outcome() {
        assert!(render_outcome(&Outcome::Empty).starts_with("No results"));
    }

    #[test]
    fn test_json_shape() {
        let value = to_json_value(&compute(&[100.0; 5], 1000.0));
        assert_eq!(value["users"].as_array().unwrap().len(), 5);
        assert_eq!(value["users"][0]["user"], "User 1");
        assert_eq!(value["users"][0]["lockSize"], 100.0);
        assert_eq!(value["total_locked_tokens"], 500.0);
        assert!(value["total_rewards"].as_f64().unwrap() > 28.28);
    }

    #[test]
    fn test_json_error_shape() {
        let value = to_json_value(&compute(&[-5.0, 0.0, 0.0, 0.0, 0.0], 1000.0));
        assert_eq!(value, json!({ "error": "Lock sizes must be non-negative" }));
    }
}
