//! Source excerpt rendering — a code frame around a flagged location.
//!
//! Output shape:
//!
//! ```text
//!   18 |   const proxy = agent();
//! > 19 |   assert.strictEqual(true, true);
//!      |   ^ Redundant Assertion
//!   20 | });
//! ```

use crate::types::Location;

/// Render a code frame for `location` with `context_lines` lines on each
/// side, marking the column and labelling the caret with `message`.
pub fn render(source: &str, location: Location, context_lines: u32, message: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    if lines.is_empty() || location.line == 0 {
        return String::new();
    }
    let target = (location.line as usize).min(lines.len());
    let first = target.saturating_sub(context_lines as usize).max(1);
    let last = (target + context_lines as usize).min(lines.len());
    let gutter_width = last.to_string().len();

    let mut out = String::new();
    for number in first..=last {
        let line = lines[number - 1];
        if number == target {
            out.push_str(&format!("> {number:>gutter_width$} | {line}\n"));
            let caret_pad = " ".repeat(location.column as usize);
            out.push_str(&format!(
                "  {blank:>gutter_width$} | {caret_pad}^ {message}\n",
                blank = ""
            ));
        } else {
            out.push_str(&format!("  {number:>gutter_width$} | {line}\n"));
        }
    }
    // Trailing newline is noise for consumers that embed the frame.
    out.pop();
    out
}
