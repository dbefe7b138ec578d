//! Human-readable file size formatting.

/// Units in 1024-steps. `u64::MAX` is below 1024^7, so the table can never
/// be exceeded by a real total.
const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with the largest unit whose value is >= 1.
///
/// The value is rounded to two decimal places and always shows at least one
/// decimal: `1023` -> `"1023.0 B"`, `1024` -> `"1.0 KB"`, `1536` ->
/// `"1.5 KB"`. Zero is the special case `"0B"`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0B");
    }

    let mut index = 0;
    let mut scaled = bytes;
    while scaled >= 1024 {
        scaled /= 1024;
        index += 1;
    }

    let value = bytes as f64 / 1024f64.powi(index as i32);
    let hundredths = (value * 100.0).round() as u64;
    let rendered = if hundredths % 10 == 0 {
        format!("{:.1}", hundredths as f64 / 100.0)
    } else {
        format!("{:.2}", hundredths as f64 / 100.0)
    };
    format!("{rendered} {}", UNITS[index])
}
