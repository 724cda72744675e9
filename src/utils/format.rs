use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MIB: u64 = 1024 * 1024;

pub fn text_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

/// Whole mebibytes, rounded down.
pub fn mega_bytes(bytes: u64) -> u64 {
    bytes / MIB
}

/// Splits an uptime into whole days, hours and minutes; leftover seconds are dropped.
pub fn split_uptime(secs: u64) -> (u64, u64, u64) {
    let days = secs / 86_400;
    let remaining = secs % 86_400;
    let hours = remaining / 3_600;
    let minutes = (remaining / 60) % 60;
    (days, hours, minutes)
}

pub fn format_uptime(secs: u64) -> String {
    let (days, hours, minutes) = split_uptime(secs);
    format!("{days} days, {hours} hours, {minutes} mins")
}

pub fn format_memory(free_bytes: u64, total_bytes: u64) -> String {
    format!(
        "{}MiB / {}MiB",
        mega_bytes(free_bytes),
        mega_bytes(total_bytes)
    )
}

pub fn fit_text(value: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text_width(value) <= max_len {
        return value.to_string();
    }
    if max_len <= 3 {
        return take_width(value, max_len);
    }
    let mut trimmed = take_width(value, max_len - 3);
    trimmed.push_str("...");
    trimmed
}

fn take_width(value: &str, max_len: usize) -> String {
    let mut output = String::new();
    let mut width = 0;
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_len {
            break;
        }
        output.push(ch);
        width += ch_width;
    }
    output
}
