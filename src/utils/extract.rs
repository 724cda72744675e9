//! Pure helpers that turn raw command output into a short display value.
//!
//! Every function answers `None` when the expected shape is not present;
//! callers treat that as "nothing to show", never as a failure.

use std::sync::OnceLock;

use regex::Regex;

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

fn quoted_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r#""([^"]*)""#)
}

fn display_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?i)\b(vga|3d controller|display controller|geforce|radeon)\b")
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"\d+")
}

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"\d+(?:\.\d+)+")
}

fn known_shell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(
        &RE,
        r"(?i)\b(bash|zsh|fish|tcsh|mksh|ksh|dash|nushell|elvish|xonsh|powershell)\b",
    )
}

/// Trimmed, non-blank line at `index`. `\r\n` endings and the stray `\r`
/// that `wmic` emits are tolerated.
pub fn line_at(raw: &str, index: usize) -> Option<String> {
    raw.lines()
        .nth(index)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}

/// Collapses runs of whitespace, as found between columns of `wmic` tables.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn quoted_tokens(line: &str) -> Vec<&str> {
    quoted_re()
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Vendor and device of the first display adapter in `lspci -mm` output.
///
/// Expected line shape:
/// `01:00.0 "VGA compatible controller" "NVIDIA Corporation" "GA104 [GeForce RTX 3070]" ...`
pub fn pci_display_adapter(raw: &str) -> Option<String> {
    raw.lines()
        .filter(|line| !line.to_ascii_lowercase().contains("audio"))
        .filter(|line| display_class_re().is_match(line))
        .find_map(|line| {
            let mut tokens = quoted_tokens(line);
            if tokens
                .first()
                .is_some_and(|first| is_class_token(first))
            {
                tokens.remove(0);
            }
            let name = tokens
                .into_iter()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .take(2)
                .collect::<Vec<_>>()
                .join(" ");
            (!name.is_empty()).then_some(name)
        })
}

fn is_class_token(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    lower.contains("controller") || lower.contains("vga")
}

pub fn first_number(raw: &str) -> Option<String> {
    number_re().find(raw).map(|m| m.as_str().to_string())
}

/// Joins two numeric query outputs as `"{x}x{y}"`.
pub fn combine_resolution(horizontal: &str, vertical: &str) -> Option<String> {
    let x = first_number(horizontal)?;
    let y = first_number(vertical)?;
    Some(format!("{x}x{y}"))
}

/// Current mode of the primary connected output in `xrandr --current`
/// output, else of the first connected one.
pub fn xrandr_resolution(raw: &str) -> Option<String> {
    let mut fallback = None;
    for line in raw.lines() {
        if line.starts_with(' ') || !line.contains(" connected") {
            continue;
        }
        let Some(resolution) = parse_mode_token(line) else {
            continue;
        };
        if line.contains(" primary ") {
            return Some(resolution);
        }
        if fallback.is_none() {
            fallback = Some(resolution);
        }
    }
    fallback
}

fn parse_mode_token(line: &str) -> Option<String> {
    for token in line.split_whitespace() {
        if !token.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        let token = token.split('+').next().unwrap_or(token);
        let Some((w, h)) = token.split_once('x') else {
            continue;
        };
        if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
            return Some(format!("{w}x{h}"));
        }
    }
    None
}

/// Value of the first `Key: value` line in `system_profiler` output.
pub fn profiler_value(raw: &str, key: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        let rest = line.trim().strip_prefix(key)?;
        let value = rest.strip_prefix(':')?.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// `Resolution: 2560 x 1600 Retina` becomes `2560x1600`.
pub fn profiler_resolution(raw: &str) -> Option<String> {
    let value = profiler_value(raw, "Resolution")?;
    let mut numbers = number_re().find_iter(&value);
    let x = numbers.next()?.as_str();
    let y = numbers.next()?.as_str();
    Some(format!("{x}x{y}"))
}

/// First dotted version number, e.g. `5.2.15` out of `version 5.2.15(1)-release`.
pub fn version_token(raw: &str) -> Option<String> {
    version_re().find(raw).map(|m| m.as_str().to_string())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellReport {
    /// Known shell named by the report itself, lowercased.
    pub name: Option<String>,
    pub version: String,
}

/// Parses the first line of a `<shell> --version` report.
pub fn shell_version(raw: &str) -> Option<ShellReport> {
    let first = raw.lines().find(|line| !line.trim().is_empty())?;
    let version = version_token(first)?;
    let name = known_shell_re()
        .captures(first)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase());
    Some(ShellReport { name, version })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_at_skips_header() {
        let raw = "Name  \r\r\nNVIDIA GeForce RTX 3070  \r\r\n\r\r\n";
        assert_eq!(line_at(raw, 1).as_deref(), Some("NVIDIA GeForce RTX 3070"));
        assert_eq!(line_at(raw, 2), None);
        assert_eq!(line_at(raw, 9), None);
    }

    #[test]
    fn collapse_whitespace_between_columns() {
        assert_eq!(collapse_whitespace("LENOVO      20XW0055GE  "), "LENOVO 20XW0055GE");
    }

    #[test]
    fn pci_display_adapter_joins_vendor_and_device() {
        let raw = concat!(
            "00:1f.3 \"Audio device\" \"Intel Corporation\" \"Cannon Lake PCH cAVS\"\n",
            "01:00.0 \"VGA compatible controller\" \"CompanyA\" \"ProductB\" -ra1 \"Sub\" \"Dev\"\n",
        );
        assert_eq!(pci_display_adapter(raw).as_deref(), Some("CompanyA ProductB"));
    }

    #[test]
    fn pci_display_adapter_accepts_geforce_device_line() {
        let raw = "02:00.0 \"3D controller\" \"NVIDIA Corporation\" \"TU117M [GeForce GTX 1650 Mobile]\"\n";
        assert_eq!(
            pci_display_adapter(raw).as_deref(),
            Some("NVIDIA Corporation TU117M [GeForce GTX 1650 Mobile]")
        );
    }

    #[test]
    fn pci_display_adapter_absent_without_display_line() {
        let raw = "00:14.0 \"USB controller\" \"Intel Corporation\" \"xHCI\"\n";
        assert_eq!(pci_display_adapter(raw), None);
        assert_eq!(pci_display_adapter(""), None);
    }

    #[test]
    fn combine_resolution_from_numeric_queries() {
        let x = "CurrentHorizontalResolution  \r\r\n1920  \r\r\n";
        let y = "CurrentVerticalResolution  \r\r\n1080  \r\r\n";
        assert_eq!(combine_resolution(x, y).as_deref(), Some("1920x1080"));
        assert_eq!(combine_resolution(x, "CurrentVerticalResolution"), None);
    }

    #[test]
    fn xrandr_prefers_primary_output() {
        let raw = concat!(
            "Screen 0: minimum 320 x 200, current 4480 x 1440, maximum 16384 x 16384\n",
            "HDMI-1 connected 1920x1080+2560+0 (normal left inverted right) 527mm x 296mm\n",
            "   1920x1080     60.00*+\n",
            "DP-1 connected primary 2560x1440+0+0 (normal left inverted right) 597mm x 336mm\n",
            "   2560x1440    143.97*+\n",
            "DP-2 disconnected (normal left inverted right x axis y axis)\n",
        );
        assert_eq!(xrandr_resolution(raw).as_deref(), Some("2560x1440"));
    }

    #[test]
    fn xrandr_falls_back_to_first_connected() {
        let raw = "eDP-1 connected 1366x768+0+0 (normal) 344mm x 193mm\n";
        assert_eq!(xrandr_resolution(raw).as_deref(), Some("1366x768"));
        assert_eq!(xrandr_resolution("DP-2 disconnected\n"), None);
    }

    #[test]
    fn profiler_lookups() {
        let raw = concat!(
            "Graphics/Displays:\n\n",
            "    Apple M1:\n\n",
            "      Chipset Model: Apple M1\n",
            "      Displays:\n",
            "        Color LCD:\n",
            "          Resolution: 2560 x 1600 Retina\n",
        );
        assert_eq!(profiler_value(raw, "Chipset Model").as_deref(), Some("Apple M1"));
        assert_eq!(profiler_resolution(raw).as_deref(), Some("2560x1600"));
        assert_eq!(profiler_value(raw, "Vendor"), None);
    }

    #[test]
    fn shell_version_reports_known_name() {
        let report = shell_version(
            "GNU bash, version 5.2.15(1)-release (x86_64-pc-linux-gnu)\nCopyright (C) 2022",
        )
        .unwrap();
        assert_eq!(report.name.as_deref(), Some("bash"));
        assert_eq!(report.version, "5.2.15");

        let report = shell_version("zsh 5.9 (x86_64-apple-darwin22.0)").unwrap();
        assert_eq!(report.name.as_deref(), Some("zsh"));
        assert_eq!(report.version, "5.9");
    }

    #[test]
    fn shell_version_without_number_is_absent() {
        assert_eq!(shell_version("sh: 0: Illegal option --"), None);
        assert_eq!(shell_version(""), None);
    }

    #[test]
    fn version_token_ignores_bare_numbers() {
        assert_eq!(version_token("build 42"), None);
        assert_eq!(version_token("5.1.19041.3803").as_deref(), Some("5.1.19041.3803"));
    }
}
