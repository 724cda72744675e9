use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::utils::extract::{collapse_whitespace, line_at};
use crate::utils::{CommandExecutor, CommandLine};

pub const DMI_ROOT: &str = "/sys/devices/virtual/dmi/id";

const PLACEHOLDERS: [&str; 6] = [
    "to be filled by o.e.m.",
    "default string",
    "system product name",
    "system manufacturer",
    "not applicable",
    "none",
];

/// `Manufacturer  Model` header followed by one row of values.
pub fn wmic_host(executor: &dyn CommandExecutor) -> Result<Option<String>> {
    let output = executor.execute(
        &CommandLine::new("wmic").args(["computersystem", "get", "manufacturer,model"]),
    )?;
    Ok(line_at(&output, 1).map(|line| collapse_whitespace(&line)))
}

pub fn sysctl_host(executor: &dyn CommandExecutor) -> Result<Option<String>> {
    let output = executor.execute(&CommandLine::new("sysctl").args(["-n", "hw.model"]))?;
    Ok(line_at(&output, 0))
}

/// Vendor and product name from the DMI tables under `root`.
pub fn dmi_host(root: &Path) -> Option<String> {
    let parts = ["sys_vendor", "product_name"]
        .iter()
        .filter_map(|name| read_dmi_value(&root.join(name)))
        .collect::<Vec<_>>();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn read_dmi_value(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let value = content.trim();
    if value.is_empty() || PLACEHOLDERS.contains(&value.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some(value.to_string())
}
