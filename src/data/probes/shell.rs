use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::utils::extract::{shell_version, version_token};
use crate::utils::{CommandExecutor, CommandLine};

const ENV_VERSION_PROBE: &str = "echo ${ZSH_VERSION:-$BASH_VERSION}";
const POWERSHELL_ARGS: [&str; 3] = [
    "-NoProfile",
    "-Command",
    "$PSVersionTable.PSVersion.ToString()",
];

/// Name and version of the login shell at `shell_path`.
///
/// Asks `<shell> --version` first. When the report names another known shell
/// (`sh` that is really bash), that shell is asked for its own version and
/// its answer wins; if it cannot be asked, the first report is kept under
/// the reported name. Shells without a `--version` flag are asked for their
/// version variables instead.
pub fn unix_shell(
    executor: &dyn CommandExecutor,
    shell_path: Option<&str>,
) -> Result<Option<String>> {
    let Some(shell_path) = shell_path else {
        return Ok(None);
    };
    let name = Path::new(shell_path)
        .file_name()
        .and_then(|value| value.to_str())
        .unwrap_or(shell_path)
        .to_string();

    match executor.execute(&CommandLine::new(shell_path).args(["--version"])) {
        Ok(output) => {
            if let Some(report) = shell_version(&output) {
                let label = report.name.unwrap_or_else(|| name.clone());
                if label != name
                    && let Some(version) = reported_shell_version(executor, &label)
                {
                    return Ok(Some(format!("{label} {version}")));
                }
                return Ok(Some(format!("{label} {}", report.version)));
            }
        }
        Err(err) => debug!(shell = %name, error = %err, "version flag probe failed"),
    }

    let version = executor
        .execute(&CommandLine::new(shell_path).args(["-c", ENV_VERSION_PROBE]))
        .ok()
        .and_then(|output| version_token(&output));
    Ok(Some(match version {
        Some(version) => format!("{name} {version}"),
        None => name,
    }))
}

fn reported_shell_version(executor: &dyn CommandExecutor, shell: &str) -> Option<String> {
    match executor.execute(&CommandLine::new(shell).args(["--version"])) {
        Ok(output) => shell_version(&output).map(|report| report.version),
        Err(err) => {
            debug!(shell, error = %err, "reported shell did not answer");
            None
        }
    }
}

/// Windows PowerShell, falling back to PowerShell 7 (`pwsh`).
pub fn powershell(executor: &dyn CommandExecutor) -> Result<Option<String>> {
    let output = executor
        .execute(&CommandLine::new("powershell").args(POWERSHELL_ARGS))
        .or_else(|err| {
            debug!(error = %err, "powershell probe failed, trying pwsh");
            executor.execute(&CommandLine::new("pwsh").args(POWERSHELL_ARGS))
        })?;
    Ok(version_token(&output).map(|version| format!("PowerShell {version}")))
}
