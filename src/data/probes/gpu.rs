use crate::error::Result;
use crate::utils::extract::{line_at, pci_display_adapter, profiler_value};
use crate::utils::{CommandExecutor, CommandLine};

/// `wmic` prints a `Name` header; the first adapter sits on line 1.
pub fn wmic_gpu(executor: &dyn CommandExecutor) -> Result<Option<String>> {
    let output = executor.execute(
        &CommandLine::new("wmic").args(["path", "win32_VideoController", "get", "name"]),
    )?;
    Ok(line_at(&output, 1))
}

pub fn lspci_gpu(executor: &dyn CommandExecutor) -> Result<Option<String>> {
    let output = executor.execute(&CommandLine::new("lspci").args(["-mm"]))?;
    Ok(pci_display_adapter(&output))
}

pub fn profiler_gpu(executor: &dyn CommandExecutor) -> Result<Option<String>> {
    let output =
        executor.execute(&CommandLine::new("system_profiler").args(["SPDisplaysDataType"]))?;
    Ok(profiler_value(&output, "Chipset Model"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FakeExecutor;

    #[test]
    fn wmic_gpu_reads_second_line() {
        let fake = FakeExecutor::new().respond(
            "wmic path win32_VideoController get name",
            "Name\r\r\nNVIDIA GeForce RTX 3070\r\r\n\r\r\n",
        );
        assert_eq!(
            wmic_gpu(&fake).unwrap().as_deref(),
            Some("NVIDIA GeForce RTX 3070")
        );
    }

    #[test]
    fn lspci_gpu_picks_display_adapter() {
        let fake = FakeExecutor::new().respond(
            "lspci -mm",
            concat!(
                "00:00.0 \"Host bridge\" \"Intel Corporation\" \"8th Gen Core Processor Host Bridge\"\n",
                "00:02.0 \"VGA compatible controller\" \"Intel Corporation\" \"UHD Graphics 630\"\n",
            ),
        );
        assert_eq!(
            lspci_gpu(&fake).unwrap().as_deref(),
            Some("Intel Corporation UHD Graphics 630")
        );
    }

    #[test]
    fn missing_lspci_is_an_error() {
        let fake = FakeExecutor::new();
        assert!(lspci_gpu(&fake).is_err());
    }

    #[test]
    fn profiler_gpu_reads_chipset_model() {
        let fake = FakeExecutor::new().respond(
            "system_profiler SPDisplaysDataType",
            "Graphics/Displays:\n\n    Apple M2:\n\n      Chipset Model: Apple M2\n",
        );
        assert_eq!(profiler_gpu(&fake).unwrap().as_deref(), Some("Apple M2"));
    }
}
