use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SysfactsError};
use crate::utils::extract::{combine_resolution, profiler_resolution, xrandr_resolution};
use crate::utils::{CommandExecutor, CommandLine};

pub const DRM_ROOT: &str = "/sys/class/drm";

/// Two numeric queries, one per axis, joined as `"{x}x{y}"`.
pub fn wmic_resolution(executor: &dyn CommandExecutor) -> Result<Option<String>> {
    let query = |property: &str| {
        executor.execute(&CommandLine::new("wmic").args([
            "path",
            "Win32_VideoController",
            "get",
            property,
        ]))
    };
    let horizontal = query("CurrentHorizontalResolution")?;
    let vertical = query("CurrentVerticalResolution")?;
    combine_resolution(&horizontal, &vertical)
        .map(Some)
        .ok_or_else(|| SysfactsError::parse("Resolution", "no numeric value per axis"))
}

/// `xrandr` when an X server answers, else the first connected DRM connector.
pub fn linux_resolution(executor: &dyn CommandExecutor, drm_root: &Path) -> Result<Option<String>> {
    match executor.execute(&CommandLine::new("xrandr").args(["--current"])) {
        Ok(output) => {
            if let Some(resolution) = xrandr_resolution(&output) {
                return Ok(Some(resolution));
            }
        }
        Err(err) => debug!(error = %err, "xrandr unavailable, reading drm connectors"),
    }
    Ok(drm_resolution(drm_root))
}

pub fn profiler_display_resolution(executor: &dyn CommandExecutor) -> Result<Option<String>> {
    let output =
        executor.execute(&CommandLine::new("system_profiler").args(["SPDisplaysDataType"]))?;
    Ok(profiler_resolution(&output))
}

fn drm_resolution(root: &Path) -> Option<String> {
    let mut entries = fs::read_dir(root)
        .ok()?
        .flatten()
        .filter(|entry| entry.file_name().to_string_lossy().contains('-'))
        .map(|entry| entry.path())
        .collect::<Vec<_>>();
    entries.sort();
    entries.into_iter().find_map(|path| {
        let status = fs::read_to_string(path.join("status")).ok()?;
        if status.trim() != "connected" {
            return None;
        }
        let modes = fs::read_to_string(path.join("modes")).ok()?;
        let mode = modes.lines().find(|line| !line.trim().is_empty())?;
        let (w, h) = mode.trim().split_once('x')?;
        let w = w.parse::<u32>().ok()?;
        let h = h.parse::<u32>().ok()?;
        Some(format!("{w}x{h}"))
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::utils::FakeExecutor;

    const NO_DRM: &str = "/nonexistent/sysfacts/drm";

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sysfacts-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn wmic_resolution_combines_axes() {
        let fake = FakeExecutor::new()
            .respond(
                "wmic path Win32_VideoController get CurrentHorizontalResolution",
                "CurrentHorizontalResolution  \r\r\n1920  \r\r\n",
            )
            .respond(
                "wmic path Win32_VideoController get CurrentVerticalResolution",
                "CurrentVerticalResolution  \r\r\n1080  \r\r\n",
            );
        assert_eq!(wmic_resolution(&fake).unwrap().as_deref(), Some("1920x1080"));
    }

    #[test]
    fn wmic_resolution_fails_when_one_axis_fails() {
        let fake = FakeExecutor::new().respond(
            "wmic path Win32_VideoController get CurrentHorizontalResolution",
            "CurrentHorizontalResolution\r\r\n1920\r\r\n",
        );
        assert!(wmic_resolution(&fake).is_err());
    }

    #[test]
    fn wmic_resolution_without_numbers_is_parse_error() {
        let fake = FakeExecutor::new()
            .respond(
                "wmic path Win32_VideoController get CurrentHorizontalResolution",
                "CurrentHorizontalResolution\r\r\n\r\r\n",
            )
            .respond(
                "wmic path Win32_VideoController get CurrentVerticalResolution",
                "CurrentVerticalResolution\r\r\n1080\r\r\n",
            );
        assert!(matches!(
            wmic_resolution(&fake),
            Err(SysfactsError::Parse { .. })
        ));
    }

    #[test]
    fn linux_resolution_reads_xrandr() {
        let fake = FakeExecutor::new().respond(
            "xrandr --current",
            "eDP-1 connected primary 2880x1800+0+0 (normal) 302mm x 189mm\n",
        );
        assert_eq!(
            linux_resolution(&fake, Path::new(NO_DRM)).unwrap().as_deref(),
            Some("2880x1800")
        );
    }

    #[test]
    fn linux_resolution_without_xrandr_or_drm_is_absent() {
        let fake = FakeExecutor::new();
        assert_eq!(linux_resolution(&fake, Path::new(NO_DRM)).unwrap(), None);
    }

    #[test]
    fn linux_resolution_falls_back_to_drm() {
        let root = scratch_dir("drm");
        let off = root.join("card0-HDMI-A-1");
        let on = root.join("card0-eDP-1");
        fs::create_dir_all(&off).unwrap();
        fs::create_dir_all(&on).unwrap();
        fs::write(off.join("status"), "disconnected\n").unwrap();
        fs::write(on.join("status"), "connected\n").unwrap();
        fs::write(on.join("modes"), "2256x1504\n1920x1200\n").unwrap();

        let fake = FakeExecutor::new();
        assert_eq!(
            linux_resolution(&fake, &root).unwrap().as_deref(),
            Some("2256x1504")
        );
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn profiler_resolution_parses_dimensions() {
        let fake = FakeExecutor::new().respond(
            "system_profiler SPDisplaysDataType",
            "        Color LCD:\n          Resolution: 3024 x 1964 Retina\n",
        );
        assert_eq!(
            profiler_display_resolution(&fake).unwrap().as_deref(),
            Some("3024x1964")
        );
    }
}
