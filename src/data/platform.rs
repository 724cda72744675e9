use std::env;

/// Operating system family the panel dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlatformId {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl PlatformId {
    /// Identity of the running process. Read once in `main` and passed down.
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    pub fn from_os(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "windows" | "win32" => PlatformId::Windows,
            "linux" => PlatformId::Linux,
            "macos" | "darwin" => PlatformId::MacOs,
            _ => PlatformId::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlatformId::Windows => "windows",
            PlatformId::Linux => "linux",
            PlatformId::MacOs => "macos",
            PlatformId::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_os_maps_known_families() {
        assert_eq!(PlatformId::from_os("windows"), PlatformId::Windows);
        assert_eq!(PlatformId::from_os("win32"), PlatformId::Windows);
        assert_eq!(PlatformId::from_os("linux"), PlatformId::Linux);
        assert_eq!(PlatformId::from_os("macos"), PlatformId::MacOs);
        assert_eq!(PlatformId::from_os("Darwin"), PlatformId::MacOs);
    }

    #[test]
    fn from_os_falls_back_to_other() {
        assert_eq!(PlatformId::from_os("freebsd"), PlatformId::Other);
        assert_eq!(PlatformId::from_os(""), PlatformId::Other);
    }

    #[test]
    fn current_matches_build_target() {
        let current = PlatformId::current();
        if cfg!(target_os = "linux") {
            assert_eq!(current, PlatformId::Linux);
        } else if cfg!(target_os = "windows") {
            assert_eq!(current, PlatformId::Windows);
        }
        assert_eq!(PlatformId::from_os(current.label()), current);
    }
}
