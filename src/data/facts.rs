use std::env;

use sysinfo::{
    CpuRefreshKind, MemoryRefreshKind, Pid, ProcessRefreshKind, ProcessesToUpdate, RefreshKind,
    System, UpdateKind, Users,
};
use tracing::debug;

/// One snapshot of the local facts the synchronous fields read from.
#[derive(Clone, Debug, Default)]
pub struct HostFacts {
    pub cpu_model: String,
    pub cpu_speed_mhz: u64,
    pub cpu_count: usize,
    pub total_memory: u64,
    pub free_memory: u64,
    pub uptime_secs: u64,
    pub username: String,
    pub hostname: String,
    pub os_version: String,
    pub os_arch: String,
    pub kernel_version: String,
    pub term_program: Option<String>,
    pub term_program_version: Option<String>,
    pub shell: Option<String>,
}

impl HostFacts {
    pub fn collect() -> Self {
        let mut system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );
        let (cpu_model, cpu_speed_mhz) = system
            .cpus()
            .first()
            .map(|cpu| (cpu.brand().trim().to_string(), cpu.frequency()))
            .unwrap_or_default();
        let cpu_count = system.cpus().len();
        let username = current_username(&mut system)
            .or_else(|| non_empty_var("USER"))
            .or_else(|| non_empty_var("USERNAME"))
            .unwrap_or_else(|| "user".to_string());

        let facts = Self {
            cpu_model,
            cpu_speed_mhz,
            cpu_count,
            total_memory: system.total_memory(),
            free_memory: system.free_memory(),
            uptime_secs: System::uptime(),
            username,
            hostname: System::host_name().unwrap_or_else(|| "localhost".to_string()),
            os_version: System::long_os_version()
                .or_else(System::name)
                .unwrap_or_else(|| "unknown".to_string()),
            os_arch: env::consts::ARCH.to_string(),
            kernel_version: System::kernel_version().unwrap_or_default(),
            term_program: non_empty_var("TERM_PROGRAM"),
            term_program_version: non_empty_var("TERM_PROGRAM_VERSION"),
            shell: non_empty_var("SHELL"),
        };
        debug!(cpus = facts.cpu_count, host = %facts.hostname, "collected host facts");
        facts
    }

    /// Header shown above the fields: `user@host`.
    pub fn user_host(&self) -> String {
        format!("{}@{}", self.username, self.hostname)
    }
}

fn current_username(system: &mut System) -> Option<String> {
    let pid = Pid::from_u32(std::process::id());
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        false,
        ProcessRefreshKind::nothing().with_user(UpdateKind::OnlyIfNotSet),
    );
    let uid = system.process(pid)?.user_id()?.clone();
    let users = Users::new_with_refreshed_list();
    users
        .get_user_by_id(&uid)
        .map(|user| user.name().to_string())
        .filter(|name| !name.is_empty())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
