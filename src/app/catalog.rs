use std::path::Path;
use std::sync::Arc;

use crate::data::probes::{display, gpu, host, shell};
use crate::data::{HostFacts, PlatformId};
use crate::error::Result;
use crate::field::{FieldSpec, Strategy};
use crate::utils::{CommandExecutor, format_memory, format_uptime};

type Probe = fn(&dyn CommandExecutor) -> Result<Option<String>>;

/// Fields of the panel, in display order.
pub fn default_catalog(
    facts: &Arc<HostFacts>,
    executor: &Arc<dyn CommandExecutor>,
) -> Vec<FieldSpec> {
    vec![
        os_field(facts),
        host_field(executor),
        kernel_field(facts),
        uptime_field(facts),
        shell_field(facts, executor),
        terminal_field(facts),
        resolution_field(executor),
        cpu_field(facts),
        gpu_field(executor),
        memory_field(facts),
    ]
}

fn probe(executor: &Arc<dyn CommandExecutor>, run: Probe) -> Strategy {
    let executor = Arc::clone(executor);
    Strategy::task(move || run(executor.as_ref()))
}

fn from_facts<F>(facts: &Arc<HostFacts>, render: F) -> Strategy
where
    F: Fn(&HostFacts) -> String + Send + Sync + 'static,
{
    let facts = Arc::clone(facts);
    Strategy::sync(move || render(&facts))
}

fn os_field(facts: &Arc<HostFacts>) -> FieldSpec {
    FieldSpec::new(
        "OS",
        from_facts(facts, |facts| {
            format!("{} {}", facts.os_version, facts.os_arch)
        }),
    )
}

fn host_field(executor: &Arc<dyn CommandExecutor>) -> FieldSpec {
    FieldSpec::new("Host", Strategy::literal(""))
        .on(PlatformId::Windows, probe(executor, host::wmic_host))
        .on(PlatformId::MacOs, probe(executor, host::sysctl_host))
        .on(
            PlatformId::Linux,
            Strategy::sync(|| host::dmi_host(Path::new(host::DMI_ROOT)).unwrap_or_default()),
        )
}

fn kernel_field(facts: &Arc<HostFacts>) -> FieldSpec {
    FieldSpec::new(
        "Kernel",
        from_facts(facts, |facts| facts.kernel_version.clone()),
    )
}

fn uptime_field(facts: &Arc<HostFacts>) -> FieldSpec {
    FieldSpec::new(
        "Uptime",
        from_facts(facts, |facts| format_uptime(facts.uptime_secs)),
    )
}

fn shell_field(facts: &Arc<HostFacts>, executor: &Arc<dyn CommandExecutor>) -> FieldSpec {
    let shell_path = facts.shell.clone();
    let unix_executor = Arc::clone(executor);
    FieldSpec::new(
        "Shell",
        Strategy::task(move || shell::unix_shell(unix_executor.as_ref(), shell_path.as_deref())),
    )
    .on(PlatformId::Windows, probe(executor, shell::powershell))
}

fn terminal_field(facts: &Arc<HostFacts>) -> FieldSpec {
    FieldSpec::new(
        "Terminal",
        from_facts(facts, |facts| {
            terminal_label(
                facts.term_program.as_deref(),
                facts.term_program_version.as_deref(),
            )
        }),
    )
}

fn terminal_label(program: Option<&str>, version: Option<&str>) -> String {
    match (program, version) {
        (Some(program), Some(version)) => format!("{program} {version}"),
        (Some(program), None) => program.to_string(),
        (None, _) => String::new(),
    }
}

fn resolution_field(executor: &Arc<dyn CommandExecutor>) -> FieldSpec {
    let linux_executor = Arc::clone(executor);
    FieldSpec::new("Resolution", Strategy::literal(""))
        .on(PlatformId::Windows, probe(executor, display::wmic_resolution))
        .on(
            PlatformId::Linux,
            Strategy::task(move || {
                display::linux_resolution(linux_executor.as_ref(), Path::new(display::DRM_ROOT))
            }),
        )
        .on(
            PlatformId::MacOs,
            probe(executor, display::profiler_display_resolution),
        )
}

fn cpu_field(facts: &Arc<HostFacts>) -> FieldSpec {
    FieldSpec::new(
        "CPU",
        from_facts(facts, |facts| {
            format!(
                "{} ({}) @ {}MHz",
                facts.cpu_model, facts.cpu_count, facts.cpu_speed_mhz
            )
        }),
    )
}

fn gpu_field(executor: &Arc<dyn CommandExecutor>) -> FieldSpec {
    FieldSpec::new("GPU", Strategy::literal(""))
        .on(PlatformId::Windows, probe(executor, gpu::wmic_gpu))
        .on(PlatformId::Linux, probe(executor, gpu::lspci_gpu))
        .on(PlatformId::MacOs, probe(executor, gpu::profiler_gpu))
}

fn memory_field(facts: &Arc<HostFacts>) -> FieldSpec {
    FieldSpec::new(
        "Memory",
        from_facts(facts, |facts| {
            format_memory(facts.free_memory, facts.total_memory)
        }),
    )
}
