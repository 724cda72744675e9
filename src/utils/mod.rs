mod command;
pub mod extract;
mod format;

#[cfg(test)]
pub(crate) use command::FakeExecutor;
pub use command::{CommandExecutor, CommandLine, ShellExecutor};
pub use format::{fit_text, format_memory, format_uptime, mega_bytes, split_uptime, text_width};
