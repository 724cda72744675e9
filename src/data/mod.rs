mod facts;
mod platform;
pub mod probes;

pub use facts::HostFacts;
pub use platform::PlatformId;
