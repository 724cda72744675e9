//! Bodies of the asynchronous field strategies, one module per fact.

pub mod display;
pub mod gpu;
pub mod host;
pub mod shell;
