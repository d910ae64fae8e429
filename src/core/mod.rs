pub mod config;
pub mod log;
pub mod queue;
pub mod shuffle;
pub mod tracked;
