// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod config;
pub mod content;
pub mod highlight;
pub mod interval;
pub mod logging;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod runtime;
pub mod typewriter;
