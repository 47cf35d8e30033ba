#[cfg(target_arch = "wasm32")]
pub mod page_events;

#[cfg(target_arch = "wasm32")]
pub use page_events::{install, refresh_sizes, uninstall};
