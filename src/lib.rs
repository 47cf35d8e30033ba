//! Copy buttons and promo box sizing for static promo pages
//!
//! The behaviors are written against the `dom` traits and the `Scheduler` seam,
//! so everything below `hooks` also builds and tests natively.

pub mod config;
pub mod dom;
pub mod errors;
pub mod hooks;
pub mod services;
pub mod stores;
pub mod utils;
