// Browser helpers shared by the page behaviors

pub mod clipboard;
pub mod timer;
