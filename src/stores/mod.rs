// Runtime state owned by the page behaviors

pub mod feedback;
