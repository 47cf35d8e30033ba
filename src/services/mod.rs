// The two page behaviors

pub mod copy_button;
pub mod size_matcher;

pub use copy_button::CopyButtons;
pub use size_matcher::{match_sizes, MatchReport};
