mod markdown;
mod mirror;
mod naming;

pub use markdown::{render_overall_report, render_project_report, write_report};
pub use mirror::{mirror_tree, mirrored_dir};
pub use naming::next_available_name;
