mod remote;
mod walker;

pub use remote::{clone_repository, is_remote_url};
pub use walker::{first_file, scan_directory, should_include_file, SOURCE_EXTENSIONS};
