pub mod environment;
pub mod logging;
pub mod paths;

pub use environment::{Settings, get_data_dir};
pub use logging::init_logging;
pub use paths::{format_path_with_tilde, safe_open_file, validate_file_size};
