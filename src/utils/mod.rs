pub mod environment;
pub mod paths;

pub use environment::default_backup_dir;
pub use paths::{backup_file_name, read_dump_file, validate_file_size, write_backup};
