pub mod config_io;
pub mod storage;

pub use config_io::{config_path, read_config, read_config_from};
pub use storage::{StorageError, load_tasks, read_tasks, save_tasks};
