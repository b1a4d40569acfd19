mod load;
mod types;

pub use load::{get_kitbag_data_dir, load_default, load_from_path};
pub use types::{HttpConfig, KitbagConfig, LoggingConfig, QueueConfig};
