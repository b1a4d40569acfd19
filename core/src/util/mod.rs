pub mod case;
pub mod exec;
pub mod math;
pub mod path;
pub mod rand;
pub mod slice;

pub use case::{camel_to_slug, camel_to_snake, slug_to_camel, slugify, snake_to_camel};
pub use exec::{exec, ExecSpec};
pub use math::{max_f64, min_f64};
pub use path::{
    dir_exists, file_exists, get_existing_file_info, resolve_existing_dir, resolve_existing_file,
    resolve_path,
};
pub use rand::rand_string;
pub use slice::{char_in, contains_string, cut_half, cut_left, cut_right, index_of_char, index_of_string};
