pub mod environment;
pub mod paths;

pub use environment::default_projects_dir;
pub use paths::{decode_project_path, encode_project_path, project_name};
