pub mod import;
pub mod new;
pub mod probe;
pub mod render;
