mod handler;
mod model;

pub use handler::{get_values, set_values};
