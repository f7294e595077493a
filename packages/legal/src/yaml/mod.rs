//! YAML output for rendered documents.

mod writer;

pub use writer::{generate_yaml, save_yaml};
