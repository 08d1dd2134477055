pub mod data_source;
pub mod error;
pub mod model;
pub mod value_object;
