pub mod message;
pub mod model;
