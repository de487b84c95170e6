pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::{District, NewDistrict, State, StateStats, User};
