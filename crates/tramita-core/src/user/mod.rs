//! User domain model.

pub mod model;

pub use model::User;
