pub mod application;
pub mod domain;

pub use domain::errors;
pub use domain::models;
pub use domain::services;
