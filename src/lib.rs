pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
