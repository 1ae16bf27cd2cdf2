pub mod models;
pub mod quran;

pub use models::*;
pub use quran::*;
