pub mod catalog;
pub mod config;
pub mod demo;
pub mod dto;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::checkin::CheckIn;
pub use services::live::LiveCheckIn;
