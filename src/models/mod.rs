pub mod habit;
pub mod history;
pub mod journal;
pub mod mood;
pub mod theme;
