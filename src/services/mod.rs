pub mod checkin;
pub mod habits;
pub mod history;
pub mod journal;
pub mod live;
pub mod resolver;
