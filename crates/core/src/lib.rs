#![forbid(unsafe_code)]

pub mod content;
pub mod model;
pub mod streak;
pub mod time;

pub use time::Clock;
