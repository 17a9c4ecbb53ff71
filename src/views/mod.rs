pub mod admin;
pub mod homepage;
pub mod layout;
pub mod lesson;
pub mod question;
pub mod quiz;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
