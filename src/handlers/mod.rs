pub mod admin;
pub mod homepage;
pub mod lesson;
pub mod question;
pub mod quiz;
