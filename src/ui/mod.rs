pub mod messages;
pub mod prompt;
