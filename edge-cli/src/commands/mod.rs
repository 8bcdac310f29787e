pub mod message;
pub mod token;
