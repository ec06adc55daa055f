pub mod client;
pub mod parser;
