pub mod commands;
pub mod payload;
pub mod resolver;
