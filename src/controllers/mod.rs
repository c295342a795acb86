pub mod cli;
pub mod movie;
pub mod ports;
