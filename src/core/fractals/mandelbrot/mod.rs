pub mod algorithm;
pub mod escape;
