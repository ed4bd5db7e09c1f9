pub mod tables;
pub mod utils;
