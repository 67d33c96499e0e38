//! Storage module for the .grd file format

mod parser;
mod writer;

pub use parser::{parse_grd, parse_grd_content};
pub use writer::{write_grd, write_grd_content};
