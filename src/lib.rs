// Joseph Prichard
// 1/5/2023
// Single file compressor using huffman coding with a postorder node table container

pub mod bitwise;
pub mod compress;
pub mod config;
pub mod container;
pub mod decompress;
pub mod error;
pub mod freq;
pub mod queue;
pub mod read;
pub mod table;
pub mod threading;
pub mod tree;
pub mod utils;
pub mod write;

pub use compress::compress;
pub use decompress::decompress;
pub use error::{Error, Result};
