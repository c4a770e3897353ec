// Joseph Prichard
// 1/5/2023
// Error types shared by the codec, the container format and the file wrappers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // extraction from an exhausted priority queue, a contract bug in the caller
    #[error("cannot extract from an empty priority queue")]
    EmptyQueue,

    // the payload ran out of bits before the declared number of symbols were decoded
    #[error("corrupt stream: decoded {decoded} of {expected} symbols before the payload ran out")]
    CorruptStream { decoded: usize, expected: usize },

    // the buffer is shorter than its header declares
    #[error("malformed container: need at least {required} bytes, got {actual}")]
    MalformedContainer { required: usize, actual: usize },

    // the node table does not describe a proper binary tree
    #[error("malformed container: node row {row} does not describe a valid tree")]
    InvalidNodeRow { row: usize },

    // the packer was given a byte that has no code
    #[error("symbol {0:#04x} has no code in the code table")]
    UnknownSymbol(u8),

    #[error("input of {0} bytes does not fit the 4 byte length field")]
    InputTooLarge(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
