// Joseph Prichard
// 4/25/2024
// Threading operations

use std::thread::available_parallelism;
use log::info;
use rayon::ThreadPool;
use crate::error::Result;

pub fn configure_thread_pool(multithreaded: bool, file_count: usize) -> Result<ThreadPool> {
    // configure the rayon thread pool based on -mt flag, never more threads than files
    let threads = if multithreaded {
        file_count.min(available_parallelism()?.get()).max(1)
    } else {
        1
    };

    info!("Running with {} threads", threads);
    let tp = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    Ok(tp)
}
