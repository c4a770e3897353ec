// Joseph Prichard
// 1/5/2023
// Byte-by-byte compressor

use std::fs;
use std::time::Instant;
use log::{debug, info};
use rayon::prelude::*;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::freq::{create_freq_table, FreqTable};
use crate::queue::PriorityQueue;
use crate::table::tree_to_rows;
use crate::tree::{avg_length, create_code_table, number_nodes, Tree};
use crate::write::pack_bytes;
use crate::{threading, utils};

// compresses every entry into a sibling file with the compressed extension
pub fn compress_files(entries: &[String], multithreaded: bool) -> Result<Vec<(String, Container)>> {
    let now = Instant::now();

    let pool = threading::configure_thread_pool(multithreaded, entries.len())?;
    // each file gets its own table, queue and tree so the files can be compressed in parallel
    let containers = pool.install(|| {
        entries.par_iter()
            .map(|entry| {
                let output = utils::get_compressed_name(entry);
                compress_file(entry, &output).map(|container| (output, container))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let elapsed = now.elapsed();
    info!("Finished compressing {} files in {:.2?}", containers.len(), elapsed);
    Ok(containers)
}

pub fn compress_file(input_filepath: &str, output_filepath: &str) -> Result<Container> {
    let bytes = fs::read(input_filepath)?;
    let container = create_container(&bytes)?;
    fs::write(output_filepath, container.to_bytes()?)?;

    info!(
        "Compressed {} ({} bytes) into {} ({} bytes)",
        input_filepath, bytes.len(), output_filepath, container.byte_len()
    );
    Ok(container)
}

pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    create_container(bytes)?.to_bytes()
}

pub fn create_container(bytes: &[u8]) -> Result<Container> {
    let original_len = u32::try_from(bytes.len())
        .map_err(|_| Error::InputTooLarge(bytes.len()))?;

    let freq_table = create_freq_table(bytes);
    let mut tree = create_code_tree(&freq_table)?;
    let code_table = create_code_table(&tree);
    debug!(
        "Built tree with {} symbols, {:.4} bits per symbol",
        code_table.len(), avg_length(&tree, &freq_table)
    );
    tree.clear_weights();

    let node_count = number_nodes(&mut tree);
    let rows = tree_to_rows(&tree);
    debug!("Serialized {} internal nodes", node_count);

    let payload = pack_bytes(bytes, &code_table)?;
    Ok(Container { rows, original_len, payload })
}

// huffman coding algorithm: merge the two lightest trees until one remains
pub fn create_code_tree(freq_table: &FreqTable) -> Result<Tree> {
    if freq_table.is_empty() {
        return Ok(Tree::empty());
    }

    // add the frequency table nodes to priority queue
    let mut queue = PriorityQueue::new();
    for (symbol, count) in freq_table.iter() {
        queue.insert(Tree::leaf(symbol, count));
    }

    while queue.len() >= 2 {
        let first_node = queue.extract_min()?;
        let second_node = queue.extract_min()?;
        queue.insert(Tree::internal(first_node, second_node));
    }
    queue.extract_min()
}
