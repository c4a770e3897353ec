// Joseph Prichard
// 1/5/2023
// Bit-by-bit decompressor

use std::fs;
use std::path::Path;
use std::time::Instant;
use log::{debug, info};
use rayon::prelude::*;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::read::unpack_bytes;
use crate::table::{read_tree_postorder, NodeRow};
use crate::tree::Tree;
use crate::{threading, utils};

// decompresses every entry into a sibling file with the extension stripped
pub fn decompress_files(entries: &[String], multithreaded: bool) -> Result<Vec<String>> {
    let now = Instant::now();

    let pool = threading::configure_thread_pool(multithreaded, entries.len())?;
    // each call writes to a different file so they can run in parallel
    let outputs = pool.install(|| {
        entries.par_iter()
            .map(|entry| {
                let output = utils::get_decompressed_name(entry)?;
                decompress_file(entry, &output).map(|_| output)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let elapsed = now.elapsed();
    info!("Finished decompressing {} files in {:.2?}", outputs.len(), elapsed);
    Ok(outputs)
}

pub fn decompress_file(input_filepath: &str, output_filepath: &str) -> Result<usize> {
    if Path::new(input_filepath) == Path::new(output_filepath) {
        return Err(Error::Config(format!("refusing to decompress {} onto itself", input_filepath)));
    }
    let buffer = fs::read(input_filepath)?;
    let bytes = decompress(&buffer)?;
    fs::write(output_filepath, &bytes)?;

    info!("Decompressed {} into {} ({} bytes)", input_filepath, output_filepath, bytes.len());
    Ok(bytes.len())
}

// reads only the layout of each container, used for listing
pub fn read_containers(entries: &[String]) -> Result<Vec<(String, Container)>> {
    entries.iter()
        .map(|entry| {
            let buffer = fs::read(entry)?;
            Ok((entry.clone(), Container::from_bytes(&buffer)?))
        })
        .collect()
}

pub fn decompress(buffer: &[u8]) -> Result<Vec<u8>> {
    let container = Container::from_bytes(buffer)?;
    let tree = read_tree(&container.rows)?;
    debug!("Read tree with {} internal nodes", container.node_count());
    unpack_bytes(&tree, &container.payload, container.original_len as usize)
}

// rebuilds the tree from a postorder node table, every row must belong to the tree
pub fn read_tree(rows: &[NodeRow]) -> Result<Tree> {
    if rows.is_empty() {
        return Ok(Tree::empty());
    }
    let tree = read_tree_postorder(rows, rows.len() - 1)?;
    let used = tree.internal_count();
    if used != rows.len() {
        return Err(Error::InvalidNodeRow { row: rows.len() - used - 1 });
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::{compress, compress_file};
    use crate::tree::create_code_table;
    use crate::utils::temp_filepath;

    #[test]
    fn test_round_trip() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let inputs: Vec<Vec<u8>> = vec![
            vec![],
            vec![42],
            vec![0; 100],
            b"helloworld".to_vec(),
            b"The quick brown fox jumps over the lazy dog. ".repeat(50),
            all_bytes.clone(),
            all_bytes.repeat(3),
        ];
        for input in inputs {
            let compressed = compress(&input).expect("Expected compression to succeed");
            let output = decompress(&compressed).expect("Expected decompression to succeed");
            assert_eq!(output, input);
        }
    }

    #[test]
    fn test_decompress_helloworld() {
        let mut buffer = vec![6];
        buffer.extend([0, 100, 0, 101, 0, 104, 0, 114, 1, 0, 1, 1, 0, 119, 0, 111, 0, 108, 1, 3, 1, 2, 1, 4]);
        buffer.extend([10, 0, 0, 0]);
        buffer.extend([0b0100_0110, 0b1011_1110, 0b1110_1110, 0b0000_0000]);
        assert_eq!(decompress(&buffer).expect("Expected decompression to succeed"), b"helloworld");
    }

    #[test]
    fn test_tree_round_trip() {
        // frequencies {65: 1, 66: 2, 67: 1}
        let compressed = compress(b"ABBC").expect("Expected compression to succeed");
        let container = Container::from_bytes(&compressed).expect("Expected a valid container");
        let tree = read_tree(&container.rows).expect("Expected a valid tree");

        let freq_table = crate::freq::create_freq_table(b"ABBC");
        let original = crate::compress::create_code_tree(&freq_table).expect("Expected tree to build");
        assert_eq!(create_code_table(&tree), create_code_table(&original));
    }

    #[test]
    fn test_truncated_payload() {
        let compressed = compress(b"helloworld").expect("Expected compression to succeed");
        let truncated = &compressed[..compressed.len() - 1];
        assert!(matches!(decompress(truncated), Err(Error::CorruptStream { expected: 10, .. })));
    }

    #[test]
    fn test_truncated_header() {
        let compressed = compress(b"helloworld").expect("Expected compression to succeed");
        assert!(matches!(decompress(&compressed[..20]), Err(Error::MalformedContainer { .. })));
        assert!(matches!(decompress(&[]), Err(Error::MalformedContainer { .. })));
    }

    #[test]
    fn test_leftover_rows() {
        // the first row is never reached from the root
        let buffer = [2, 0, 1, 0, 2, 0, 3, 0, 4, 0, 0, 0, 0];
        assert!(matches!(decompress(&buffer), Err(Error::InvalidNodeRow { row: 0 })));
    }

    #[test]
    fn test_empty_tree_with_length() {
        // no rows but a declared length
        let buffer = [0, 3, 0, 0, 0, 0xFF];
        assert!(matches!(decompress(&buffer), Err(Error::CorruptStream { decoded: 0, expected: 3 })));
    }

    #[test]
    fn test_decompress_keeps_input_without_extension() {
        let archive = temp_filepath("huf");
        let bare = utils::get_no_ext(&archive);
        let compressed = compress(b"keep me").expect("Expected compression to succeed");
        fs::write(&bare, &compressed).expect("Failed to write test data");

        let result = decompress_files(&[bare.clone()], false);
        assert!(matches!(result, Err(Error::Config(_))));
        assert!(matches!(decompress_file(&bare, &bare), Err(Error::Config(_))));
        assert_eq!(fs::read(&bare).expect("Failed to read archive"), compressed);

        fs::remove_file(&bare).expect("Failed to delete temp file");
    }

    #[test]
    fn test_decompress_file() {
        let original = temp_filepath("txt");
        let compressed = temp_filepath("huf");
        let restored = temp_filepath("out");
        let data = b"mississippi river".repeat(20);
        fs::write(&original, &data).expect("Failed to write test data");

        compress_file(&original, &compressed).expect("Expected compression to succeed");
        let size = decompress_file(&compressed, &restored).expect("Expected decompression to succeed");
        assert_eq!(size, data.len());
        assert_eq!(fs::read(&restored).expect("Failed to read restored file"), data);

        let listed = read_containers(&[compressed.clone()]).expect("Expected containers to be readable");
        assert_eq!(listed[0].1.original_len as usize, data.len());

        for path in [original, compressed, restored] {
            fs::remove_file(&path).expect("Failed to delete temp file");
        }
    }
}
