// Joseph Prichard
// 1/5/2023
// Utilities for output file names

use std::path::Path;
use crate::error::{Error, Result};

pub const EXTENSION: &str = "huf";

pub fn get_compressed_name(path: &str) -> String {
    format!("{}.{}", path, EXTENSION)
}

pub fn get_no_ext(path: &str) -> String {
    Path::new(path)
        .with_extension("")
        .display()
        .to_string()
}

// strips the compressed extension, any other path would decompress onto itself
pub fn get_decompressed_name(path: &str) -> Result<String> {
    match Path::new(path).extension() {
        Some(ext) if ext == EXTENSION => Ok(get_no_ext(path)),
        _ => Err(Error::Config(format!("{} does not have the .{} extension", path, EXTENSION))),
    }
}

// a path in the system temp dir with a random name, for tests that touch the file system
#[cfg(test)]
pub fn temp_filepath(ext: &str) -> String {
    use rand::{distributions::Alphanumeric, Rng};

    let name: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    std::env::temp_dir()
        .join(format!("{}.{}", name, ext))
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_no_ext() {
        assert_eq!(get_no_ext("foo.txt"), "foo");
        assert_eq!(get_no_ext("foo.txt.huf"), "foo.txt");
    }

    #[test]
    fn test_get_compressed_name() {
        assert_eq!(get_compressed_name("foo.txt"), "foo.txt.huf");
        assert_eq!(get_no_ext(&get_compressed_name("dir/foo.txt")), "dir/foo.txt");
    }

    #[test]
    fn test_get_decompressed_name() {
        assert_eq!(get_decompressed_name("dir/foo.txt.huf").expect("Expected a compressed name"), "dir/foo.txt");
        assert_eq!(get_decompressed_name("archive.huf").expect("Expected a compressed name"), "archive");
        assert!(matches!(get_decompressed_name("archive"), Err(Error::Config(_))));
        assert!(matches!(get_decompressed_name("archive.txt"), Err(Error::Config(_))));
    }

    #[test]
    fn test_temp_filepath_unique() {
        assert_ne!(temp_filepath("txt"), temp_filepath("txt"));
        assert!(temp_filepath("huf").ends_with(".huf"));
    }
}
