// Joseph Prichard
// 1/5/2023
// Command line configuration

use crate::error::{Error, Result};

pub const USAGE: &str = "usage: huffzip [-c | -d | -l] [-mt] [-v] <file>...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Compress,
    Decompress,
    List,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    // the files to operate on
    pub entries: Vec<String>,
    pub multithreaded: bool,
    pub verbose: bool,
}

impl Config {
    // parses the arguments to the program, excluding the program name
    pub fn from_args(args: &[String]) -> Result<Config> {
        let mut command = Command::Compress;
        let mut entries = vec![];
        let mut multithreaded = false;
        let mut verbose = false;

        for arg in args {
            // if the arg begins with a -, then the arg is a flag, otherwise it's a file
            if !arg.starts_with('-') {
                entries.push(String::from(arg));
                continue;
            }
            match arg.as_str() {
                "-mt" => multithreaded = true,
                "-v" => verbose = true,
                "-c" => command = Command::Compress,
                "-d" => command = Command::Decompress,
                "-l" => command = Command::List,
                _ => return Err(Error::Config(format!("unknown flag {}", arg))),
            }
        }

        if entries.is_empty() {
            return Err(Error::Config(String::from("needs at least one file path as an argument")));
        }
        Ok(Config { command, entries, multithreaded, verbose })
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn test_default_is_compress() {
        let config = Config::from_args(&args(&["a.txt", "b.txt"])).expect("Expected valid args");
        assert_eq!(config.command, Command::Compress);
        assert_eq!(config.entries, args(&["a.txt", "b.txt"]));
        assert!(!config.multithreaded);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_flags() {
        let config = Config::from_args(&args(&["-d", "-mt", "-v", "a.txt.huf"])).expect("Expected valid args");
        assert_eq!(config.command, Command::Decompress);
        assert!(config.multithreaded);
        assert_eq!(config.log_level(), "debug");

        let config = Config::from_args(&args(&["a.huf", "-l"])).expect("Expected valid args");
        assert_eq!(config.command, Command::List);
    }

    #[test]
    fn test_invalid_args() {
        assert!(matches!(Config::from_args(&args(&["-d"])), Err(Error::Config(_))));
        assert!(matches!(Config::from_args(&args(&["-x", "a.txt"])), Err(Error::Config(_))));
        assert!(matches!(Config::from_args(&[]), Err(Error::Config(_))));
    }
}
