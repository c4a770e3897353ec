// Joseph Prichard
// 1/5/2023
// Application to compress or decompress files

use std::{env, process};
use log::error;
use huffzip::config::{Command, Config, USAGE};
use huffzip::{compress, container, decompress, Result};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .init();

    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}

// execute a different command based on flag
fn run(config: &Config) -> Result<()> {
    match config.command {
        Command::Compress => {
            let containers = compress::compress_files(&config.entries, config.multithreaded)?;
            container::list_containers(&containers);
        }
        Command::Decompress => {
            decompress::decompress_files(&config.entries, config.multithreaded)?;
        }
        Command::List => {
            let containers = decompress::read_containers(&config.entries)?;
            container::list_containers(&containers);
        }
    }
    Ok(())
}
