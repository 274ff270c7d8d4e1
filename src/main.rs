use mnist_idx::{Dataset, DatasetPaths, DecodeMode, LoadOptions};
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut lenient = false;
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--lenient" => lenient = true,
            _ => positional.push(arg),
        }
    }

    let base_dir = positional.first().ok_or_else(usage)?;
    let start = parse_index(positional.get(1), 0)?;
    let end = parse_index(positional.get(2), start + 1)?;

    let options = LoadOptions {
        mode: if lenient {
            DecodeMode::Lenient
        } else {
            DecodeMode::Strict
        },
        parallel: false,
    };
    let dataset = Dataset::load(&DatasetPaths::from_base_dir(base_dir), options)
        .map_err(|e| e.to_string())?;

    println!(
        "training={} test={} ({}x{})",
        dataset.training().len(),
        dataset.test().len(),
        dataset.training().rows(),
        dataset.training().cols()
    );
    let art = dataset.printout(start, end).map_err(|e| e.to_string())?;
    print!("{art}");
    Ok(())
}

fn parse_index(arg: Option<&String>, default: usize) -> Result<usize, String> {
    match arg {
        Some(s) => s
            .parse()
            .map_err(|e| format!("Invalid index '{s}': {e}")),
        None => Ok(default),
    }
}

fn usage() -> String {
    "Usage: mnist_printout <base_dir> [start end] [--lenient]".to_string()
}
