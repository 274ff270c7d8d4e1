use mnist_idx::config::load_config;
use mnist_idx::image::io::{save_grid_png, write_json_file};
use mnist_idx::{Dataset, ImageSet, LoadReport};
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let (dataset, report) = Dataset::load_with_report(&config.paths(), config.load_options())
        .map_err(|e| format!("Failed to load dataset from {}: {e}", config.base_dir.display()))?;

    let art = dataset
        .printout(config.printout.start, config.printout.end)
        .map_err(|e| e.to_string())?;
    print!("{art}");

    let Some(output) = &config.output else {
        return Ok(());
    };

    let summary = ExportSummary {
        training: SplitSummary::new(dataset.training()),
        test: SplitSummary::new(dataset.test()),
        report,
    };
    write_json_file(&output.summary_json, &summary)?;
    println!("Saved summary to {}", output.summary_json.display());

    if let Some(png_dir) = &output.png_dir {
        let count = output.png_limit.min(dataset.training().len());
        for (index, item) in dataset.training().iter().take(count).enumerate() {
            let path = png_dir.join(format!("train_{index:05}_label{}.png", item.label()));
            save_grid_png(item.grid(), &path)?;
        }
        println!("Saved {count} training images to {}", png_dir.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: idx_export <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitSummary {
    items: usize,
    rows: usize,
    cols: usize,
    labeled: bool,
    label_counts: BTreeMap<u8, usize>,
}

impl SplitSummary {
    fn new(set: &ImageSet) -> Self {
        Self {
            items: set.len(),
            rows: set.rows(),
            cols: set.cols(),
            labeled: set.is_labeled(),
            label_counts: set.label_counts(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportSummary {
    training: SplitSummary,
    test: SplitSummary,
    report: LoadReport,
}
