//! Command-line entry point for the in-place asset path rewrite.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use asset_path_rewriter::rewrite_file;

#[derive(Parser)]
#[command(name = "asset_path_rewriter")]
#[command(about = "Rewrite versioned static asset paths inside an HTML file", long_about = None)]
struct Arguments {
    /// Path to the HTML file to rewrite in place
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl Arguments {
    fn run(self) -> Result<()> {
        let summary = rewrite_file(&self.file)?;

        let count = summary.updated_count();
        let plural = if count == 1 { "" } else { "s" };
        println!(
            "rewrote {count} asset path{plural} in {}",
            self.file.display()
        );

        Ok(())
    }
}

fn main() {
    if let Err(error) = Arguments::parse().run() {
        eprintln!("error: {error}");
        process::exit(1);
    }
}
