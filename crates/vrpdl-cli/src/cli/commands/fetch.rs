//! `vrpdl fetch` – scrape the listing page and download every pair.

use anyhow::{Context, Result};
use std::io;
use vrpdl_core::batch::{download_pairs, BatchOptions};
use vrpdl_core::config::VrpdlConfig;
use vrpdl_core::fetch::CurlFetcher;

use super::scrape;

pub fn run_fetch(cfg: &VrpdlConfig) -> Result<()> {
    let fetcher = CurlFetcher::new(cfg.http.clone());
    let links = scrape(cfg, &fetcher)?;
    let opts = BatchOptions::from_config(cfg)?;

    println!("Retrieving the instances from the web ... This operation might take a while !");
    let report = download_pairs(&fetcher, &links, &opts, io::stdout().lock())
        .with_context(|| format!("download into {}", opts.output_dir.display()))?;

    if report.failed.is_empty() {
        println!("Download complete !");
    } else {
        println!(
            "Download finished with {} failed pair(s) out of {}:",
            report.failed.len(),
            report.total
        );
        for failed in &report.failed {
            println!("  #{} {}: {}", failed.index, failed.instance, failed.error);
        }
    }
    Ok(())
}
