//! CLI command handlers, one per file.

mod completions;
mod fetch;
mod list;

pub use completions::run_completions;
pub use fetch::run_fetch;
pub use list::run_list;

use anyhow::{Context, Result};
use vrpdl_core::config::VrpdlConfig;
use vrpdl_core::fetch::CurlFetcher;
use vrpdl_core::links::{retrieve_links, LinkPatterns, LinkSet};

/// Fetches the configured listing page and extracts its links.
fn scrape(cfg: &VrpdlConfig, fetcher: &CurlFetcher) -> Result<LinkSet> {
    let page_url = cfg.page_url()?;
    let patterns = LinkPatterns::new(&cfg.instance_pattern, &cfg.solution_pattern)
        .context("invalid link pattern in config")?;

    println!("Parsing {} ...", page_url);
    let links = retrieve_links(fetcher, page_url.as_str(), &patterns)
        .with_context(|| format!("failed to retrieve {}", page_url))?;
    println!("Found {} instances !", links.instances.len());
    Ok(links)
}
