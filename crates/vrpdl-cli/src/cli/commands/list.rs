//! `vrpdl list` – show what `fetch` would download, without touching the filesystem.

use anyhow::Result;
use vrpdl_core::config::VrpdlConfig;
use vrpdl_core::fetch::CurlFetcher;
use vrpdl_core::links::LinkSet;
use vrpdl_core::target::PairTarget;

use super::scrape;

pub fn run_list(cfg: &VrpdlConfig) -> Result<()> {
    let fetcher = CurlFetcher::new(cfg.http.clone());
    let links = scrape(cfg, &fetcher)?;
    for line in plan_lines(cfg, &links)? {
        println!("{}", line);
    }
    Ok(())
}

/// One line per pair: `<instance url> -> <instance path>`, then the solution line.
fn plan_lines(cfg: &VrpdlConfig, links: &LinkSet) -> Result<Vec<String>> {
    let source = cfg.source_url()?;
    let mut lines = Vec::new();
    for pair in links.pairs()? {
        match PairTarget::derive(&source, &pair) {
            Ok(target) => {
                lines.push(format!(
                    "{} -> {}",
                    target.instance_url,
                    target.instance_path(&cfg.output_dir).display()
                ));
                lines.push(format!(
                    "{} -> {}",
                    target.solution_url,
                    target.solution_path(&cfg.output_dir).display()
                ));
            }
            Err(e) => lines.push(format!("#{} skipped: {}", pair.index, e)),
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_lines_show_destinations() {
        let cfg = VrpdlConfig {
            source_url: "http://vrp.example".to_string(),
            ..VrpdlConfig::default()
        };
        let links = LinkSet::new(
            vec!["/m/i/E/E-n13-k4.dat".to_string(), "/bad.vrp".to_string()],
            vec!["/m/i/E/E-n13-k4.sol".to_string(), "/m/i/X/x.sol".to_string()],
        );
        let lines = plan_lines(&cfg, &links).unwrap();
        assert_eq!(
            lines,
            vec![
                "http://vrp.example/m/i/E/E-n13-k4.dat -> instances/E/E-n13-k4.vrp".to_string(),
                "http://vrp.example/m/i/E/E-n13-k4.sol -> instances/E/E-n13-k4.sol".to_string(),
                "#1 skipped: link http://vrp.example/bad.vrp has 1 path segment(s), need at least 2"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn plan_lines_reject_mismatch() {
        let cfg = VrpdlConfig::default();
        let links = LinkSet::new(vec!["/a/A/a.vrp".to_string()], Vec::new());
        assert!(plan_lines(&cfg, &links).is_err());
    }
}
