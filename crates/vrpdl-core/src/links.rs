//! Link extraction from the benchmark listing page.
//!
//! Anchors are classified by href into instance links and solution links,
//! keeping document order. The Nth instance link is assumed to belong with the
//! Nth solution link; nothing on the page enforces that, so [`LinkSet::pairs`]
//! at least checks the counts agree.

use crate::config::{DEFAULT_INSTANCE_PATTERN, DEFAULT_SOLUTION_PATTERN};
use crate::error::HarvestError;
use crate::fetch::Fetch;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static ANCHOR_WITH_HREF: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("static selector is valid"));

/// Which list a matching href belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Instance,
    Solution,
}

/// Unanchored href patterns for instance and solution files.
#[derive(Debug, Clone)]
pub struct LinkPatterns {
    instance: Regex,
    solution: Regex,
}

impl LinkPatterns {
    pub fn new(instance: &str, solution: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            instance: Regex::new(instance)?,
            solution: Regex::new(solution)?,
        })
    }

    /// Instance pattern wins when both match.
    pub fn classify(&self, href: &str) -> Option<LinkKind> {
        if self.instance.is_match(href) {
            Some(LinkKind::Instance)
        } else if self.solution.is_match(href) {
            Some(LinkKind::Solution)
        } else {
            None
        }
    }
}

impl Default for LinkPatterns {
    fn default() -> Self {
        static DEFAULT: Lazy<LinkPatterns> = Lazy::new(|| {
            LinkPatterns::new(DEFAULT_INSTANCE_PATTERN, DEFAULT_SOLUTION_PATTERN)
                .expect("default patterns are valid")
        });
        DEFAULT.clone()
    }
}

/// An instance link and the solution link at the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPair {
    pub index: usize,
    pub instance: String,
    pub solution: String,
}

/// Hrefs found on the listing page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    pub instances: Vec<String>,
    pub solutions: Vec<String>,
}

impl LinkSet {
    pub fn new(instances: Vec<String>, solutions: Vec<String>) -> Self {
        Self {
            instances,
            solutions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty() && self.solutions.is_empty()
    }

    /// Zips the two lists positionally. Unequal lengths are a precheck failure.
    pub fn pairs(&self) -> Result<Vec<LinkPair>, HarvestError> {
        if self.instances.len() != self.solutions.len() {
            return Err(HarvestError::PrecheckMismatch {
                instances: self.instances.len(),
                solutions: self.solutions.len(),
            });
        }
        Ok(self
            .instances
            .iter()
            .zip(&self.solutions)
            .enumerate()
            .map(|(index, (instance, solution))| LinkPair {
                index,
                instance: instance.clone(),
                solution: solution.clone(),
            })
            .collect())
    }
}

/// Classifies every `<a href>` in `html`. Malformed markup is parsed leniently;
/// a page without matches yields an empty set.
pub fn extract_links(html: &str, patterns: &LinkPatterns) -> LinkSet {
    let document = Html::parse_document(html);
    let mut set = LinkSet::default();
    for anchor in document.select(&ANCHOR_WITH_HREF) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        match patterns.classify(href) {
            Some(LinkKind::Instance) => set.instances.push(href.to_string()),
            Some(LinkKind::Solution) => set.solutions.push(href.to_string()),
            None => {}
        }
    }
    set
}

/// Fetches the listing page and extracts its instance and solution links.
/// The response status is not inspected here; see `HttpConfig::strict_status`.
pub fn retrieve_links<F: Fetch>(
    fetcher: &F,
    page_url: &str,
    patterns: &LinkPatterns,
) -> Result<LinkSet, HarvestError> {
    let body = fetcher.fetch(page_url)?;
    let html = String::from_utf8_lossy(&body);
    let set = extract_links(&html, patterns);
    tracing::info!(
        page_url,
        instances = set.instances.len(),
        solutions = set.solutions.len(),
        "extracted links"
    );
    Ok(set)
}
