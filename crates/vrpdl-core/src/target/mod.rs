//! Destination derivation for instance/solution pairs.
//!
//! Each link is resolved against the source host; its URL path gives the
//! category subdirectory and the filename, whose final extension is rewritten
//! to `.vrp` (instances) or `.sol` (solutions).

mod extension;
mod path;

pub use extension::replace_extension;
pub use path::{category_and_filename, resolve_link};

use crate::error::TargetError;
use crate::links::LinkPair;
use std::path::{Path, PathBuf};
use url::Url;

pub const INSTANCE_EXTENSION: &str = "vrp";
pub const SOLUTION_EXTENSION: &str = "sol";

/// Where one pair is fetched from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTarget {
    /// Subdirectory under the output root, taken from the instance link.
    pub category: String,
    pub instance_url: Url,
    pub instance_filename: String,
    pub solution_url: Url,
    pub solution_filename: String,
}

impl PairTarget {
    /// Derives the target of `pair`, resolving both links against `source`.
    ///
    /// The directory comes from the instance link only; the solution link
    /// contributes its filename.
    pub fn derive(source: &Url, pair: &LinkPair) -> Result<Self, TargetError> {
        let instance_url = resolve_link(source, &pair.instance)?;
        let (category, instance_name) = category_and_filename(&instance_url)?;

        let solution_url = resolve_link(source, &pair.solution)?;
        let (_, solution_name) = category_and_filename(&solution_url)?;

        Ok(Self {
            category,
            instance_filename: replace_extension(&instance_name, INSTANCE_EXTENSION),
            solution_filename: replace_extension(&solution_name, SOLUTION_EXTENSION),
            instance_url,
            solution_url,
        })
    }

    /// `<root>/<category>`
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(&self.category)
    }

    pub fn instance_path(&self, root: &Path) -> PathBuf {
        self.dir(root).join(&self.instance_filename)
    }

    pub fn solution_path(&self, root: &Path) -> PathBuf {
        self.dir(root).join(&self.solution_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(instance: &str, solution: &str) -> LinkPair {
        LinkPair {
            index: 0,
            instance: instance.to_string(),
            solution: solution.to_string(),
        }
    }

    fn source() -> Url {
        Url::parse("http://vrp.atd-lab.inf.puc-rio.br").unwrap()
    }

    #[test]
    fn absolute_links() {
        let t = PairTarget::derive(
            &source(),
            &pair("http://host/p/q/cat1/file1.vrp", "http://host/p/q/cat1/file1.sol"),
        )
        .unwrap();
        assert_eq!(t.category, "cat1");
        assert_eq!(t.instance_filename, "file1.vrp");
        assert_eq!(t.solution_filename, "file1.sol");
        assert_eq!(t.instance_url.as_str(), "http://host/p/q/cat1/file1.vrp");
        let root = Path::new("instances");
        assert_eq!(t.instance_path(root), Path::new("instances/cat1/file1.vrp"));
        assert_eq!(t.solution_path(root), Path::new("instances/cat1/file1.sol"));
    }

    #[test]
    fn relative_dat_link_becomes_vrp() {
        let t = PairTarget::derive(
            &source(),
            &pair(
                "/media/com_vrp/instances/E/E-n13-k4.dat",
                "/media/com_vrp/instances/E/E-n13-k4.opt.sol",
            ),
        )
        .unwrap();
        assert_eq!(t.category, "E");
        assert_eq!(t.instance_filename, "E-n13-k4.vrp");
        assert_eq!(t.solution_filename, "E-n13-k4.opt.sol");
        assert_eq!(
            t.solution_url.as_str(),
            "http://vrp.atd-lab.inf.puc-rio.br/media/com_vrp/instances/E/E-n13-k4.opt.sol"
        );
    }

    #[test]
    fn directory_follows_instance_link() {
        let t = PairTarget::derive(&source(), &pair("/x/y/z/P/P-n16-k8.vrp", "/x/y/z/sols/P-n16-k8.sol"))
            .unwrap();
        assert_eq!(t.category, "P");
        assert_eq!(t.solution_path(Path::new("out")), Path::new("out/P/P-n16-k8.sol"));
    }

    #[test]
    fn short_solution_link_fails() {
        let err = PairTarget::derive(&source(), &pair("/x/A/A-n32-k5.vrp", "/A-n32-k5.sol")).unwrap_err();
        assert!(matches!(err, TargetError::TooFewSegments { found: 1, .. }));
    }

    #[test]
    fn names_with_spaces_are_written_verbatim() {
        let t = PairTarget::derive(&source(), &pair("/a/b/c/Set A/x y.dat", "/a/b/c/Set A/x y.sol")).unwrap();
        assert_eq!(t.category, "Set A");
        assert_eq!(t.instance_path(Path::new("out")), Path::new("out/Set A/x y.vrp"));
        assert_eq!(t.solution_path(Path::new("out")), Path::new("out/Set A/x y.sol"));
        assert_eq!(t.instance_url.as_str(), "http://vrp.atd-lab.inf.puc-rio.br/a/b/c/Set%20A/x%20y.dat");
    }
}
