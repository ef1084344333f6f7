//! Final-extension rewrite for downloaded filenames.

use once_cell::sync::Lazy;
use regex::Regex;

static FINAL_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\w*$").expect("static regex is valid"));

/// Replaces the final `.ext` of `filename` with `.{ext}`, or appends it when there is none.
///
/// Only the last extension changes: `file.v2.dat` becomes `file.v2.vrp`.
pub fn replace_extension(filename: &str, ext: &str) -> String {
    match FINAL_EXTENSION.find(filename) {
        Some(m) => format!("{}.{}", &filename[..m.start()], ext),
        None => format!("{}.{}", filename, ext),
    }
}
