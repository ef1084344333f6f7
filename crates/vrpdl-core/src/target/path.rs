//! Category and filename extraction from link URL path segments.

use crate::error::TargetError;
use url::Url;

/// Resolves `link` against `source` (absolute links are kept as-is).
pub fn resolve_link(source: &Url, link: &str) -> Result<Url, TargetError> {
    source.join(link).map_err(|source| TargetError::Resolve {
        link: link.to_string(),
        source,
    })
}

/// Returns `(category, filename)`: the last two non-empty path segments of `url`,
/// percent-decoded so names match the link text as written on the page.
///
/// For the benchmark site's `/<a>/<b>/<c>/<category>/<file>` links this is the
/// fifth and sixth element of a plain `/` split.
pub fn category_and_filename(url: &Url) -> Result<(String, String), TargetError> {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    if segments.len() < 2 {
        return Err(TargetError::TooFewSegments {
            link: url.to_string(),
            found: segments.len(),
        });
    }

    let category = decode_segment(url, segments[segments.len() - 2])?;
    let filename = decode_segment(url, segments[segments.len() - 1])?;
    Ok((category, filename))
}

fn decode_segment(url: &Url, raw: &str) -> Result<String, TargetError> {
    let bad = |segment: String| TargetError::BadSegment {
        link: url.to_string(),
        segment,
    };
    let decoded = urlencoding::decode(raw).map_err(|_| bad(raw.to_string()))?;
    if !is_usable_segment(&decoded) {
        return Err(bad(decoded.into_owned()));
    }
    Ok(decoded.into_owned())
}

/// A segment must be usable verbatim as a single path component.
fn is_usable_segment(seg: &str) -> bool {
    seg != "."
        && seg != ".."
        && !seg.contains(['/', '\\', '\0'])
        && !seg.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://vrp.atd-lab.inf.puc-rio.br").unwrap()
    }

    #[test]
    fn relative_link_resolves_against_source() {
        let url = resolve_link(&base(), "/media/com_vrp/instances/A/A-n32-k5.vrp").unwrap();
        assert_eq!(
            url.as_str(),
            "http://vrp.atd-lab.inf.puc-rio.br/media/com_vrp/instances/A/A-n32-k5.vrp"
        );
    }

    #[test]
    fn absolute_link_is_kept() {
        let url = resolve_link(&base(), "http://host/p/q/cat1/file1.vrp").unwrap();
        assert_eq!(url.as_str(), "http://host/p/q/cat1/file1.vrp");
    }

    #[test]
    fn last_two_segments() {
        let url = Url::parse("http://host/media/com_vrp/instances/Golden/Golden_1.vrp").unwrap();
        let (cat, file) = category_and_filename(&url).unwrap();
        assert_eq!(cat, "Golden");
        assert_eq!(file, "Golden_1.vrp");
    }

    #[test]
    fn query_is_not_part_of_filename() {
        let url = Url::parse("http://host/a/Li/Li_21.vrp?download=1").unwrap();
        let (cat, file) = category_and_filename(&url).unwrap();
        assert_eq!(cat, "Li");
        assert_eq!(file, "Li_21.vrp");
    }

    #[test]
    fn too_few_segments() {
        let url = Url::parse("http://host/only.vrp").unwrap();
        match category_and_filename(&url) {
            Err(TargetError::TooFewSegments { found, .. }) => assert_eq!(found, 1),
            other => panic!("expected TooFewSegments, got {:?}", other),
        }
    }

    #[test]
    fn trailing_slash_segments_are_skipped() {
        let url = Url::parse("http://host/a/B/B-n31-k5.vrp/").unwrap();
        let (cat, file) = category_and_filename(&url).unwrap();
        assert_eq!(cat, "B");
        assert_eq!(file, "B-n31-k5.vrp");
    }

    #[test]
    fn spaces_in_category_and_filename_are_decoded() {
        let url = resolve_link(&base(), "/a/b/c/Set A/x y.vrp").unwrap();
        let (cat, file) = category_and_filename(&url).unwrap();
        assert_eq!(cat, "Set A");
        assert_eq!(file, "x y.vrp");
    }

    #[test]
    fn already_encoded_segments_are_decoded_once() {
        let url = Url::parse("http://host/a/Set%20B/y%2Bz.vrp").unwrap();
        let (cat, file) = category_and_filename(&url).unwrap();
        assert_eq!(cat, "Set B");
        assert_eq!(file, "y+z.vrp");
    }

    #[test]
    fn unusable_segments() {
        for link in [
            "http://host/a/x%5Cy/f.vrp",
            "http://host/a/x%2Fy/f.vrp",
            "http://host/a/B/f%00.vrp",
            "http://host/a/B/%FF.vrp",
        ] {
            let url = Url::parse(link).unwrap();
            match category_and_filename(&url) {
                Err(TargetError::BadSegment { .. }) => {}
                other => panic!("{link}: expected BadSegment, got {:?}", other),
            }
        }
        assert!(!is_usable_segment(".."));
    }
}
