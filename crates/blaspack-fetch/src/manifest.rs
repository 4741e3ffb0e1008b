//! Upstream target manifest: fetch, verify, parse.
//!
//! The set of valid `TARGET=` names lives in `TargetList.txt` in the
//! OpenBLAS repository. The recipe pins one release, so the file's content
//! is known in advance and checked against a fixed SHA-256 digest before a
//! single line of it is trusted. A line counts as a target name only if it
//! consists of one or more uppercase ASCII letters and nothing else; every
//! other line (section headers, blank lines, mixed-case notes) is ignored.

use blaspack_core::TargetSet;

use crate::error::{FetchError, Result};
use crate::http;
use crate::integrity::Digest;

/// Pinned SHA-256 of `TargetList.txt` for the recipe's OpenBLAS release.
pub const TARGET_LIST_DIGEST: &str =
    "383b9fb0113801fa00efbb9c80f5dd90ded99c893b3164a86e27289400600bde";

/// URL of the target manifest for a given upstream version.
pub fn target_list_url(version: &str) -> String {
    format!("https://raw.githubusercontent.com/xianyi/OpenBLAS/v{version}/TargetList.txt")
}

/// Verify the manifest body against the pinned digest and parse it.
///
/// Pure over the body bytes; the URL only labels the error. On a digest
/// mismatch no entries are accepted, valid-looking lines included.
pub fn parse_verified(body: &[u8], url: &str) -> Result<TargetSet> {
    let expected = Digest::expected(TARGET_LIST_DIGEST);
    let actual = Digest::compute(body);
    if actual != expected {
        return Err(FetchError::IntegrityMismatch {
            url: url.to_string(),
            expected: expected.as_str().to_string(),
            actual: actual.as_str().to_string(),
        });
    }

    Ok(parse_targets(&String::from_utf8_lossy(body)))
}

/// Extract target names from manifest text, preserving file order.
pub fn parse_targets(text: &str) -> TargetSet {
    let names = text
        .lines()
        .filter(|line| is_target_name(line))
        .map(str::to_string)
        .collect();
    TargetSet::new(names)
}

/// Fetch and verify the manifest, producing the target set.
pub fn fetch_target_set(version: &str) -> Result<TargetSet> {
    let url = target_list_url(version);
    let client = http::client()?;
    let body = http::get_bytes(&client, &url)?;
    parse_verified(&body, &url)
}

/// One or more uppercase ASCII letters, and only that.
fn is_target_name(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_name_pattern() {
        assert!(is_target_name("NEHALEM"));
        assert!(is_target_name("A"));
        assert!(!is_target_name(""));
        assert!(!is_target_name("CORE2 "));
        assert!(!is_target_name("1.X86/X86_64"));
        assert!(!is_target_name("Force Target"));
        assert!(!is_target_name("SKYLAKEX (no AVX512)"));
    }

    #[test]
    fn url_embeds_version() {
        assert_eq!(
            target_list_url("0.3.5"),
            "https://raw.githubusercontent.com/xianyi/OpenBLAS/v0.3.5/TargetList.txt"
        );
    }

    #[test]
    fn digest_mismatch_accepts_nothing() {
        let body = b"NEHALEM\nHASWELL\n";
        let err = parse_verified(body, "http://example/TargetList.txt").unwrap_err();
        match err {
            FetchError::IntegrityMismatch { expected, actual, .. } => {
                assert_eq!(expected, TARGET_LIST_DIGEST);
                assert_ne!(actual, expected);
            }
            other => panic!("expected IntegrityMismatch, got {other:?}"),
        }
    }

    #[test]
    fn parse_keeps_file_order_and_skips_noise() {
        let text = "1.X86/X86_64\nGENERIC\n\nNEHALEM\nForce Target Examples\nZEN\n";
        let set = parse_targets(text);
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["GENERIC", "NEHALEM", "ZEN"]);
        assert_eq!(set.first().unwrap(), "GENERIC");
    }
}
