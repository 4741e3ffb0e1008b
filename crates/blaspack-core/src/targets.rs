//! Valid target microarchitecture identifiers.
//!
//! OpenBLAS ships hand-tuned kernels per CPU microarchitecture, named by an
//! upstream-defined identifier (`NEHALEM`, `HASWELL`, `ARMV8`, ...). The set
//! of valid names comes from the upstream `TargetList.txt` for the pinned
//! release. `blaspack-fetch` downloads and integrity-checks that file and
//! produces a `TargetSet`; tests construct one directly from a slice.

use crate::error::{CoreError, Result};

/// An immutable, ordered set of valid target microarchitecture names.
///
/// Order matters: the first entry is the default target when the recipe
/// does not request one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    names: Vec<String>,
}

impl TargetSet {
    /// Build a target set from already-validated names, preserving order.
    pub fn new(names: Vec<String>) -> Self {
        TargetSet { names }
    }

    /// The default target: the first entry of the upstream list.
    pub fn first(&self) -> Result<&str> {
        self.names
            .first()
            .map(String::as_str)
            .ok_or(CoreError::EmptyTargetSet)
    }

    /// Membership check, exact match.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of known targets.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the target names in upstream order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TargetSet {
        TargetSet::new(vec![
            "GENERIC".to_string(),
            "NEHALEM".to_string(),
            "HASWELL".to_string(),
        ])
    }

    #[test]
    fn first_is_default() {
        assert_eq!(sample().first().unwrap(), "GENERIC");
    }

    #[test]
    fn empty_set_has_no_default() {
        let set = TargetSet::new(Vec::new());
        assert!(matches!(set.first(), Err(CoreError::EmptyTargetSet)));
    }

    #[test]
    fn membership_is_exact() {
        let set = sample();
        assert!(set.contains("HASWELL"));
        assert!(!set.contains("haswell"));
        assert!(!set.contains("SKYLAKEX"));
    }

    #[test]
    fn iteration_preserves_order() {
        let set = sample();
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["GENERIC", "NEHALEM", "HASWELL"]);
    }
}
