//! Skill tag selection for the student flow.
//!
//! A [`SkillSet`] is a duplicate-free set of tags that preserves insertion
//! order for display. Tags come from the suggested vocabulary
//! ([`vocab::SKILL_TAGS`](crate::vocab::SKILL_TAGS)) or from free-text
//! additions. There is no upper bound on the number of tags.

use serde::{Deserialize, Serialize};

/// An insertion-ordered, duplicate-free set of skill tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    tags: Vec<String>,
}

impl SkillSet {
    /// Create an empty skill set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the set contains `tag` (case-sensitive exact match).
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Flip membership of `tag`: remove it if present, append it if absent.
    ///
    /// Removal splices the tag out, leaving the remaining tags in their
    /// original insertion order.
    pub fn toggle(&mut self, tag: &str) {
        match self.tags.iter().position(|t| t == tag) {
            Some(idx) => {
                self.tags.remove(idx);
            }
            None => self.tags.push(tag.to_string()),
        }
    }

    /// Append a free-text tag.
    ///
    /// Leading/trailing whitespace is trimmed. Empty input and tags already
    /// present (case-sensitive exact match) are no-ops.
    pub fn add_custom(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return;
        }
        self.tags.push(trimmed.to_string());
    }

    /// Remove `tag` if present; no-op otherwise.
    pub fn remove(&mut self, tag: &str) {
        if let Some(idx) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(idx);
        }
    }

    /// The chosen tags in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(tags: &[&str]) -> SkillSet {
        let mut set = SkillSet::new();
        for tag in tags {
            set.add_custom(tag);
        }
        set
    }

    // -- toggle --

    #[test]
    fn toggle_adds_when_absent() {
        let mut set = SkillSet::new();
        set.toggle("Data Science");
        assert!(set.contains("Data Science"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn toggle_removes_when_present() {
        let mut set = set_of(&["Data Science"]);
        set.toggle("Data Science");
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let original = set_of(&["Web Development", "Marketing", "Finance"]);

        let mut set = original.clone();
        set.toggle("Marketing");
        set.toggle("Marketing");
        assert_eq!(set, original);
    }

    #[test]
    fn removal_preserves_insertion_order_of_rest() {
        let mut set = set_of(&["A", "B", "C", "D"]);
        set.toggle("B");
        assert_eq!(set.as_slice(), ["A", "C", "D"]);
    }

    // -- add_custom --

    #[test]
    fn add_custom_trims_whitespace() {
        let mut set = SkillSet::new();
        set.add_custom("  Rust  ");
        assert_eq!(set.as_slice(), ["Rust"]);
    }

    #[test]
    fn add_custom_empty_is_noop() {
        let mut set = SkillSet::new();
        set.add_custom("");
        set.add_custom("   ");
        assert!(set.is_empty());
    }

    #[test]
    fn add_custom_duplicate_is_noop() {
        let mut set = SkillSet::new();
        set.add_custom("Rust");
        set.add_custom("Rust");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn add_custom_is_case_sensitive() {
        let mut set = SkillSet::new();
        set.add_custom("Rust");
        set.add_custom("rust");
        assert_eq!(set.len(), 2);
    }

    // -- remove --

    #[test]
    fn remove_missing_is_noop() {
        let mut set = set_of(&["A"]);
        set.remove("B");
        assert_eq!(set.as_slice(), ["A"]);
    }

    #[test]
    fn no_upper_bound_on_tag_count() {
        let mut set = SkillSet::new();
        for i in 0..200 {
            set.add_custom(&format!("skill-{i}"));
        }
        assert_eq!(set.len(), 200);
    }
}
