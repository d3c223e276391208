//! Commit type catalog
//!
//! The fixed, ordered list of conventional commit types offered
//! in the selection list.

/// A selectable commit type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryItem {
    /// Label written into the commit message, including its glyph
    pub label: &'static str,
    /// One-line explanation shown under the label
    pub description: &'static str,
}

impl CategoryItem {
    const fn new(label: &'static str, description: &'static str) -> Self {
        Self { label, description }
    }
}

/// All commit types, in display order
pub const CATALOG: &[CategoryItem] = &[
    CategoryItem::new("📦feat", "A new feature"),
    CategoryItem::new("🔨fix", "A bug fix"),
    CategoryItem::new("📝docs", "Documentation only changes"),
    CategoryItem::new("🎨style", "Changes that do not affect the meaning of the code"),
    CategoryItem::new("🧹refactor", "A code change that neither fixes a bug nor adds a feature"),
    CategoryItem::new("🚀perf", "A code change that improves performance"),
    CategoryItem::new("🧪test", "Adding missing tests or correcting existing tests"),
    CategoryItem::new("👷chore", "Changes to the build process or auxiliary tools"),
];
