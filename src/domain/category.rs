use std::fmt;

/// Kind of change recorded in a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
    Rejected,
    Notes,
}

impl Category {
    /// Every category, in rendering order
    pub const ALL: [Category; 8] = [
        Category::Added,
        Category::Changed,
        Category::Deprecated,
        Category::Removed,
        Category::Fixed,
        Category::Security,
        Category::Rejected,
        Category::Notes,
    ];

    /// Section heading used by the renderers
    pub fn label(&self) -> &'static str {
        match self {
            Category::Added => "Added",
            Category::Changed => "Changed",
            Category::Deprecated => "Deprecated",
            Category::Removed => "Removed",
            Category::Fixed => "Fixed",
            Category::Security => "Security",
            Category::Rejected => "Rejected",
            Category::Notes => "Notes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering_order() {
        let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
        assert_eq!(
            labels,
            vec![
                "Added",
                "Changed",
                "Deprecated",
                "Removed",
                "Fixed",
                "Security",
                "Rejected",
                "Notes"
            ]
        );
    }

    #[test]
    fn test_display_matches_label() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.label());
        }
    }
}
