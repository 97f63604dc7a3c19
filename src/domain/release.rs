use serde::{Deserialize, Deserializer};

use super::Category;

/// One versioned entry of a changelog.
///
/// Keys are accepted capitalized (`Version`) or in lower case (`version`).
/// Missing or null fields decode to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Release {
    #[serde(default, alias = "version", deserialize_with = "null_as_default")]
    pub version: String,

    #[serde(default, alias = "date", deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(default, alias = "summary", deserialize_with = "null_as_default")]
    pub summary: String,

    #[serde(default, alias = "added", deserialize_with = "null_as_default")]
    pub added: Vec<String>,

    #[serde(default, alias = "changed", deserialize_with = "null_as_default")]
    pub changed: Vec<String>,

    #[serde(default, alias = "deprecated", deserialize_with = "null_as_default")]
    pub deprecated: Vec<String>,

    #[serde(default, alias = "removed", deserialize_with = "null_as_default")]
    pub removed: Vec<String>,

    #[serde(default, alias = "fixed", deserialize_with = "null_as_default")]
    pub fixed: Vec<String>,

    #[serde(default, alias = "security", deserialize_with = "null_as_default")]
    pub security: Vec<String>,

    #[serde(default, alias = "rejected", deserialize_with = "null_as_default")]
    pub rejected: Vec<String>,

    #[serde(default, alias = "notes", deserialize_with = "null_as_default")]
    pub notes: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Release {
    /// Create a release with version and date, no entries
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Release {
            version: version.into(),
            date: date.into(),
            ..Release::default()
        }
    }

    /// Set the summary line
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Append an entry to a category
    pub fn with_entry(mut self, category: Category, entry: impl Into<String>) -> Self {
        self.entries_mut(category).push(entry.into());
        self
    }

    /// Entries recorded under a category, in document order
    pub fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::Added => &self.added,
            Category::Changed => &self.changed,
            Category::Deprecated => &self.deprecated,
            Category::Removed => &self.removed,
            Category::Fixed => &self.fixed,
            Category::Security => &self.security,
            Category::Rejected => &self.rejected,
            Category::Notes => &self.notes,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Added => &mut self.added,
            Category::Changed => &mut self.changed,
            Category::Deprecated => &mut self.deprecated,
            Category::Removed => &mut self.removed,
            Category::Fixed => &mut self.fixed,
            Category::Security => &mut self.security,
            Category::Rejected => &mut self.rejected,
            Category::Notes => &mut self.notes,
        }
    }

    /// Non-empty categories with their entries, in rendering order
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.entries(category)))
            .filter(|(_, entries)| !entries.is_empty())
    }
}
