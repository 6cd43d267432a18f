//! Status Filter Selector

use serde::{Deserialize, Serialize};

/// Visibility rule applied to the collection before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// All selectors in the order the filter bar shows them
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    /// Unknown selectors fall back to `All`
    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => Filter::Pending,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// Message shown when nothing passes this filter
    pub fn empty_message(&self) -> &'static str {
        match self {
            Filter::All => "You don’t have any todos yet. Add one to get started.",
            Filter::Pending => "No pending todos. Everything’s under control.",
            Filter::Completed => "No completed todos yet. Check things off as you go.",
        }
    }

    pub fn accepts(&self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !completed,
            Filter::Completed => completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_str_conversion() {
        for filter in Filter::ALL {
            assert_eq!(Filter::from_str(filter.as_str()), filter);
        }
        assert_eq!(Filter::from_str("archived"), Filter::All);
    }

    #[test]
    fn test_empty_messages_are_distinct() {
        let [all, pending, completed] = Filter::ALL.map(|f| f.empty_message());
        assert_ne!(all, pending);
        assert_ne!(pending, completed);
        assert_ne!(all, completed);
    }
}
