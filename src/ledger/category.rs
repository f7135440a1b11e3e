use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of spending and earning categories offered by the menu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Groceries,
    Transport,
    Utilities,
    Dining,
    Entertainment,
    Salary,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Groceries,
        Category::Transport,
        Category::Utilities,
        Category::Dining,
        Category::Entertainment,
        Category::Salary,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Dining => "Dining",
            Category::Entertainment => "Entertainment",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }

    /// Comma separated list used in prompts and error messages.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Category::from_name("groceries"), Some(Category::Groceries));
        assert_eq!(Category::from_name("SALARY"), Some(Category::Salary));
        assert_eq!(Category::from_name("Rent"), None);
    }

    #[test]
    fn choices_keep_menu_order() {
        assert_eq!(
            Category::choices(),
            "Groceries, Transport, Utilities, Dining, Entertainment, Salary, Other"
        );
    }
}
