use crate::cli::output;

pub const MAIN_MENU_PROMPT: &str = "Choose an option (1/2/3): ";

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTransaction,
    MonthlySummary,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [
        MenuChoice::AddTransaction,
        MenuChoice::MonthlySummary,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddTransaction => "Add transaction",
            MenuChoice::MonthlySummary => "Monthly summary",
            MenuChoice::Exit => "Exit",
        }
    }

    fn key(self) -> &'static str {
        match self {
            MenuChoice::AddTransaction => "1",
            MenuChoice::MonthlySummary => "2",
            MenuChoice::Exit => "3",
        }
    }

    /// Accepts the option number or, case-insensitively, its label.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|choice| {
            choice.key() == trimmed || choice.label().eq_ignore_ascii_case(trimmed)
        })
    }
}

pub fn render_main_menu() {
    output::section("Expense Tracker");
    for choice in MenuChoice::ALL {
        output::plain(format!("{}. {}", choice.key(), choice.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_labels() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::AddTransaction));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::MonthlySummary));
        assert_eq!(MenuChoice::parse("exit"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
