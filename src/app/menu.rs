pub const MENU: &str = "
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course
    2. Show current data
    3. Save data to a file
    4. Exit the program
-----------------------------------------
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
}

impl MenuChoice {
    /// Parses an already trimmed menu answer.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::Show),
            "3" => Some(MenuChoice::Save),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Register));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Show));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Save));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_unknown_choices() {
        for input in ["", "0", "5", "one", "1 2"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }
}
