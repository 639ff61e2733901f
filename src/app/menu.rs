use crate::core::PricingTier;
use crate::domain::{Bracket, Quote};

pub const MENU: &str = "\n=== Insurance Quote Engine Menu ===\n\
1. Add Bracket\n\
2. Remove Bracket\n\
3. List Brackets\n\
4. Input Applicant and Calculate Premium\n\
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBracket,
    RemoveBracket,
    ListBrackets,
    Quote,
    Exit,
}

impl MenuChoice {
    /// `None` for anything that is not a menu number; the session warns
    /// and reprompts.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::AddBracket),
            "2" => Some(MenuChoice::RemoveBracket),
            "3" => Some(MenuChoice::ListBrackets),
            "4" => Some(MenuChoice::Quote),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn format_bracket_line(index: usize, bracket: &Bracket, currency: &str) -> String {
    format!(
        "{}. Age Range: [{}-{}], Premium: {}{}",
        index, bracket.min_age, bracket.max_age, currency, bracket.rate
    )
}

pub fn format_bracket_list(brackets: &[Bracket], currency: &str) -> String {
    if brackets.is_empty() {
        return "No brackets defined.".to_string();
    }
    brackets
        .iter()
        .enumerate()
        .map(|(i, b)| format_bracket_line(i, b, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_quote_line(tier: PricingTier, quote: Option<&Quote>, currency: &str) -> String {
    match quote {
        Some(q) => format!("{} Premium: {}{}", tier, currency, q.amount),
        None => format!("{}: No matching bracket for age.", tier),
    }
}
