//! Page identifiers used for navigation and per-page state namespaces.

use std::{fmt, str::FromStr};

use crate::errors::ActivityError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    #[default]
    Home,
    BudgetCheck,
    ActivityList,
    ReturnProjection,
    ActivityObjects,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::BudgetCheck,
        PageId::ActivityList,
        PageId::ReturnProjection,
        PageId::ActivityObjects,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::BudgetCheck => "check",
            PageId::ActivityList => "activities",
            PageId::ReturnProjection => "returns",
            PageId::ActivityObjects => "objects",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::BudgetCheck => "Exercise 1 - Budget check",
            PageId::ActivityList => "Exercise 2 - Activity list",
            PageId::ReturnProjection => "Exercise 3 - Expected returns",
            PageId::ActivityObjects => "Exercise 4 - Activity objects",
        }
    }

    /// Position in the navigation menu; `0` is home.
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|page| *page == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Accepts the slug, the exercise number (`0`–`4`), or the variant name.
impl FromStr for PageId {
    type Err = ActivityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let needle = input.trim().to_ascii_lowercase();
        if let Ok(position) = needle.parse::<usize>() {
            if let Some(page) = Self::ALL.get(position) {
                return Ok(*page);
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|page| {
                page.slug() == needle || format!("{page:?}").to_ascii_lowercase() == needle
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|page| page.slug()).collect();
                ActivityError::validation(format!(
                    "unknown page `{}` (expected one of: {})",
                    input.trim(),
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_aliases() {
        assert_eq!("home".parse::<PageId>().unwrap(), PageId::Home);
        assert_eq!("0".parse::<PageId>().unwrap(), PageId::Home);
        assert_eq!("3".parse::<PageId>().unwrap(), PageId::ReturnProjection);
        assert_eq!("Objects".parse::<PageId>().unwrap(), PageId::ActivityObjects);
        assert_eq!("budgetcheck".parse::<PageId>().unwrap(), PageId::BudgetCheck);
    }

    #[test]
    fn unknown_page_lists_choices() {
        let err = "5".parse::<PageId>().unwrap_err();
        assert!(err.to_string().contains("activities"));
    }

    #[test]
    fn positions_match_menu_order() {
        assert_eq!(PageId::ActivityObjects.position(), 4);
    }
}
