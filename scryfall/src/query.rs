use std::{fmt, str::FromStr};

use crate::ScryfallError;

pub const API_BASE: &str = "https://api.scryfall.com";

/// Filters shared by every card category: no Secret Lair promo ranges, no
/// rebalanced `A-` cards, no double-faced or split cards, no mystery or
/// playtest sets, English printings only.
const CARD_FILTERS: &str = "+-%28set%3Asld+%28%28cn>%3D231+cn<%3D233%29+or+%28cn>%3D321+cn<%3D324%29\
+or+%28cn>%3D185+cn<%3D189%29+or+%28cn>%3D138+cn<%3D142%29+or+%28cn>%3D364+cn<%3D368%29\
+or+cn%3A669+or+cn%3A670%29%29+-name%3A%2F%5EA-%2F+not%3Adfc+not%3Asplit+-set%3Acmb2\
+-set%3Acmb1+-set%3Aplist+-set%3Adbl+language%3Aenglish";

/// Oldest printing first, one row per printing, page number appended last.
const ORDERING: &str = "&order=released&dir=asc&unique=prints&page=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Counterspell,
    Beast,
    Burn,
    Terror,
    Wrath,
    /// Every set's name and icon, keyed by set code.
    Set,
    /// Basic lands, one per distinct artwork.
    Basic,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Counterspell,
        Category::Beast,
        Category::Burn,
        Category::Terror,
        Category::Wrath,
        Category::Set,
        Category::Basic,
    ];

    /// What a run imports when no categories are given.
    pub const DEFAULT_RUN: [Category; 5] = [
        Category::Counterspell,
        Category::Beast,
        Category::Burn,
        Category::Set,
        Category::Basic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Counterspell => "counterspell",
            Category::Beast => "beast",
            Category::Burn => "burn",
            Category::Terror => "terror",
            Category::Wrath => "wrath",
            Category::Set => "set",
            Category::Basic => "basic",
        }
    }

    fn search_clause(self) -> Option<&'static str> {
        match self {
            Category::Counterspell => Some("otag%3Acounterspell+t%3Ainstant+not%3Aadventure"),
            Category::Beast => Some("-type%3Alegendary+type%3Abeast+-type%3Atoken"),
            Category::Burn => Some(
                "%28c>%3Dr+or+mana>%3Dr%29+%28o%3A%2Fdamage+to+them%2F+or+%28o%3Adeals+o%3Adamage\
+o%3A%2Fcontroller%28%5C.%7C+%29%2F%29+or+o%3A%2F~+deals+%28.%7C..%29+damage+to+%28any+target\
%7C.*player%28%5C.%7C+or+planeswalker%29%7C.*opponent%28%5C.%7C+or+planeswalker%29%29%2F%29\
+%28type%3Ainstant+or+type%3Asorcery%29+not%3Aadventure",
            ),
            Category::Terror => Some(
                "otag%3Acreature-removal+o%3A%2Fdestroy+target.%2A+%28creature%7Cpermanent%29%2F\
+%28t%3Ainstant+or+t%3Asorcery%29+o%3Atarget+not%3Aadventure",
            ),
            Category::Wrath => Some(
                "otag%3Asweeper-creature+%28t%3Ainstant+or+t%3Asorcery%29+not%3Aadventure",
            ),
            Category::Set | Category::Basic => None,
        }
    }

    /// Builds the request for this category against `api_base`.
    pub fn query(self, api_base: &str) -> Query {
        let api_base = api_base.trim_end_matches('/');
        match self {
            Category::Set => Query::Fixed {
                url: format!("{api_base}/sets"),
            },
            Category::Basic => Query::Paginated {
                base: format!("{api_base}/cards/search?q=t%3Abasic{ORDERING}"),
            },
            card => Query::Paginated {
                base: format!(
                    "{api_base}/cards/search?q={}{CARD_FILTERS}{ORDERING}",
                    card.search_clause().unwrap_or_default()
                ),
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ScryfallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScryfallError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Search URL missing only its trailing page number.
    Paginated { base: String },
    /// Complete listing endpoint, requested once.
    Fixed { url: String },
}

impl Query {
    pub fn page_url(&self, page: u32) -> String {
        match self {
            Query::Paginated { base } => format!("{base}{page}"),
            Query::Fixed { url } => url.clone(),
        }
    }

    pub fn is_paginated(&self) -> bool {
        matches!(self, Query::Paginated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_query_appends_page_number() {
        let query = Category::Counterspell.query(API_BASE);
        let url = query.page_url(3);
        assert!(url.starts_with(
            "https://api.scryfall.com/cards/search?q=otag%3Acounterspell+t%3Ainstant"
        ));
        assert!(url.contains("language%3Aenglish&order=released"));
        assert!(url.ends_with("&unique=prints&page=3"));
    }

    #[test]
    fn every_card_category_has_a_clause() {
        for category in Category::ALL {
            if let Query::Paginated { base } = category.query(API_BASE) {
                assert!(!base.contains("?q=+"), "{category} is missing its clause");
                assert!(!base.contains("?q=&"), "{category} is missing its clause");
            }
        }
    }

    #[test]
    fn basic_skips_card_filters() {
        let base = Category::Basic.query(API_BASE).page_url(1);
        assert_eq!(
            base,
            "https://api.scryfall.com/cards/search?q=t%3Abasic&order=released&dir=asc&unique=prints&page=1"
        );
    }

    #[test]
    fn set_is_a_fixed_endpoint() {
        let query = Category::Set.query("http://localhost:8080/");
        assert!(!query.is_paginated());
        assert_eq!(query.page_url(7), "http://localhost:8080/sets");
    }

    #[test]
    fn parses_known_names() {
        assert_eq!("basic".parse::<Category>().unwrap(), Category::Basic);
        assert_eq!(" Burn ".parse::<Category>().unwrap(), Category::Burn);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "lands".parse::<Category>().unwrap_err();
        assert!(matches!(err, ScryfallError::UnknownCategory(name) if name == "lands"));
    }
}
