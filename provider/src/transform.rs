use std::collections::HashSet;

use models::{
    Aggregate, CompactBasic, CompactCard, CompactRecord, ScryfallCard, ScryfallSet,
};
use scryfall::Category;
use tracing::{debug, warn};

/// Illustration ids already written for the current category.
#[derive(Debug, Default)]
pub struct SeenArt(HashSet<String>);

impl SeenArt {
    /// True the first time an illustration id is offered. Cards without one never pass.
    pub fn admit(&mut self, illustration_id: Option<&str>) -> bool {
        match illustration_id {
            Some(id) => self.0.insert(id.to_owned()),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Card,
    Basic,
    SetIndex,
}

impl From<Category> for Transform {
    fn from(category: Category) -> Self {
        match category {
            Category::Set => Transform::SetIndex,
            Category::Basic => Transform::Basic,
            _ => Transform::Card,
        }
    }
}

pub fn project_card(card: &ScryfallCard) -> CompactRecord {
    CompactRecord::Card(CompactCard::from(card))
}

pub fn project_basic(card: &ScryfallCard) -> CompactRecord {
    CompactRecord::Basic(CompactBasic::from(card))
}

/// Appends one page of cards, keeping only the first printing of each artwork.
pub fn add_cards(
    aggregate: &mut Aggregate,
    seen: &mut SeenArt,
    cards: Vec<ScryfallCard>,
    project: fn(&ScryfallCard) -> CompactRecord,
) {
    for card in cards {
        if seen.admit(card.illustration_id.as_deref()) {
            aggregate.data.push(project(&card));
        }
    }
}

/// Adds every non-token set to the set index. A set coded `data` would
/// collide with the record list in the written file and is left out.
pub fn add_sets(aggregate: &mut Aggregate, sets: Vec<ScryfallSet>) {
    for set in sets {
        if set.is_token() {
            continue;
        }
        if set.code == "data" {
            warn!(name = ?set.name, "Set code `data` collides with the record list, skipping");
            continue;
        }
        match set.index_entry() {
            Some(entry) => {
                aggregate.sets.insert(set.code, entry);
            }
            None => debug!(code = %set.code, "Set has no name or icon, skipping"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn card(name: &str, illustration_id: Option<&str>) -> ScryfallCard {
        ScryfallCard {
            name: Some(name.to_string()),
            illustration_id: illustration_id.map(str::to_string),
            image_uris: Some(HashMap::from([
                ("normal".to_string(), format!("https://img/{name}.jpg")),
                ("art_crop".to_string(), format!("https://img/{name}-crop.jpg")),
            ])),
            ..Default::default()
        }
    }

    fn set(code: &str, name: &str, icon: &str, set_type: &str) -> ScryfallSet {
        ScryfallSet {
            code: code.to_string(),
            name: Some(name.to_string()),
            icon_svg_uri: Some(icon.to_string()),
            set_type: Some(set_type.to_string()),
        }
    }

    fn names(aggregate: &Aggregate) -> Vec<String> {
        aggregate
            .data
            .iter()
            .filter_map(|record| match record {
                CompactRecord::Card(card) => card.name.clone(),
                CompactRecord::Basic(basic) => basic.name.clone(),
            })
            .collect()
    }

    #[test]
    fn admits_each_artwork_once() {
        let mut seen = SeenArt::default();
        assert!(seen.admit(Some("art-1")));
        assert!(!seen.admit(Some("art-1")));
        assert!(!seen.admit(None));
        assert!(seen.admit(Some("art-2")));
    }

    #[test]
    fn first_printing_wins_across_pages() {
        let mut aggregate = Aggregate::default();
        let mut seen = SeenArt::default();
        add_cards(
            &mut aggregate,
            &mut seen,
            vec![card("Alpha Bolt", Some("x")), card("No Art", None)],
            project_card,
        );
        add_cards(
            &mut aggregate,
            &mut seen,
            vec![card("Reprint Bolt", Some("x")), card("Shock", Some("y"))],
            project_card,
        );
        assert_eq!(names(&aggregate), ["Alpha Bolt", "Shock"]);
    }

    #[test]
    fn basics_use_set_code() {
        let mut aggregate = Aggregate::default();
        let mut seen = SeenArt::default();
        let mut island = card("Island", Some("i"));
        island.set = Some("lea".to_string());
        add_cards(&mut aggregate, &mut seen, vec![island], project_basic);
        assert_eq!(names(&aggregate), ["lea"]);
    }

    #[test]
    fn token_sets_left_out_of_index() {
        let mut aggregate = Aggregate::default();
        add_sets(
            &mut aggregate,
            vec![
                set("abc", "Alpha Set", "u", "token"),
                set("xyz", "Beta", "v", "core"),
            ],
        );
        assert!(aggregate.data.is_empty());
        assert!(!aggregate.sets.contains_key("abc"));
        assert_eq!(
            aggregate.sets.get("xyz"),
            Some(&("Beta".to_string(), "v".to_string()))
        );
    }

    #[test]
    fn set_coded_data_does_not_replace_records() {
        let mut aggregate = Aggregate::default();
        add_sets(
            &mut aggregate,
            vec![set("data", "Data Set", "d", "core"), set("lea", "Alpha", "a", "core")],
        );
        assert!(!aggregate.sets.contains_key("data"));
        assert_eq!(
            serde_json::to_string(&aggregate).unwrap(),
            r#"{"data":[],"lea":["Alpha","a"]}"#
        );
    }

    #[test]
    fn categories_pick_their_transform() {
        assert_eq!(Transform::from(Category::Set), Transform::SetIndex);
        assert_eq!(Transform::from(Category::Basic), Transform::Basic);
        assert_eq!(Transform::from(Category::Wrath), Transform::Card);
    }
}
