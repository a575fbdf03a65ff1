use std::collections::{BTreeMap, HashMap};

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// One page of a Scryfall list response. `/sets` is a flat listing without
/// `has_more`, so the flag defaults to false.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScryfallList<T> {
    #[serde(default)]
    pub has_more: bool,
    pub next_page: Option<String>,
    pub data: Vec<T>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScryfallCard {
    pub name: Option<String>,
    pub illustration_id: Option<String>,
    pub set: Option<String>,
    pub set_type: Option<String>,
    pub image_uris: Option<HashMap<String, String>>,
    pub card_faces: Option<Vec<ScryfallCardFace>>,
    pub content_warning: Option<bool>,
    pub flavor_name: Option<String>,
    pub reprint: Option<bool>,
    pub frame_effects: Option<Vec<String>>,
    pub digital: Option<bool>,
}

impl ScryfallCard {
    /// Name shown on the front of the card: the first face wins on multi-faced cards.
    pub fn display_name(&self) -> Option<&str> {
        self.card_faces
            .as_ref()
            .and_then(|faces| faces.first())
            .and_then(|face| face.name.as_deref())
            .or(self.name.as_deref())
    }

    /// Top-level image set, falling back to the first face for cards that only carry per-face images.
    pub fn image_uris(&self) -> Option<&HashMap<String, String>> {
        self.image_uris.as_ref().or_else(|| {
            self.card_faces
                .as_ref()
                .and_then(|faces| faces.first())
                .and_then(|face| face.image_uris.as_ref())
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScryfallCardFace {
    pub name: Option<String>,
    pub image_uris: Option<HashMap<String, String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScryfallSet {
    pub code: String,
    pub name: Option<String>,
    pub icon_svg_uri: Option<String>,
    pub set_type: Option<String>,
}

impl ScryfallSet {
    pub fn is_token(&self) -> bool {
        self.set_type.as_deref() == Some("token")
    }

    /// `[name, icon]` pair for the set index; sets missing either are left out.
    pub fn index_entry(&self) -> Option<SetIndexEntry> {
        Some((self.name.clone()?, self.icon_svg_uri.clone()?))
    }
}

/// Set name and icon URI, written as a two element JSON array.
pub type SetIndexEntry = (String, String);

/// The single "normal" image plus the art crop.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactImageUris {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art_crop: Option<String>,
}

impl From<&HashMap<String, String>> for CompactImageUris {
    fn from(uris: &HashMap<String, String>) -> Self {
        CompactImageUris {
            normal: ["normal", "large", "small"]
                .iter()
                .find_map(|variant| uris.get(*variant).cloned()),
            art_crop: uris.get("art_crop").cloned(),
        }
    }
}

fn compact_images(card: &ScryfallCard) -> CompactImageUris {
    card.image_uris().map(CompactImageUris::from).unwrap_or_default()
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub image_uris: CompactImageUris,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_warning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_effects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
}

impl From<&ScryfallCard> for CompactCard {
    fn from(value: &ScryfallCard) -> Self {
        CompactCard {
            name: value.display_name().map(str::to_owned),
            image_uris: compact_images(value),
            content_warning: value.content_warning,
            flavor_name: value.flavor_name.clone(),
            reprint: value.reprint,
            frame_effects: value.frame_effects.clone(),
            digital: value.digital,
            set_type: value.set_type.clone(),
        }
    }
}

/// Basic lands are told apart by their set, so the set code stands in for the name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactBasic {
    pub image_uris: CompactImageUris,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital: Option<bool>,
}

impl From<&ScryfallCard> for CompactBasic {
    fn from(value: &ScryfallCard) -> Self {
        CompactBasic {
            image_uris: compact_images(value),
            name: value.set.clone(),
            set_type: value.set_type.clone(),
            digital: value.digital,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum CompactRecord {
    Card(CompactCard),
    Basic(CompactBasic),
}

/// Everything written for one category. Serialises as `{"data": [...]}` with the
/// set index flattened into top-level `code: [name, icon]` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub data: Vec<CompactRecord>,
    pub sets: BTreeMap<String, SetIndexEntry>,
}

impl Serialize for Aggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.sets.len()))?;
        map.serialize_entry("data", &self.data)?;
        for (code, entry) in &self.sets {
            map.serialize_entry(code, entry)?;
        }
        map.end()
    }
}
