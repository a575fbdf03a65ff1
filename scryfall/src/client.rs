use models::ScryfallList;
use reqwest::{blocking::Client, header};
use serde::de::DeserializeOwned;

use crate::ScryfallError;

/// Anything that can answer a GET with a response body.
pub trait PageSource {
    fn get(&self, url: &str) -> Result<String, ScryfallError>;
}

pub struct ScryfallClient {
    client: Client,
    user_agent: String,
}

impl ScryfallClient {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            user_agent: user_agent.into(),
        }
    }
}

impl PageSource for ScryfallClient {
    fn get(&self, url: &str) -> Result<String, ScryfallError> {
        let res = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::ACCEPT, "application/json")
            .send()?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            return Err(ScryfallError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        Ok(res.text()?)
    }
}

pub fn decode_page<T: DeserializeOwned>(
    url: &str,
    body: &str,
) -> Result<ScryfallList<T>, ScryfallError> {
    serde_json::from_str(body).map_err(|source| ScryfallError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use models::{ScryfallCard, ScryfallSet};

    use super::*;

    #[test]
    fn decodes_search_page() {
        let body = r#"{
            "object": "list",
            "total_cards": 2,
            "has_more": true,
            "next_page": "https://api.scryfall.com/cards/search?page=2",
            "data": [
                {"object": "card", "name": "Counterspell", "illustration_id": "a1", "reprint": false},
                {"object": "card", "name": "Mana Leak", "illustration_id": "b2"}
            ]
        }"#;
        let page: ScryfallList<ScryfallCard> = decode_page("u", body).unwrap();
        assert!(page.has_more);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].illustration_id.as_deref(), Some("b2"));
    }

    #[test]
    fn decode_failure_names_the_url() {
        let err = decode_page::<ScryfallSet>("https://api.scryfall.com/sets", "<html>")
            .unwrap_err();
        assert!(err.to_string().contains("https://api.scryfall.com/sets"));
    }
}
