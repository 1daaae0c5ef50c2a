//! Session catalog: the record types and the loader for the static JSON file.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::error::LoadError;

/// Catalog identifier. The data file uses numbers, but strings are accepted
/// too; `1` and `"1"` are different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl ItemId {
    /// A text id with nothing but whitespace names no item.
    pub fn is_blank(&self) -> bool {
        matches!(self, ItemId::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// A bookable session as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    #[serde(alias = "precio")]
    pub price: f64,
    #[serde(default, alias = "duracion")]
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Resolve the catalog path against the page URL.
pub fn catalog_url(page_href: &str, path: &str) -> Result<Url, LoadError> {
    let base = Url::parse(page_href)
        .map_err(|e| LoadError::Location(format!("bad page URL '{}': {}", page_href, e)))?;
    base.join(path)
        .map_err(|e| LoadError::Location(format!("bad catalog path '{}': {}", path, e)))
}

/// Parse the catalog body.
///
/// The document must be a JSON array. Entries with a missing or blank id or
/// name, entries that do not decode, and entries repeating an earlier id are
/// skipped with a warning rather than failing the whole load.
pub fn parse_catalog(body: &str) -> Result<Vec<CatalogItem>, LoadError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let total = raw.len();

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(total);
    for (index, value) in raw.into_iter().enumerate() {
        let item = match serde_json::from_value::<CatalogItem>(value) {
            Ok(item) => item,
            Err(e) => {
                warn!("Skipping invalid catalog entry #{}: {}", index, e);
                continue;
            }
        };
        if item.id.is_blank() {
            warn!("Skipping catalog entry #{} with an empty id", index);
            continue;
        }
        if item.name.trim().is_empty() {
            warn!("Skipping catalog entry {} with an empty name", item.id);
            continue;
        }
        if item.price < 0.0 || !item.price.is_finite() {
            warn!("Skipping catalog entry {} with price {}", item.id, item.price);
            continue;
        }
        if !seen.insert(item.id.clone()) {
            warn!("Skipping catalog entry with duplicate id {}", item.id);
            continue;
        }
        items.push(item);
    }

    if items.len() < total {
        info!("Catalog: kept {} of {} entries", items.len(), total);
    }
    Ok(items)
}

/// GET the catalog at `url` and parse it.
pub async fn fetch_catalog(url: &Url) -> Result<Vec<CatalogItem>, LoadError> {
    info!("Loading catalog from {}", url);
    let response = reqwest::get(url.clone()).await.map_err(|e| {
        warn!("Catalog request failed: {}", e);
        LoadError::Request(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("Catalog request returned {}", status);
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let items = parse_catalog(&body).map_err(|e| {
        warn!("Catalog body rejected: {}", e);
        e
    })?;
    info!("Loaded {} catalog entries", items.len());
    Ok(items)
}

/// Load the catalog from `path`, relative to the current page.
pub async fn load_catalog(path: &str) -> Result<Vec<CatalogItem>, LoadError> {
    let href = web_sys::window()
        .ok_or_else(|| LoadError::Location("no window object".to_string()))?
        .location()
        .href()
        .map_err(|e| {
            LoadError::Location(e.as_string().unwrap_or_else(|| "Unknown error".to_string()))
        })?;
    let url = catalog_url(&href, path)?;
    fetch_catalog(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_fields() {
        let body = r#"[
            {"id": 1, "name": "Sunrise Yoga", "description": "Gentle flow",
             "price": 25, "duration": "60 min", "instructor": "Ana"}
        ]"#;
        let items = parse_catalog(body).unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, ItemId::Number(1));
        assert_eq!(item.name, "Sunrise Yoga");
        assert_eq!(item.price, 25.0);
        assert_eq!(item.instructor.as_deref(), Some("Ana"));
        assert_eq!(item.image, None);
    }

    #[test]
    fn test_parse_spanish_fields() {
        let body = r#"[
            {"id": "med-1", "nombre": "Meditación guiada", "descripcion": "Respira",
             "precio": 18.5, "duracion": "45 min", "image": "img/med.jpg"}
        ]"#;
        let items = parse_catalog(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId::from("med-1"));
        assert_eq!(items[0].name, "Meditación guiada");
        assert_eq!(items[0].description, "Respira");
        assert_eq!(items[0].price, 18.5);
        assert_eq!(items[0].duration, "45 min");
        assert_eq!(items[0].image.as_deref(), Some("img/med.jpg"));
    }

    #[test]
    fn test_parse_skips_invalid_entries() {
        let body = r#"[
            {"id": 1, "name": "Valid", "price": 10, "duration": "30 min"},
            {"name": "No id", "price": 10},
            {"id": 3, "price": 10},
            {"id": 4, "name": "   ", "price": 10},
            {"id": 5, "name": "Negative", "price": -1},
            "not an object",
            {"id": 1, "name": "Duplicate", "price": 99}
        ]"#;
        let items = parse_catalog(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Valid");
    }

    #[test]
    fn test_parse_skips_blank_text_ids() {
        let body = r#"[
            {"id": "", "name": "X", "price": 1},
            {"id": "   ", "name": "Y", "price": 1},
            {"id": "z", "name": "Z", "price": 1}
        ]"#;
        let items = parse_catalog(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId::from("z"));
    }

    #[test]
    fn test_parse_missing_optional_text_defaults_empty() {
        let items = parse_catalog(r#"[{"id": 2, "name": "Reiki", "price": 40}]"#).unwrap();
        assert_eq!(items[0].description, "");
        assert_eq!(items[0].duration, "");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_catalog(r#"{"sessions": []}"#),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(parse_catalog("<html>"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_number_and_text_ids_differ() {
        assert_ne!(ItemId::Number(1), ItemId::from("1"));
        assert_eq!(ItemId::Number(7).to_string(), "7");
        assert_eq!(ItemId::from("x").to_string(), "x");
    }

    #[test]
    fn test_catalog_url_resolves_relative_to_page() {
        let url = catalog_url("https://shop.example/app/index.html", "data/sessions.json").unwrap();
        assert_eq!(url.as_str(), "https://shop.example/app/data/sessions.json");

        let url = catalog_url("http://localhost:8080/", "data/sessions.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/data/sessions.json");
    }

    #[test]
    fn test_catalog_url_bad_page() {
        assert!(matches!(
            catalog_url("not a url", "data/sessions.json"),
            Err(LoadError::Location(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod http {
        use super::*;
        use httpmock::prelude::*;

        #[tokio::test]
        async fn test_fetch_catalog_ok() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET).path("/data/sessions.json");
                    then.status(200).body(
                        r#"[{"id": 1, "nombre": "Yoga", "precio": 25, "duracion": "60 min"}]"#,
                    );
                })
                .await;

            let url = Url::parse(&server.url("/data/sessions.json")).unwrap();
            let items = fetch_catalog(&url).await.unwrap();
            mock.assert_async().await;
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].name, "Yoga");
        }

        #[tokio::test]
        async fn test_fetch_catalog_http_error() {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/data/sessions.json");
                    then.status(404);
                })
                .await;

            let url = Url::parse(&server.url("/data/sessions.json")).unwrap();
            let result = fetch_catalog(&url).await;
            assert!(matches!(result, Err(LoadError::Status(404))));
            // The caller's fallback only needs the message
            let message: String = result.unwrap_err().into();
            assert!(message.contains("404"));
        }

        #[tokio::test]
        async fn test_fetch_catalog_bad_body() {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/data/sessions.json");
                    then.status(200).body("not json");
                })
                .await;

            let url = Url::parse(&server.url("/data/sessions.json")).unwrap();
            assert!(matches!(
                fetch_catalog(&url).await,
                Err(LoadError::Parse(_))
            ));
        }
    }
}
