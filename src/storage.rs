//! Local Storage Persistence
//!
//! The joke list is written to one localStorage slot as a JSON array and
//! read back once at startup.

use crate::models::Joke;

pub const STORAGE_KEY: &str = "jokes";

/// Where the joke list is persisted between sessions
pub trait JokeStore {
    fn load(&self) -> Vec<Joke>;
    fn save(&self, jokes: &[Joke]);
}

/// `window.localStorage` under the fixed key
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl JokeStore for BrowserStore {
    fn load(&self) -> Vec<Joke> {
        let raw = local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        decode_jokes(raw.as_deref())
    }

    fn save(&self, jokes: &[Joke]) {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(jokes) {
            Ok(json) => {
                if storage.set_item(STORAGE_KEY, &json).is_err() {
                    web_sys::console::warn_1(&"[STORE] Failed to write joke list".into());
                }
            }
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[STORE] Failed to serialize joke list: {}", err).into(),
                );
            }
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Absent or malformed stored text means an empty list, never an error
pub fn decode_jokes(raw: Option<&str>) -> Vec<Joke> {
    raw.and_then(|text| serde_json::from_str(text).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_missing_value() {
        assert!(decode_jokes(None).is_empty());
    }

    #[test]
    fn test_decode_malformed_value() {
        assert!(decode_jokes(Some("not json")).is_empty());
        assert!(decode_jokes(Some("{\"id\":\"a\"}")).is_empty());
    }

    #[test]
    fn test_decode_preserves_order_and_fields() {
        let stored = r#"[
            {"id":"b","text":"second","votes":-2},
            {"id":"a","text":"first","votes":7}
        ]"#;
        let jokes = decode_jokes(Some(stored));
        assert_eq!(jokes.len(), 2);
        assert_eq!(jokes[0].id, "b");
        assert_eq!(jokes[0].votes, -2);
        assert_eq!(jokes[1].text, "first");
        assert_eq!(jokes[1].votes, 7);
    }

    #[test]
    fn test_round_trip() {
        let jokes = vec![
            Joke { id: "x".to_string(), text: "why?".to_string(), votes: 3 },
            Joke { id: "y".to_string(), text: "because".to_string(), votes: -1 },
        ];
        let json = serde_json::to_string(&jokes).unwrap();
        assert_eq!(decode_jokes(Some(&json)), jokes);
    }
}
