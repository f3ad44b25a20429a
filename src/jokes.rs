//! Joke List State
//!
//! Owns the known jokes, the set of ids already seen, and the store they
//! persist to. Mutations happen on the owned collection first, then the
//! full list is saved as a separate step.

use std::collections::HashSet;

use crate::api::{FetchError, JokeSource};
use crate::models::Joke;
use crate::storage::JokeStore;

#[derive(Debug, Clone)]
pub struct JokeList<S> {
    jokes: Vec<Joke>,
    seen: HashSet<String>,
    store: S,
}

impl<S: JokeStore> JokeList<S> {
    /// Read the persisted list and rebuild the dedup set from it
    pub fn load(store: S) -> Self {
        let jokes = store.load();
        let seen = jokes.iter().map(|joke| joke.id.clone()).collect();
        Self { jokes, seen, store }
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Display order: most votes first, insertion order on ties
    pub fn sorted_for_display(&self) -> Vec<Joke> {
        let mut sorted = self.jokes.clone();
        sorted.sort_by(|a, b| b.votes.cmp(&a.votes));
        sorted
    }

    /// Request jokes one at a time until `target_count` unseen ones have been
    /// collected, then append them all and save.
    ///
    /// Ids accepted earlier in the same cycle count as seen too, so a joke
    /// served twice before the append cannot be double-counted. The first
    /// failed request aborts the whole cycle: nothing collected so far is
    /// kept, and neither the list nor the dedup set changes.
    pub async fn fetch_new(
        &mut self,
        source: &impl JokeSource,
        target_count: usize,
    ) -> Result<usize, FetchError> {
        let mut fresh: Vec<Joke> = Vec::new();
        let mut pending: HashSet<String> = HashSet::new();

        while fresh.len() < target_count {
            let response = source.fetch_joke().await?;
            if self.seen.contains(&response.id) || pending.contains(&response.id) {
                continue;
            }
            pending.insert(response.id.clone());
            fresh.push(Joke {
                id: response.id,
                text: response.joke,
                votes: 0,
            });
        }

        let added = fresh.len();
        self.seen.extend(fresh.iter().map(|joke| joke.id.clone()));
        self.jokes.extend(fresh);
        self.store.save(&self.jokes);
        Ok(added)
    }

    /// Add `delta` to the matching joke's votes and save; unknown ids are a
    /// no-op and nothing is written
    pub fn vote(&mut self, id: &str, delta: i32) {
        let Some(joke) = self.jokes.iter_mut().find(|joke| joke.id == id) else {
            return;
        };
        joke.votes += delta;
        self.store.save(&self.jokes);
    }
}
