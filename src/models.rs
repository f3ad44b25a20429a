//! Frontend Models
//!
//! Data structures for the joke list and the remote endpoint.

use serde::{Deserialize, Serialize};

/// One joke as kept in the list and in local storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    pub text: String,
    /// May go negative, no bound in either direction
    pub votes: i32,
}

/// Response body of the joke endpoint (field names fixed by the API)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JokeResponse {
    pub id: String,
    pub joke: String,
}
