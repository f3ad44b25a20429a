//! Joke Card Component
//!
//! Pure presentation of one joke: its text, its vote count, and the two
//! vote buttons. All decisions happen in the supplied callbacks.

use leptos::prelude::*;

/// One joke with upvote/downvote buttons
///
/// # Arguments
/// * `text` - the joke itself
/// * `votes` - current vote count, may be negative
/// * `on_upvote` / `on_downvote` - callbacks run when a button is clicked
#[component]
pub fn JokeCard(
    #[prop(into)] text: String,
    votes: i32,
    #[prop(into)] on_upvote: Callback<()>,
    #[prop(into)] on_downvote: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="joke-card">
            <div class="joke-card-buttons">
                <button class="upvote-btn" on:click=move |_| on_upvote.run(())>
                    "👍"
                </button>
                <span class="joke-card-votes">{votes}</span>
                <button class="downvote-btn" on:click=move |_| on_downvote.run(())>
                    "👎"
                </button>
            </div>
            <p class="joke-card-text">{text}</p>
        </div>
    }
}
