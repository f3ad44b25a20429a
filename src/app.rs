//! JokeBox Frontend App
//!
//! Main application component: owns the joke list and the loading flag,
//! drives fetch cycles, and surfaces fetch failures.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DadJokeApi;
use crate::components::JokeCard;
use crate::jokes::JokeList;
use crate::storage::BrowserStore;

/// Default error surface: a blocking browser alert with the raw message
fn alert_fetch_error(message: String) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&message);
    }
}

#[component]
pub fn App(
    /// How many new jokes one fetch cycle collects
    #[prop(default = 1)] jokes_per_fetch: usize,
    /// Where fetch failures are reported
    #[prop(into, default = Callback::new(alert_fetch_error))] on_fetch_error: Callback<String>,
) -> impl IntoView {
    // State
    let (list, set_list) = signal(JokeList::load(BrowserStore));
    let (loading, set_loading) = signal(false);

    // While loading, the list view (and its vote buttons) is unmounted, so
    // nothing can touch the list until the cycle writes it back.
    let run_fetch_cycle = move || {
        set_loading.set(true);
        spawn_local(async move {
            let mut updated = list.get_untracked();
            match updated.fetch_new(&DadJokeApi, jokes_per_fetch).await {
                Ok(added) => {
                    web_sys::console::log_1(
                        &format!("[APP] Fetched {} new jokes", added).into(),
                    );
                    set_list.set(updated);
                }
                Err(err) => {
                    on_fetch_error.run(err.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    // Fetch on startup when nothing was persisted
    Effect::new(move |_| {
        if list.with_untracked(|list| list.is_empty()) {
            run_fetch_cycle();
        }
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="joke-board-loader">
                        <span class="loader-icon">"😂"</span>
                        <h1 class="joke-board-title">"Loading..."</h1>
                    </div>
                }
            }
        >
            <div class="joke-board">
                <aside class="joke-board-sidebar">
                    <h1 class="joke-board-title">
                        <span class="title-joke">"Joke"</span>
                        <span class="title-box">"Box"</span>
                    </h1>
                    <button class="fetch-btn" on:click=move |_| run_fetch_cycle()>
                        "Fetch Jokes"
                    </button>
                </aside>

                <div class="joke-board-jokes">
                    <For
                        each=move || list.with(|list| list.sorted_for_display())
                        key=|joke| (joke.id.clone(), joke.votes)
                        children=move |joke| {
                            let up_id = joke.id.clone();
                            let down_id = joke.id.clone();
                            view! {
                                <JokeCard
                                    text=joke.text.clone()
                                    votes=joke.votes
                                    on_upvote=Callback::new(move |_| {
                                        set_list.update(|list| list.vote(&up_id, 1))
                                    })
                                    on_downvote=Callback::new(move |_| {
                                        set_list.update(|list| list.vote(&down_id, -1))
                                    })
                                />
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
