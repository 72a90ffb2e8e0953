use client::FetchClient;
use yew::prelude::*;

mod components;
mod hooks;
mod logs;

pub use components::{Trip, TripList};
pub use hooks::{FetchHookReturn, FetchState, use_fetch};
pub use logs::init_logging;

// Global fetch client - hooks create one per request batch
pub fn get_fetch_client() -> FetchClient {
    FetchClient::new()
}

// Trips endpoint - configurable via environment or same-origin fallback
pub fn trips_url() -> String {
    option_env!("TRIPS_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to the current origin
            let window = web_sys::window().unwrap();
            let origin = window.location().origin().unwrap();
            format!("{origin}/trips")
        })
}

#[function_component]
pub fn App() -> Html {
    let show_trips = use_state(|| true);

    let on_toggle = {
        let show_trips = show_trips.clone();
        Callback::from(move |_| show_trips.set(!*show_trips))
    };

    html! {
        <div class="min-h-screen bg-white text-gray-900">
            <main class="max-w-3xl mx-auto px-4 py-8">
                <button
                    class="px-3 py-1 rounded border border-gray-300"
                    onclick={on_toggle}
                >
                    { if *show_trips { "hide trips" } else { "show trips" } }
                </button>
                {
                    // Unmounting the list aborts its in-flight request.
                    if *show_trips {
                        html! { <TripList /> }
                    } else {
                        html! {}
                    }
                }
            </main>
        </div>
    }
}
