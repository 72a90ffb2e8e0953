use client::{RequestConfig, RequestLifecycle, run_cancellable};
use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_pending: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently pending, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_pending && !self.data.is_fetched() && self.error.is_none()
    }
}

/// Fetch JSON from a URL, tracking pending/error/data state.
///
/// Fetches on mount and whenever the url changes. Each new request
/// supersedes the previous one: at most one request is in flight per
/// hook instance, and a superseded or unmounted request never touches
/// state. On failure the previous data is left in place so consumers
/// can keep showing it alongside the error.
///
/// The options are snapshotted on the first render; passing a fresh
/// value on a later render does not restart the request. Only a url
/// change (or `refetch`) does.
///
/// # Example
///
/// ```rust,ignore
/// #[function_component]
/// pub fn TripList() -> Html {
///     let trips = use_fetch::<Vec<Trip>>(
///         trips_url(),
///         RequestConfig::default(),
///     );
///
///     match trips.data.as_ref() {
///         Some(trips) => render_trips(trips),
///         None if trips.is_pending => html! { <p>{"Loading..."}</p> },
///         None => html! { <p>{trips.error.clone()}</p> },
///     }
/// }
/// ```
#[hook]
pub fn use_fetch<T>(url: String, options: RequestConfig) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_pending = use_state(|| false);

    // Snapshot of the options taken on first render; later values are
    // never re-compared.
    let options = use_memo((), move |_| options);

    // Owns the abort handle of the single in-flight request.
    let lifecycle = use_mut_ref(RequestLifecycle::new);

    let run = {
        let data = data.clone();
        let error = error.clone();
        let is_pending = is_pending.clone();
        let options = options.clone();
        let lifecycle = lifecycle.clone();

        use_callback(url.clone(), move |_, url| {
            let registration = lifecycle.borrow_mut().supersede();

            is_pending.set(true);
            error.set(None);

            let data = data.clone();
            let error = error.clone();
            let is_pending = is_pending.clone();
            let options = options.clone();
            let url = url.clone();

            yew::platform::spawn_local(async move {
                let client = crate::get_fetch_client();
                let result = run_cancellable(
                    async { client.fetch_json::<T>(&url, &options).await },
                    registration,
                )
                .await;

                match result {
                    Ok(value) => {
                        data.set(FetchState::Fetched(value));
                        error.set(None);
                        is_pending.set(false);
                    }
                    Err(e) if e.is_cancelled() => {
                        // Superseded or unmounted; the outcome is void
                        // and must not touch state.
                        tracing::debug!("the fetch was aborted");
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        is_pending.set(false);
                    }
                }
            });
        })
    };

    // Fetch on mount and on url change; abort the in-flight request on
    // supersede and on unmount.
    {
        let run = run.clone();
        let lifecycle = lifecycle.clone();

        use_effect_with(url, move |_| {
            run.emit(());
            move || lifecycle.borrow_mut().cancel()
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_pending: *is_pending,
        error: (*error).clone(),
        refetch: Callback::from(move |_| run.emit(())),
    }
}
