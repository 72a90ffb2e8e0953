use client::RequestConfig;
use serde::Deserialize;
use yew::prelude::*;

use crate::hooks::use_fetch;
use crate::trips_url;

/// A single trip as served by the trips endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Trip {
    pub id: u32,
    pub title: String,
    pub price: String,
    pub loc: String,
}

#[function_component]
pub fn TripList() -> Html {
    let trips =
        use_fetch::<Vec<Trip>>(trips_url(), RequestConfig::default());

    let body = match trips.data.as_ref() {
        None if trips.is_pending => html! {
            <p class="text-neutral-600">{"Loading trips..."}</p>
        },
        None => match &trips.error {
            Some(error) => html! {
                <p class="text-red-700">
                    {format!("Error loading trips: {error}")}
                </p>
            },
            None => html! {
                <p class="text-neutral-600">{"No trips found"}</p>
            },
        },
        Some(trips) => html! {
            <ul class="space-y-4">
                { for trips.iter().map(|trip| html! {
                    <li key={trip.id}>
                        <h3 class="font-semibold">{trip.title.clone()}</h3>
                        <p>{format!("{} - {}", trip.price, trip.loc)}</p>
                    </li>
                }) }
            </ul>
        },
    };

    html! {
        <div class="mt-6">
            <h2 class="text-xl font-bold">{"Trips"}</h2>
            { body }
        </div>
    }
}
