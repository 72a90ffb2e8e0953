//! Mock trip data served by the stub server.
//!
//! The dataset is fixed so integration tests can assert against it
//! directly.

use serde::{Deserialize, Serialize};

/// A single trip as served by the `/trips` route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u32,
    pub title: String,
    pub price: String,
    pub loc: String,
}

/// The fixed dataset behind `/trips` and `/trips/slow`.
pub fn trips() -> Vec<Trip> {
    vec![
        Trip {
            id: 1,
            title: "Porto Old Town Stay".to_string(),
            price: "€520".to_string(),
            loc: "Porto, Portugal".to_string(),
        },
        Trip {
            id: 2,
            title: "Dolomites Hiking Week".to_string(),
            price: "€890".to_string(),
            loc: "South Tyrol, Italy".to_string(),
        },
        Trip {
            id: 3,
            title: "Kyoto Temples and Tea".to_string(),
            price: "€1450".to_string(),
            loc: "Kyoto, Japan".to_string(),
        },
    ]
}
