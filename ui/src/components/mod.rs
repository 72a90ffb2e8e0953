pub mod trip_list;

pub use trip_list::{Trip, TripList};
