pub mod use_fetch;

pub use use_fetch::{FetchHookReturn, use_fetch};

/// Whether a value has been fetched yet.
///
/// Distinguishes "never fetched" from "fetched" so consumers can tell an
/// empty result apart from one that has not arrived.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::NotFetched => None,
        }
    }
}
