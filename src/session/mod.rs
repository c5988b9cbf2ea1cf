//! Session state and navigation.
//!
//! This module owns every piece of cross-screen state: the active screen, the
//! check-in values, the journal entry, the chosen activity, favorites and the
//! tutorial flag. Presentation layers send [`SessionEvent`]s in and read state
//! back out; they never mutate it directly.
//!
//! [`SessionEvent`]: crate::model::SessionEvent

mod controller;
mod favorites;

pub(crate) use controller::Session;
pub(crate) use favorites::Favorites;
