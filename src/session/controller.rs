//! Session controller.
//!
//! Explicit state machine over [`Screen`]. Every transition goes through
//! [`Session::dispatch`], which re-checks the target screen's guard on each
//! attempt.

use super::favorites::Favorites;
use crate::model::{in_scale, Activity, Outcome, Screen, SessionEvent, Suggestion};
use crate::storage::{KeyValueStore, StorageError, FAVORITES_KEY, TUTORIAL_SEEN_KEY};

pub(crate) struct Session<S: KeyValueStore> {
    store: S,
    screen: Screen,
    mood: Option<u8>,
    rating: Option<u8>,
    journal_entry: String,
    selected_activity: Option<Activity>,
    favorites: Favorites,
    tutorial_seen: bool,
    tutorial_visible: bool,
    menu_open: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session on the mood tracker, loading the persisted slices.
    pub fn load(store: S) -> Self {
        let tutorial_seen = match store.get(TUTORIAL_SEEN_KEY) {
            Ok(v) => v.is_some_and(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read tutorial flag");
                false
            }
        };
        let stored_favorites = store.get(FAVORITES_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read favorites");
            None
        });
        let favorites = Favorites::load(stored_favorites.as_deref());

        tracing::info!(
            tutorial_seen,
            favorites = favorites.len(),
            "session loaded"
        );

        Self {
            store,
            screen: Screen::MoodTracker,
            mood: None,
            rating: None,
            journal_entry: String::new(),
            selected_activity: None,
            favorites,
            tutorial_seen,
            tutorial_visible: !tutorial_seen,
            menu_open: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mood(&self) -> Option<u8> {
        self.mood
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn journal_entry(&self) -> &str {
        &self.journal_entry
    }

    pub fn selected_activity(&self) -> Option<&Activity> {
        self.selected_activity.as_ref()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.contains(title)
    }

    pub fn tutorial_visible(&self) -> bool {
        self.tutorial_visible
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Both check-in values are set, so "Record My Day" is enabled.
    pub fn can_record_day(&self) -> bool {
        self.mood.is_some() && self.rating.is_some()
    }

    /// Apply one event.
    ///
    /// State changes happen before any write-through, so an `Err` means the
    /// in-memory session moved on but storage did not follow.
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<Outcome, StorageError> {
        use SessionEvent as E;

        let outcome = match (self.screen, event) {
            (Screen::MoodTracker, E::SetMood(v)) => {
                if v.is_some_and(|v| !in_scale(v)) {
                    return Ok(Outcome::Blocked);
                }
                self.mood = v;
                Outcome::Updated
            }
            (Screen::MoodTracker, E::SetRating(v)) => {
                if v.is_some_and(|v| !in_scale(v)) {
                    return Ok(Outcome::Blocked);
                }
                self.rating = v;
                Outcome::Updated
            }
            (Screen::MoodTracker, E::RecordDay) => self.go(Screen::Journal),
            (Screen::MoodTracker, E::Reset) => {
                self.mood = None;
                self.rating = None;
                Outcome::Updated
            }

            (Screen::Journal, E::Back) => self.go(Screen::MoodTracker),
            (Screen::Journal, E::CompleteJournal(entry)) => {
                if !self.allows(Screen::Activities) {
                    return Ok(Outcome::Blocked);
                }
                self.journal_entry = entry;
                self.go(Screen::Activities)
            }
            (Screen::Journal, E::SkipToAnalytics) => self.go(Screen::Analytics),

            (Screen::Activities, E::Back) => self.go(Screen::Journal),
            (Screen::Activities, E::Skip) => self.go(Screen::Analytics),
            (Screen::Activities, E::ChooseActivity(activity)) => {
                self.selected_activity = Some(activity);
                self.go(Screen::Photo)
            }

            (Screen::Photo, E::CompletePhoto) => {
                if self.selected_activity.is_none() {
                    return Ok(Outcome::Blocked);
                }
                self.go(Screen::Analytics)
            }

            (_, E::BackToHome) => {
                self.mood = None;
                self.rating = None;
                self.journal_entry.clear();
                self.selected_activity = None;
                self.go(Screen::MoodTracker)
            }
            (_, E::View(target)) if target.is_side_branch() => {
                self.menu_open = false;
                self.go(target)
            }

            (_, E::OpenMenu) => {
                self.menu_open = true;
                Outcome::Updated
            }
            (_, E::CloseMenu) => {
                self.menu_open = false;
                Outcome::Updated
            }
            (_, E::ToggleMenu) => {
                self.menu_open = !self.menu_open;
                Outcome::Updated
            }
            (_, E::OpenTutorial) => {
                self.menu_open = false;
                self.tutorial_visible = true;
                Outcome::Updated
            }
            (_, E::CloseTutorial) => return self.close_tutorial(),

            (_, E::ToggleFavorite(activity)) => return self.toggle_favorite(activity),
            (_, E::RemoveFavorite(title)) => return self.remove_favorite(&title),

            (screen, ev) => {
                tracing::debug!(?screen, event = ?ev, "event not accepted on this screen");
                Outcome::Blocked
            }
        };

        Ok(outcome)
    }

    /// Guard for entering `target`.
    fn allows(&self, target: Screen) -> bool {
        match target {
            Screen::Journal | Screen::Activities => self.can_record_day(),
            Screen::Photo => self.selected_activity.is_some(),
            _ => true,
        }
    }

    fn go(&mut self, target: Screen) -> Outcome {
        if !self.allows(target) {
            tracing::debug!(from = ?self.screen, to = ?target, "transition blocked by guard");
            return Outcome::Blocked;
        }
        let from = self.screen;
        if from == target {
            return Outcome::Updated;
        }
        self.screen = target;
        tracing::debug!(?from, to = ?target, "screen changed");
        Outcome::Moved { from, to: target }
    }

    fn close_tutorial(&mut self) -> Result<Outcome, StorageError> {
        self.tutorial_visible = false;
        if !self.tutorial_seen {
            self.store.set(TUTORIAL_SEEN_KEY, "true")?;
            self.tutorial_seen = true;
            tracing::info!("tutorial marked as seen");
        }
        Ok(Outcome::Updated)
    }

    fn toggle_favorite(&mut self, activity: Suggestion) -> Result<Outcome, StorageError> {
        let title = activity.title.clone();
        let now_favorite = self.favorites.toggle(activity);
        tracing::info!(%title, now_favorite, "toggled favorite");
        self.persist_favorites()?;
        Ok(Outcome::Updated)
    }

    fn remove_favorite(&mut self, title: &str) -> Result<Outcome, StorageError> {
        if !self.favorites.remove(title) {
            return Ok(Outcome::Blocked);
        }
        tracing::info!(%title, "removed favorite");
        self.persist_favorites()?;
        Ok(Outcome::Updated)
    }

    fn persist_favorites(&mut self) -> Result<(), StorageError> {
        let body = self.favorites.to_json()?;
        self.store.set(FAVORITES_KEY, &body)
    }
}
