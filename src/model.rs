use serde::{Deserialize, Serialize};

/// Lowest value accepted for a mood or a day rating.
pub const SCALE_MIN: u8 = 1;
/// Highest value accepted for a mood or a day rating.
pub const SCALE_MAX: u8 = 10;

/// Top-level view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    MoodTracker,
    Journal,
    Activities,
    Photo,
    Analytics,
    Memories,
    Favorites,
    Faq,
}

impl Screen {
    /// Screens reachable from anywhere through the navigation menu.
    pub const SIDE_BRANCHES: [Screen; 4] = [
        Screen::Analytics,
        Screen::Memories,
        Screen::Favorites,
        Screen::Faq,
    ];

    pub fn is_side_branch(self) -> bool {
        Self::SIDE_BRANCHES.contains(&self)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::MoodTracker => "How are you feeling today?",
            Screen::Journal => "Journal",
            Screen::Activities => "Suggested Activities",
            Screen::Photo => "Activity Photo",
            Screen::Analytics => "Analytics",
            Screen::Memories => "Memories",
            Screen::Favorites => "Saved Favourites",
            Screen::Faq => "FAQ",
        }
    }
}

/// The activity the user picked on the suggestions screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// An activity as offered by the suggestion catalog.
///
/// This is also the record kept in the favorites list, keyed by `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub benefit: String,
}

impl Suggestion {
    pub fn activity(&self) -> Activity {
        Activity {
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// Events accepted by the session controller.
///
/// Which events are meaningful depends on the current [`Screen`]; the rest are
/// reported back as blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SetMood(Option<u8>),
    SetRating(Option<u8>),
    RecordDay,
    Reset,
    Back,
    CompleteJournal(String),
    SkipToAnalytics,
    Skip,
    ChooseActivity(Activity),
    CompletePhoto,
    BackToHome,
    View(Screen),
    OpenMenu,
    CloseMenu,
    ToggleMenu,
    OpenTutorial,
    CloseTutorial,
    ToggleFavorite(Suggestion),
    RemoveFavorite(String),
}

/// What a dispatched event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The active screen changed.
    Moved { from: Screen, to: Screen },
    /// State changed but the screen stayed put.
    Updated,
    /// Guard failed or the event does not apply here; nothing changed.
    Blocked,
}

impl Outcome {
    #[cfg(test)]
    pub fn is_blocked(self) -> bool {
        matches!(self, Outcome::Blocked)
    }
}

pub fn in_scale(value: u8) -> bool {
    (SCALE_MIN..=SCALE_MAX).contains(&value)
}
