//! Activity suggestions keyed off the day's check-in.

use crate::model::Suggestion;

/// Coarse bucket for the average of mood and day rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Average of 4 or less.
    Low,
    Middle,
    /// Average of 8 or more.
    High,
}

impl Band {
    pub fn of(mood: u8, rating: u8) -> Self {
        // Compare sums to avoid rounding the average.
        let sum = u16::from(mood) + u16::from(rating);
        if sum <= 8 {
            Band::Low
        } else if sum >= 16 {
            Band::High
        } else {
            Band::Middle
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Band::Low => "Be gentle with yourself today. Here are a few small things that might help:",
            Band::Middle => "A steady day. Something here might lift it a little further:",
            Band::High => "You're doing great! Keep the momentum going:",
        }
    }
}

// title, description, icon, benefit
type Entry = (&'static str, &'static str, &'static str, &'static str);

const LOW: &[Entry] = &[
    (
        "Deep Breathing",
        "Five minutes of slow, deliberate breaths",
        "🌬",
        "Calms the nervous system",
    ),
    (
        "Short Walk",
        "A ten minute walk around the block",
        "🚶",
        "Movement lifts low energy",
    ),
    (
        "Call a Friend",
        "Reach out to someone you trust",
        "📞",
        "Connection eases isolation",
    ),
    (
        "Warm Drink",
        "Make a cup of tea and sit with it",
        "🍵",
        "A small moment of comfort",
    ),
];

const MIDDLE: &[Entry] = &[
    (
        "Yoga",
        "Fifteen minutes of gentle stretching",
        "🧘",
        "Releases physical tension",
    ),
    (
        "Read",
        "A chapter of a book you enjoy",
        "📖",
        "Gives the mind a rest",
    ),
    (
        "Tidy Up",
        "Clear one small space around you",
        "🧹",
        "A quick sense of accomplishment",
    ),
    (
        "Listen to Music",
        "Put on an album you love",
        "🎧",
        "Shifts your mood gently",
    ),
];

const HIGH: &[Entry] = &[
    (
        "Go for a Run",
        "Channel the energy into a run",
        "🏃",
        "Boosts endorphins further",
    ),
    (
        "Cook Something New",
        "Try a recipe you haven't made before",
        "🍳",
        "Creativity with a tasty reward",
    ),
    (
        "Gratitude List",
        "Write down three things that went well",
        "📝",
        "Anchors the good feeling",
    ),
    (
        "Help Someone",
        "Do a small kindness for someone else",
        "🤝",
        "Sharing good days multiplies them",
    ),
];

/// Suggestions for this check-in, in display order.
pub fn suggest(mood: u8, rating: u8) -> Vec<Suggestion> {
    let entries = match Band::of(mood, rating) {
        Band::Low => LOW,
        Band::Middle => MIDDLE,
        Band::High => HIGH,
    };
    entries
        .iter()
        .map(|(title, description, icon, benefit)| Suggestion {
            title: (*title).to_string(),
            description: (*description).to_string(),
            icon: (*icon).to_string(),
            benefit: (*benefit).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(Band::of(1, 1), Band::Low);
        assert_eq!(Band::of(4, 4), Band::Low);
        assert_eq!(Band::of(4, 5), Band::Middle);
        assert_eq!(Band::of(7, 8), Band::Middle);
        assert_eq!(Band::of(8, 8), Band::High);
        assert_eq!(Band::of(10, 10), Band::High);
    }

    #[test]
    fn suggestions_follow_the_band() {
        let low = suggest(2, 3);
        let high = suggest(9, 9);
        assert!(low.iter().any(|s| s.title == "Deep Breathing"));
        assert!(high.iter().any(|s| s.title == "Go for a Run"));
        assert!(low.iter().all(|l| high.iter().all(|h| h.title != l.title)));
    }

    #[test]
    fn catalog_titles_are_unique() {
        let mut titles: Vec<&str> = LOW
            .iter()
            .chain(MIDDLE)
            .chain(HIGH)
            .map(|(t, _, _, _)| *t)
            .collect();
        let total = titles.len();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), total);
    }
}
