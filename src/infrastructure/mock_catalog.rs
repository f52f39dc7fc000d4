//! Built-in sample data.

use crate::domain::entities::{Conversation, Message, Profile, Sender, SkillOffer};
use crate::domain::ports::CatalogPort;

/// In-memory catalog with fixed sample records.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

impl MockCatalog {
    /// Creates new catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CatalogPort for MockCatalog {
    fn default_profile(&self) -> Profile {
        Profile::new(
            "Muhammad Raheel Nawaz",
            "Passionate developer and musician with interest in various creative and \
             technical skills. Love to learn and share knowledge with others.",
            [
                "React Native",
                "Guitar",
                "Photography",
                "Python",
                "UI/UX Design",
                "Cooking",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            "January 2024",
        )
    }

    fn skill_offers(&self) -> Vec<SkillOffer> {
        vec![
            SkillOffer::new(
                "1",
                "Alex Johnson",
                "2 hours ago",
                "Programming",
                "Python Tutoring for Beginners",
                "I offer Python tutoring sessions for complete beginners. We'll cover basic \
                 syntax, data structures, and simple projects. Available weekends and evenings.",
            ),
            SkillOffer::new(
                "2",
                "Maria Garcia",
                "1 day ago",
                "Music",
                "Guitar Lessons - All Levels",
                "Professional guitarist with 10+ years experience offering lessons for all \
                 skill levels. Learn chords, scales, and your favorite songs. Flexible scheduling.",
            ),
            SkillOffer::new(
                "3",
                "David Kim",
                "3 days ago",
                "Art",
                "Drawing Basics Workshop",
                "Learn the fundamentals of drawing including perspective, shading, and \
                 composition. No prior experience needed. Materials provided for first session.",
            ),
            SkillOffer::new(
                "4",
                "Sarah Chen",
                "4 days ago",
                "Fitness",
                "Yoga & Mindfulness Sessions",
                "Certified yoga instructor offering personalized sessions focused on \
                 flexibility, strength, and mindfulness. Suitable for all levels including \
                 complete beginners.",
            ),
            SkillOffer::new(
                "5",
                "James Wilson",
                "5 days ago",
                "Language",
                "Spanish Conversation Practice",
                "Native Spanish speaker offering conversation practice sessions. We can focus \
                 on specific topics or general conversation to improve fluency and confidence.",
            ),
        ]
    }

    fn conversations(&self) -> Vec<Conversation> {
        vec![
            Conversation::new(
                "c1",
                "Alex Johnson",
                "Photography editing sounds perfect! I need a few headshots.",
                "2h ago",
                1,
            ),
            Conversation::new(
                "c2",
                "Maria Garcia",
                "Great, let's meet next Tuesday for the guitar lesson.",
                "5h ago",
                0,
            ),
            Conversation::new(
                "c3",
                "David Kim",
                "I found a good resource for shading techniques, check it out!",
                "1d ago",
                0,
            ),
            Conversation::new(
                "c4",
                "Sarah Chen",
                "Thanks for the mindfulness tips, they really helped!",
                "2d ago",
                0,
            ),
        ]
    }

    fn chat_history(&self) -> Vec<Message> {
        vec![
            Message::new(
                "m1",
                "Hi! I saw your post about Python tutoring. I'm definitely interested!",
                Sender::User,
            ),
            Message::new(
                "m2",
                "That's great! What specific Python topics are you looking to cover first?",
                Sender::Other,
            ),
            Message::new(
                "m3",
                "Mostly beginner syntax and data structures. I can offer some help with \
                 photography editing in return!",
                Sender::User,
            ),
            Message::new(
                "m4",
                "Photography editing sounds perfect! I need a few headshots. When works for \
                 you to meet?",
                Sender::Other,
            ),
        ]
    }
}
