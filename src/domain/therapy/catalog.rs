//! Starter programs used when therapies are not managed externally.

use super::{Difficulty, Therapy, TherapySettings, TherapyStatus};
use crate::domain::foundation::TherapyId;

struct Program {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    sessions: u32,
    difficulty: Difficulty,
    category: &'static str,
    icon: &'static str,
    color: &'static str,
    tags: &'static [&'static str],
}

const PROGRAMS: [Program; 6] = [
    Program {
        id: "cbt",
        title: "Cognitive Behavioral Therapy",
        description: "Catch, question and reframe unhelpful thoughts",
        duration: "20-30 min",
        sessions: 8,
        difficulty: Difficulty::Intermediate,
        category: "Cognitive",
        icon: "Brain",
        color: "from-blue-500 to-cyan-500",
        tags: &["anxiety", "depression", "thought records"],
    },
    Program {
        id: "mindfulness",
        title: "Mindfulness Meditation",
        description: "Guided breathing and body scans for present-moment focus",
        duration: "10-15 min",
        sessions: 10,
        difficulty: Difficulty::Beginner,
        category: "Mindfulness",
        icon: "Leaf",
        color: "from-green-500 to-emerald-500",
        tags: &["meditation", "breathing"],
    },
    Program {
        id: "gratitude-journal",
        title: "Gratitude Journal",
        description: "Write down three things you are thankful for each day",
        duration: "5-10 min",
        sessions: 7,
        difficulty: Difficulty::Beginner,
        category: "Positive Psychology",
        icon: "Heart",
        color: "from-pink-500 to-rose-500",
        tags: &["journaling", "mood"],
    },
    Program {
        id: "exposure-therapy",
        title: "Exposure Therapy",
        description: "Face feared situations step by step with a graded ladder",
        duration: "30-45 min",
        sessions: 12,
        difficulty: Difficulty::Advanced,
        category: "Behavioral",
        icon: "Mountain",
        color: "from-orange-500 to-amber-500",
        tags: &["phobia", "anxiety", "exposure ladder"],
    },
    Program {
        id: "stress-management",
        title: "Stress Management",
        description: "Try relaxation techniques and rate how well each one works",
        duration: "15-20 min",
        sessions: 6,
        difficulty: Difficulty::Beginner,
        category: "Wellness",
        icon: "Shield",
        color: "from-purple-500 to-indigo-500",
        tags: &["stress", "relaxation"],
    },
    Program {
        id: "video-therapy",
        title: "Video Therapy Sessions",
        description: "Short expert-led videos on coping skills",
        duration: "10-20 min",
        sessions: 5,
        difficulty: Difficulty::Beginner,
        category: "Psychoeducation",
        icon: "Video",
        color: "from-sky-500 to-blue-600",
        tags: &["video", "coping skills"],
    },
];

/// The programs a fresh in-memory deployment starts with.
pub fn default_therapies() -> Vec<Therapy> {
    PROGRAMS
        .iter()
        .filter_map(|program| {
            let id = TherapyId::new(program.id).ok()?;
            Some(Therapy::new(
                id,
                TherapySettings {
                    title: program.title.to_string(),
                    description: program.description.to_string(),
                    duration: program.duration.to_string(),
                    sessions: program.sessions,
                    difficulty: program.difficulty,
                    category: program.category.to_string(),
                    icon: program.icon.to_string(),
                    color: program.color.to_string(),
                    tags: program.tags.iter().map(|tag| tag.to_string()).collect(),
                    status: TherapyStatus::Active,
                },
            ))
        })
        .collect()
}
