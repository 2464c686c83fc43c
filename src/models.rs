use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Excited,
    Happy,
    Okay,
    Sad,
    Stressed,
}

impl MoodKind {
    /// Anything unrecognized falls back to `Okay`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "excited" => Self::Excited,
            "happy" => Self::Happy,
            "sad" => Self::Sad,
            "stressed" => Self::Stressed,
            _ => Self::Okay,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Excited => "excited",
            Self::Happy => "happy",
            Self::Okay => "okay",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excited => "Excited",
            Self::Happy => "Happy",
            Self::Okay => "Okay",
            Self::Sad => "Sad",
            Self::Stressed => "Stressed",
        }
    }

    pub fn score(self) -> u8 {
        match self {
            Self::Excited => 100,
            Self::Happy => 80,
            Self::Okay => 60,
            Self::Sad => 40,
            Self::Stressed => 30,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Excited => "\u{1F929}",
            Self::Happy => "\u{1F60A}",
            Self::Okay => "\u{1F610}",
            Self::Sad => "\u{1F622}",
            Self::Stressed => "\u{1F624}",
        }
    }
}

/// One mood entry per calendar day; `date` is the `YYYY-MM-DD` map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    pub mood: MoodKind,
    pub notes: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub created_date: String,
    pub completed_dates: BTreeSet<String>,
}

impl Habit {
    pub fn completed_on(&self, day_key: &str) -> bool {
        self.completed_dates.contains(day_key)
    }

    /// Whether the habit existed on the given day (created on or before it).
    /// ISO day keys compare lexicographically in date order.
    pub fn exists_on(&self, day_key: &str) -> bool {
        self.created_date.as_str() <= day_key
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub moods: BTreeMap<String, MoodEntry>,
    pub habits: Vec<Habit>,
    pub next_habit_id: u64,
}

impl AppData {
    pub fn allocate_habit_id(&mut self) -> u64 {
        self.next_habit_id += 1;
        self.next_habit_id
    }
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodView {
    pub date: String,
    pub mood: String,
    pub label: String,
    pub emoji: String,
    pub score: u8,
    pub notes: String,
    pub timestamp: i64,
}

impl From<&MoodEntry> for MoodView {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            date: entry.date.clone(),
            mood: entry.mood.name().to_string(),
            label: entry.mood.label().to_string(),
            emoji: entry.mood.emoji().to_string(),
            score: entry.mood.score(),
            notes: entry.notes.clone(),
            timestamp: entry.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveMoodResponse {
    pub entry: MoodView,
    pub updated: bool,
    pub weekly_score: u8,
}

#[derive(Debug, Serialize)]
pub struct HabitView {
    pub id: u64,
    pub name: String,
    pub created_date: String,
    pub completed_today: bool,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct HabitStats {
    pub total_habits: usize,
    pub completed_today: usize,
    pub completion_rate: u8,
}

#[derive(Debug, Serialize)]
pub struct HabitsResponse {
    pub habits: Vec<HabitView>,
    pub stats: HabitStats,
}

#[derive(Debug, Serialize)]
pub struct MoodPoint {
    pub date: String,
    pub score: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct HabitPoint {
    pub date: String,
    pub completion: u8,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub weekly_score: u8,
    pub mood_series: Vec<MoodPoint>,
    pub habit_series: Vec<HabitPoint>,
    pub stats: HabitStats,
}
