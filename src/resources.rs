use serde::Serialize;

/// Compiled-in wellness resource catalog. Categories are one of
/// `mental`, `physical`, `nutrition`, `sleep`.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub tips: &'static [&'static str],
}

pub const CATALOG: &[Resource] = &[
    Resource {
        id: 1,
        title: "5 Minute Morning Meditation",
        category: "mental",
        description: "Start your day with a simple breathing exercise to reduce stress and improve focus.",
        content: "Sit comfortably and focus on your breath for 5 minutes. Inhale for 4 counts, hold for 4, exhale for 6.",
        tips: &[
            "Find a quiet space",
            "Use guided meditation apps",
            "Be consistent daily",
        ],
    },
    Resource {
        id: 2,
        title: "Hydration for Better Health",
        category: "physical",
        description: "Learn why proper hydration is crucial for your physical and mental wellbeing.",
        content: "Aim for 8 glasses of water daily. Start with a glass upon waking and keep a water bottle nearby.",
        tips: &[
            "Add lemon for flavor",
            "Set hourly reminders",
            "Monitor urine color",
        ],
    },
    Resource {
        id: 3,
        title: "Balanced Meal Planning",
        category: "nutrition",
        description: "Create nutritious meals that fuel your body and support your wellness goals.",
        content: "Include protein, healthy fats, complex carbs, and vegetables in every meal. Plan ahead for success.",
        tips: &[
            "Prep meals on Sundays",
            "Use the plate method",
            "Include colorful vegetables",
        ],
    },
    Resource {
        id: 4,
        title: "Better Sleep Hygiene",
        category: "sleep",
        description: "Improve your sleep quality with simple evening routine changes.",
        content: "Create a bedtime routine: dim lights, avoid screens, keep room cool, and go to bed consistently.",
        tips: &[
            "No screens 1 hour before bed",
            "Keep bedroom between 60-67F",
            "Try reading instead of TV",
        ],
    },
    Resource {
        id: 5,
        title: "Stress Management Techniques",
        category: "mental",
        description: "Simple strategies to manage daily stress and build resilience.",
        content: "Practice deep breathing, take short walks, write in a journal, and talk to friends when feeling overwhelmed.",
        tips: &[
            "Try the 4-7-8 breathing technique",
            "Take 10-minute nature walks",
            "Keep a gratitude journal",
        ],
    },
    Resource {
        id: 6,
        title: "Quick Desk Exercises",
        category: "physical",
        description: "Simple exercises you can do at your desk to stay active throughout the day.",
        content: "Shoulder rolls, neck stretches, seated spinal twists, and calf raises can be done anywhere.",
        tips: &[
            "Set hourly movement reminders",
            "Stand during phone calls",
            "Use stairs when possible",
        ],
    },
    Resource {
        id: 7,
        title: "Mindful Eating Practices",
        category: "nutrition",
        description: "Develop a healthier relationship with food through mindful eating techniques.",
        content: "Eat slowly, chew thoroughly, put devices away, and pay attention to hunger and fullness cues.",
        tips: &[
            "Eat without distractions",
            "Use smaller plates",
            "Listen to your body's signals",
        ],
    },
    Resource {
        id: 8,
        title: "Digital Wellness",
        category: "mental",
        description: "Create healthy boundaries with technology for better mental health.",
        content: "Set specific times for checking emails and social media. Create device-free zones in your home.",
        tips: &[
            "Turn off notifications",
            "Use app timers",
            "Charge phone outside bedroom",
        ],
    },
];

/// All resources, or only the requested category. An unknown category is an
/// empty list, not an error.
pub fn filtered(category: Option<&str>) -> Vec<Resource> {
    match category {
        None => CATALOG.to_vec(),
        Some(category) => CATALOG
            .iter()
            .filter(|resource| resource.category == category)
            .cloned()
            .collect(),
    }
}
