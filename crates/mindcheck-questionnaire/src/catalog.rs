use mindcheck_core::models::prediction::PredictionResult;

/// Advice attached to one disorder label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub description: &'static str,
    pub suggestions: &'static [&'static str],
    pub video: &'static str,
}

/// Returned for any label the catalog does not know.
pub const FALLBACK: CatalogEntry = CatalogEntry {
    description: "No clear match found.",
    suggestions: &[],
    video: "",
};

/// Keyed exactly as the label decoder emits them.
const ENTRIES: &[(&str, CatalogEntry)] = &[
    (
        "Major Depressive Disorder (MDD)",
        CatalogEntry {
            description: "You may be showing signs of depression such as low mood and loss of interest.",
            suggestions: &["Try journaling", "Do light exercise", "Follow a daily routine"],
            video: "https://www.youtube.com/watch?v=inpok4MKVLM",
        },
    ),
    (
        "Autism Spectrum Disorder (ASD)",
        CatalogEntry {
            description: "You may have challenges in social communication or interaction patterns.",
            suggestions: &[
                "Follow structured activities",
                "Reduce screen time",
                "Use positive reinforcement",
            ],
            video: "https://youtu.be/4Talws29mys?si=Ec6dniPHrLkXwwkK",
        },
    ),
    (
        "Loneliness",
        CatalogEntry {
            description: "You may be experiencing loneliness or social disconnection.",
            suggestions: &["Reach out to old friends", "Join a community", "Volunteer regularly"],
            video: "https://youtu.be/GckT5n9Ik1s",
        },
    ),
    (
        "Bipolar",
        CatalogEntry {
            description: "You may experience mood swings between high energy and sadness.",
            suggestions: &["Keep a sleep routine", "Track your moods", "Avoid stress triggers"],
            video: "https://www.youtube.com/watch?v=inpok4MKVLM",
        },
    ),
    (
        "Anxiety",
        CatalogEntry {
            description: "You may be showing symptoms of anxiety such as restlessness or overthinking.",
            suggestions: &["Try deep breathing", "Practice mindfulness", "Limit caffeine intake"],
            video: "https://youtu.be/SNqYG95j_UQ",
        },
    ),
    (
        "Post-Traumatic Stress Disorder (PTSD)",
        CatalogEntry {
            description: "You may experience flashbacks, nightmares, or anxiety from past trauma.",
            suggestions: &["Try grounding techniques", "Seek therapy", "Practice mindfulness"],
            video: "https://youtu.be/LiUnFJ8P4gM?si=1p_ivB984-f8CWAF",
        },
    ),
    (
        "Sleeping Disorder",
        CatalogEntry {
            description: "You may have difficulty sleeping or maintaining sleep quality.",
            suggestions: &[
                "Keep consistent sleep hours",
                "Avoid screens before bed",
                "Create a calm bedtime routine",
            ],
            video: "https://youtu.be/ywTaRqSbQpw",
        },
    ),
    (
        "Psychotic Depression",
        CatalogEntry {
            description: "You may experience depressive thoughts with delusional ideas.",
            suggestions: &[
                "Seek professional therapy",
                "Follow a stable routine",
                "Reduce stress exposure",
            ],
            video: "https://youtu.be/LiUnFJ8P4gM",
        },
    ),
    (
        "Eating Disorder",
        CatalogEntry {
            description: "You may have an unhealthy relationship with food or body image.",
            suggestions: &["Eat balanced meals", "Avoid comparison", "Talk to a counselor"],
            video: "https://youtu.be/LiUnFJ8P4gM?si=1p_ivB984-f8CWAF",
        },
    ),
    (
        "Attention-Deficit/Hyperactivity Disorder (ADHD)",
        CatalogEntry {
            description: "You may have trouble focusing or staying still for long periods.",
            suggestions: &["Break tasks into parts", "Take short breaks", "Use focus exercises"],
            video: "https://youtu.be/rTIv5X8Bo1w",
        },
    ),
    (
        "Persistent Depressive Disorder (PDD)",
        CatalogEntry {
            description: "You may experience long-term mild depression with low energy or motivation.",
            suggestions: &["Follow a daily plan", "Set small goals", "Engage in enjoyable activities"],
            video: "https://youtu.be/sFtP0HWvu0k?si=ejxXUWJJPgLXc0QU",
        },
    ),
    (
        "Obsessive-Compulsive Disorder (OCD)",
        CatalogEntry {
            description: "You may experience repetitive thoughts or actions you feel forced to do.",
            suggestions: &[
                "Practice CBT techniques",
                "Avoid seeking reassurance",
                "Stick to a routine",
            ],
            video: "https://youtu.be/SNqYG95j_UQ?si=NH_kSHp3Mbf7ZYeS",
        },
    ),
];

/// Look up the advice for a label. Never fails: unknown labels get
/// [`FALLBACK`].
pub fn lookup(label: &str) -> CatalogEntry {
    ENTRIES
        .iter()
        .find(|(key, _)| *key == label)
        .map_or(FALLBACK, |(_, entry)| *entry)
}

/// Every label the catalog has an entry for.
pub fn labels() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(key, _)| *key)
}

/// Combine a predicted label with its catalog entry.
pub fn predict_result(label: &str) -> PredictionResult {
    let entry = lookup(label);
    PredictionResult {
        predicted_disorder: label.to_string(),
        description: entry.description.to_string(),
        suggestions: entry.suggestions.iter().map(|s| s.to_string()).collect(),
        video: entry.video.to_string(),
    }
}
