//! Static copy for the home page sections.

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "10K+",
        label: "Active users",
    },
    Stat {
        value: "1M+",
        label: "Emails sent",
    },
    Stat {
        value: "98%",
        label: "Deliverability rate",
    },
    Stat {
        value: "24/7",
        label: "Support",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "✉️",
        title: "Drag-and-drop editor",
        description: "Build responsive emails block by block, no HTML required.",
    },
    Feature {
        icon: "🧩",
        title: "Reusable templates",
        description: "Start from a curated library or save your own designs for the next campaign.",
    },
    Feature {
        icon: "🎯",
        title: "Audience targeting",
        description: "Segment contacts by behaviour and send the right message to the right people.",
    },
    Feature {
        icon: "📈",
        title: "Campaign analytics",
        description: "Follow opens, clicks and conversions as they happen.",
    },
    Feature {
        icon: "⏰",
        title: "Scheduled sends",
        description: "Queue campaigns ahead of time and deliver them in each recipient's time zone.",
    },
    Feature {
        icon: "🔒",
        title: "Privacy built in",
        description: "Consent tracking and one-click unsubscribe on every email you send.",
    },
];
