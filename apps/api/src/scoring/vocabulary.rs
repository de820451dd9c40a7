//! Static reference vocabularies used by the scoring engine.

/// Action verbs matched as whole tokens.
pub const ACTION_VERBS: &[&str] = &[
    "managed",
    "developed",
    "created",
    "implemented",
    "led",
    "increased",
    "decreased",
    "improved",
    "achieved",
    "coordinated",
    "launched",
    "delivered",
    "generated",
    "reduced",
    "negotiated",
    "resolved",
    "streamlined",
    "optimized",
];

/// Technical skills matched as case-insensitive substrings.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "AWS",
    "Docker",
    "Kubernetes",
    "SQL",
    "MongoDB",
    "TypeScript",
    "Git",
    "CI/CD",
    "Azure",
];

/// Soft skills matched as case-insensitive substrings.
pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "problem-solving",
    "teamwork",
    "collaboration",
    "analytical",
    "project management",
    "time management",
    "adaptability",
];

/// Keywords commonly expected in technology résumés, reported when absent.
pub const COMMON_INDUSTRY_KEYWORDS: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "cloud computing",
    "agile methodology",
];

pub const INDUSTRY: &str = "Technology";
