//! Fixed keyword tables used by the field extractors and the classifier.
//!
//! Every cascade is an ordered slice evaluated top-down: the first entry with a
//! matching keyword wins, so the order of the entries is part of the rules.

/// Canonical technology name and the lowercase aliases that imply it.
pub const TECHNOLOGY_ALIASES: &[(&str, &[&str])] = &[
    ("Python", &["python"]),
    ("JavaScript", &["javascript", "js"]),
    ("React", &["react", "reactjs"]),
    ("Node.js", &["node.js", "nodejs"]),
    ("Java", &["java"]),
    ("C++", &["c++"]),
    ("Docker", &["docker"]),
    ("AWS", &["aws"]),
    ("Machine Learning", &["machine learning", "ml", "tensorflow", "pytorch"]),
    ("Data Science", &["data science", "pandas", "numpy"]),
    ("SQL", &["sql", "mysql", "postgresql"]),
    ("Git", &["git", "github"]),
    ("Linux", &["linux", "unix"]),
    ("REST API", &["rest api", "restful"]),
    ("MongoDB", &["mongodb"]),
    ("DevOps", &["devops", "ci/cd"]),
    ("Kubernetes", &["kubernetes", "k8s"]),
];

/// Phrase buckets for explicit experience statements, checked in order.
pub const EXPERIENCE_BUCKETS: &[(&[&str], u32)] = &[
    (&["10+ years", "10 years"], 12),
    (&["5-10 years", "5+ years"], 7),
    (&["3-5 years"], 4),
    (&["1-3 years", "2 years"], 2),
    (&["fresher", "0 years"], 0),
];

pub const ACHIEVEMENT_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "designed",
    "built",
    "created",
    "led",
    "managed",
];

/// Achievement lines must be longer than this many characters.
pub const ACHIEVEMENT_MIN_LINE_CHARS: usize = 20;
pub const MAX_ACHIEVEMENTS: usize = 3;

pub const EDUCATION_LEVELS: &[(&[&str], &str)] = &[
    (&["b.tech", "bachelor"], "B.Tech"),
    (&["b.e"], "B.E"),
    (&["m.tech", "master"], "M.Tech"),
];

pub const DEFAULT_EDUCATION: &str = "Not specified";

pub const SPECIALIZATIONS: &[(&[&str], &str)] = &[
    (&["machine learning", "ai", "pytorch"], "ML/AI Engineer"),
    (&["react", "frontend", "vue"], "Frontend Engineer"),
    (&["backend", "node", "java"], "Backend Engineer"),
    (&["devops", "docker", "kubernetes"], "DevOps Engineer"),
    (&["data"], "Data Engineer"),
];

pub const DEFAULT_SPECIALIZATION: &str = "General Developer";

pub const SENIORITY_KEYWORDS: &[&str] = &["senior", "lead"];
pub const MID_LEVEL_KEYWORDS: &[&str] = &["mid"];

pub const PROJECT_INDICATORS: &[&str] = &["project", "github", "portfolio", "hackathon"];

pub const DSA_INDICATORS: &[&str] = &["data structures", "algorithms", "leetcode", "codeforces", "dsa"];

/// First entry of an ordered cascade whose keywords appear in `text`.
pub fn first_match<T: Copy>(text: &str, cascade: &[(&[&str], T)]) -> Option<T> {
    cascade
        .iter()
        .find(|(keywords, _)| contains_any(text, keywords))
        .map(|(_, result)| *result)
}

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
