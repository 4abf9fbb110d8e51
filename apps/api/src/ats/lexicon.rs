//! Lexicons and compiled patterns shared by every scorer.
//!
//! Everything here is read-only process-wide data. Regexes compile on first
//! use and are never mutated afterwards.

use std::sync::LazyLock;

use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Keyword lexicons
// ────────────────────────────────────────────────────────────────────────────

pub const TECH_KEYWORDS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "mongodb",
    "sql",
    "postgresql",
    "mysql",
    "redis",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "github",
    "gitlab",
    "html",
    "css",
    "sass",
    "tailwind",
    "bootstrap",
    "rest",
    "api",
    "graphql",
    "agile",
    "scrum",
    "jira",
    "ci/cd",
    "jenkins",
    "terraform",
    "linux",
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "data structures",
    "algorithms",
    "oop",
    "design patterns",
    "microservices",
    "spring",
    "django",
    "flask",
    "fastapi",
    ".net",
    "rust",
    "go",
    "kotlin",
    "swift",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "developed",
    "implemented",
    "designed",
    "led",
    "managed",
    "created",
    "built",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "delivered",
    "launched",
    "collaborated",
    "coordinated",
    "analyzed",
    "architected",
    "automated",
    "configured",
    "deployed",
    "engineered",
    "established",
    "executed",
    "facilitated",
    "generated",
    "integrated",
    "maintained",
    "mentored",
    "migrated",
    "modernized",
    "orchestrated",
    "pioneered",
    "refactored",
    "resolved",
    "scaled",
    "streamlined",
    "transformed",
    "spearheaded",
    "initiated",
    "innovated",
    "enhanced",
    "accelerated",
];

/// Outcome verbs. Every entry is also an [`ACTION_VERBS`] entry.
pub const ACHIEVEMENT_VERBS: &[&str] = &[
    "achieved",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "delivered",
    "launched",
    "generated",
    "scaled",
    "streamlined",
    "transformed",
    "accelerated",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem-solving",
    "analytical",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
    "collaboration",
    "attention to detail",
    "organization",
    "multitasking",
    "decision making",
];

/// Tokens that show a skills list is grouped by category.
pub const SKILL_CATEGORY_TOKENS: &[&str] = &[
    "programming",
    "languages",
    "frameworks",
    "libraries",
    "databases",
    "tools",
    "platforms",
    "cloud",
    "technologies",
];

// ────────────────────────────────────────────────────────────────────────────
// Section header synonyms (matched by plain substring)
// ────────────────────────────────────────────────────────────────────────────

pub const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "employment",
    "work history",
    "professional experience",
];

pub const EDUCATION_HEADERS: &[&str] = &["education", "academic", "qualifications", "degrees"];

pub const SKILLS_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "technologies",
    "competencies",
    "expertise",
];

pub const PROJECTS_HEADERS: &[&str] = &[
    "projects",
    "personal projects",
    "academic projects",
    "portfolio",
];

pub const CERTIFICATION_HEADERS: &[&str] = &[
    "certifications",
    "certificates",
    "certified",
    "licenses",
    "credentials",
];

pub const SUMMARY_HEADERS: &[&str] = &[
    "summary",
    "objective",
    "profile",
    "about me",
    "professional summary",
];

// ────────────────────────────────────────────────────────────────────────────
// Role bucket lexicons
// ────────────────────────────────────────────────────────────────────────────

pub const FRONTEND_FIT: &[&str] = &["react", "vue", "angular", "css", "javascript"];
pub const BACKEND_FIT: &[&str] = &["api", "database", "server", "node", "python", "java"];
pub const FULLSTACK_FIT: &[&str] = &["frontend", "backend", "api", "database", "react"];
pub const DATA_FIT: &[&str] = &[
    "python",
    "sql",
    "analytics",
    "machine learning",
    "pandas",
    "statistics",
];
pub const DEVOPS_FIT: &[&str] = &["docker", "kubernetes", "aws", "ci/cd", "terraform"];

pub const FRONTEND_EXPECTED: &[&str] = &[
    "React",
    "TypeScript",
    "JavaScript",
    "CSS",
    "HTML",
    "Redux",
    "Webpack",
    "Next.js",
    "Accessibility",
    "Responsive Design",
    "Testing",
    "Git",
];
pub const BACKEND_EXPECTED: &[&str] = &[
    "Node.js",
    "Python",
    "Java",
    "SQL",
    "REST",
    "API",
    "Docker",
    "MongoDB",
    "PostgreSQL",
    "Redis",
    "AWS",
    "Git",
];
pub const FULLSTACK_EXPECTED: &[&str] = &[
    "React",
    "Node.js",
    "TypeScript",
    "SQL",
    "MongoDB",
    "API",
    "REST",
    "Docker",
    "Git",
    "AWS",
    "Testing",
];
pub const DATA_EXPECTED: &[&str] = &[
    "Python",
    "SQL",
    "Pandas",
    "NumPy",
    "Machine Learning",
    "TensorFlow",
    "Statistics",
    "Visualization",
    "Tableau",
    "Excel",
    "Spark",
];
pub const DEVOPS_EXPECTED: &[&str] = &[
    "Docker",
    "Kubernetes",
    "AWS",
    "CI/CD",
    "Terraform",
    "Linux",
    "Jenkins",
    "Ansible",
    "Monitoring",
    "Prometheus",
    "Bash",
];

// ────────────────────────────────────────────────────────────────────────────
// Compiled patterns
// ────────────────────────────────────────────────────────────────────────────

/// Percentages, currency amounts, `N+` counts and `Nx` multipliers.
pub static QUANTIFIED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:\.\d+)?%|\$\d[\d,]*(?:\.\d+)?|\b\d+\+|\b\d+x\b")
        .expect("quantified achievement pattern compiles")
});

/// Percentages and currency amounts only.
pub static METRIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:\.\d+)?%|\$\d[\d,]*").expect("metric pattern compiles")
});

/// Whole titles and their plurals only: "leads" counts, "leadership" does not.
pub static ROLE_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:engineer|developer|intern|analyst|manager|lead|associate|consultant)s?\b")
        .expect("role title pattern compiles")
});

pub static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?:bachelor|master)(?:'?s)?\b|b\.?\s?tech\b|m\.?\s?tech\b|b\.e\.|b\.s\.?|b\.?sc\b|m\.s\.?|m\.?sc\b|ph\.?\s?d\b|mba\b|b\.?com\b|bca\b|mca\b|diploma\b)",
    )
    .expect("degree pattern compiles")
});

pub static INSTITUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:university|college|institute|school|academy|iit|nit|iiit|bits)\b")
        .expect("institution pattern compiles")
});

pub static GRADE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:c?gpa|grade)\b").expect("grade pattern compiles"));

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern compiles")
});

/// North American `(555) 123-4567` style numbers and 5+5 digit groupings.
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}|(?:\+\d{1,3}[-.\s]?)?\d{5}[-.\s]?\d{5}",
    )
    .expect("phone pattern compiles")
});

/// Runs against original-case text: `Location:` style labels or `City, ST`.
pub static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i:\b(?:location|address|based in|open to relocation)\b)|\b[A-Z][a-zA-Z]+,\s?[A-Z]{2}\b",
    )
    .expect("location pattern compiles")
});

pub static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:19[5-9]\d|20\d\d|present|current)\b").expect("date pattern compiles")
});

pub static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{1,2}[.)]\s").expect("numbered line pattern compiles"));

pub const BULLET_GLYPHS: &[char] = &['•', '-', '*', '►', '→', '▪', '◦', '‣', '●'];

// ────────────────────────────────────────────────────────────────────────────
// Matching helpers
// ────────────────────────────────────────────────────────────────────────────

/// Returns true if `term` occurs in `text` with no ASCII letter or digit
/// directly before or after it.
pub fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    text.match_indices(term).any(|(start, matched)| {
        let before = text[..start].chars().next_back();
        let after = text[start + matched.len()..].chars().next();
        !before.is_some_and(|c| c.is_ascii_alphanumeric())
            && !after.is_some_and(|c| c.is_ascii_alphanumeric())
    })
}

pub fn count_terms(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| contains_term(text, term)).count()
}

/// Header families match on any substring occurrence.
pub fn has_header(text: &str, synonyms: &[&str]) -> bool {
    synonyms.iter().any(|h| text.contains(h))
}

pub fn is_bullet_line(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| BULLET_GLYPHS.contains(&c))
        || NUMBERED_LINE_RE.is_match(line)
}
