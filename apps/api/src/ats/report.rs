//! Strength/weakness labels, role-fit scoring and missing keywords.

use crate::ats::lexicon::{
    contains_term, count_terms, BACKEND_EXPECTED, BACKEND_FIT, DATA_EXPECTED, DATA_FIT,
    DEVOPS_EXPECTED, DEVOPS_FIT, FRONTEND_EXPECTED, FRONTEND_FIT, FULLSTACK_EXPECTED,
    FULLSTACK_FIT, TECH_KEYWORDS,
};
use crate::ats::models::{IndustryFit, Sections};

pub const MAX_POINTS: usize = 5;
pub const MAX_MISSING_KEYWORDS: usize = 10;
pub const MAX_FIT_SUGGESTIONS: usize = 3;

/// Echoed as `targetRole` when the caller gives none.
pub const DEFAULT_TARGET_ROLE: &str = "Software Developer";

const STRONG_SECTION: u32 = 80;
const WEAK_SECTION: u32 = 50;
const STRONG_TECH_COVERAGE: usize = 12;
const WEAK_TECH_COVERAGE: usize = 6;
const BASE_FIT_SCORE: u32 = 40;

// ────────────────────────────────────────────────────────────────────────────
// Role buckets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleBucket {
    Frontend,
    Backend,
    Fullstack,
    Data,
    Devops,
}

impl RoleBucket {
    /// Match order when a target role names more than one bucket.
    const ALL: [RoleBucket; 5] = [
        RoleBucket::Frontend,
        RoleBucket::Backend,
        RoleBucket::Fullstack,
        RoleBucket::Data,
        RoleBucket::Devops,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoleBucket::Frontend => "frontend",
            RoleBucket::Backend => "backend",
            RoleBucket::Fullstack => "fullstack",
            RoleBucket::Data => "data",
            RoleBucket::Devops => "devops",
        }
    }

    /// Picks the first bucket whose name appears in the role, comparing both the
    /// lower-cased role and a copy with spaces, hyphens and underscores removed
    /// ("Full Stack", "front-end"). Anything unrecognized is `Fullstack`.
    pub fn from_target_role(target_role: Option<&str>) -> Self {
        let Some(role) = target_role else {
            return RoleBucket::Fullstack;
        };
        let lower = role.to_lowercase();
        let compact: String = lower
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        Self::ALL
            .into_iter()
            .find(|bucket| lower.contains(bucket.name()) || compact.contains(bucket.name()))
            .unwrap_or(RoleBucket::Fullstack)
    }

    /// Small lexicon used for the fit score.
    fn fit_keywords(self) -> &'static [&'static str] {
        match self {
            RoleBucket::Frontend => FRONTEND_FIT,
            RoleBucket::Backend => BACKEND_FIT,
            RoleBucket::Fullstack => FULLSTACK_FIT,
            RoleBucket::Data => DATA_FIT,
            RoleBucket::Devops => DEVOPS_FIT,
        }
    }

    /// Points per fit keyword hit.
    fn fit_weight(self) -> u32 {
        match self {
            RoleBucket::Backend | RoleBucket::Data => 10,
            RoleBucket::Frontend | RoleBucket::Fullstack | RoleBucket::Devops => 12,
        }
    }

    /// Larger display-cased list used for `missingKeywords`.
    fn expected_keywords(self) -> &'static [&'static str] {
        match self {
            RoleBucket::Frontend => FRONTEND_EXPECTED,
            RoleBucket::Backend => BACKEND_EXPECTED,
            RoleBucket::Fullstack => FULLSTACK_EXPECTED,
            RoleBucket::Data => DATA_EXPECTED,
            RoleBucket::Devops => DEVOPS_EXPECTED,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reporters
// ────────────────────────────────────────────────────────────────────────────

/// Returns `(strong_points, weak_points)`, each capped at [`MAX_POINTS`].
pub fn strengths_and_weaknesses(sections: &Sections, lower: &str) -> (Vec<String>, Vec<String>) {
    let mut strong_points = Vec::new();
    let mut weak_points = Vec::new();

    for (kind, section) in sections.iter() {
        if section.score >= STRONG_SECTION {
            strong_points.push(format!("Strong {} ({}%)", kind.key(), section.score));
        } else if section.score < WEAK_SECTION {
            weak_points.push(format!("Weak {} section", kind.key()));
        }
    }

    let tech_hits = count_terms(lower, TECH_KEYWORDS);
    if tech_hits >= STRONG_TECH_COVERAGE {
        strong_points.push("Good technical keyword coverage".to_string());
    } else if tech_hits < WEAK_TECH_COVERAGE {
        weak_points.push("Limited technical keywords".to_string());
    }

    strong_points.truncate(MAX_POINTS);
    weak_points.truncate(MAX_POINTS);
    (strong_points, weak_points)
}

pub fn industry_fit(lower: &str, target_role: Option<&str>) -> IndustryFit {
    let role = target_role.map(str::trim).filter(|r| !r.is_empty());
    let bucket = RoleBucket::from_target_role(role);
    let expected = bucket.fit_keywords();

    let found = count_terms(lower, expected);
    let fit_score = (BASE_FIT_SCORE + bucket.fit_weight() * found as u32).min(100);

    let mut suggestions = Vec::new();
    if found * 2 < expected.len() {
        let missing: Vec<&str> = expected
            .iter()
            .copied()
            .filter(|kw| !contains_term(lower, kw))
            .take(3)
            .collect();
        suggestions.push(format!(
            "Add more {}-specific skills such as {}",
            bucket.name(),
            missing.join(", ")
        ));
    }
    suggestions.push("Tailor your resume to match the job description".to_string());
    suggestions.push("Include projects relevant to your target role".to_string());
    suggestions.truncate(MAX_FIT_SUGGESTIONS);

    IndustryFit {
        target_role: role.unwrap_or(DEFAULT_TARGET_ROLE).to_string(),
        fit_score,
        suggestions,
    }
}

/// Bucket keywords absent from the text, in lexicon order.
pub fn missing_keywords(lower: &str, target_role: Option<&str>) -> Vec<String> {
    RoleBucket::from_target_role(target_role)
        .expected_keywords()
        .iter()
        .filter(|kw| !contains_term(lower, &kw.to_lowercase()))
        .take(MAX_MISSING_KEYWORDS)
        .map(|kw| kw.to_string())
        .collect()
}
