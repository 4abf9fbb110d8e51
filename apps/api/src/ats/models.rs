use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Section identity
// ────────────────────────────────────────────────────────────────────────────

/// The six scored dimensions, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Formatting,
    Keywords,
    Experience,
    Education,
    Skills,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Formatting,
        SectionKind::Keywords,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Contact,
    ];

    /// Key used in serialized output and strength/weakness labels.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Formatting => "formatting",
            SectionKind::Keywords => "keywords",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Contact => "contact",
        }
    }

    /// Display label for improvement entries.
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Formatting => "Formatting",
            SectionKind::Keywords => "Keywords",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Contact => "Contact",
        }
    }

    /// Weight in the overall score, in percent. The six weights sum to 100.
    pub fn weight_pct(self) -> u32 {
        match self {
            SectionKind::Formatting => 15,
            SectionKind::Keywords => 25,
            SectionKind::Experience => 25,
            SectionKind::Education => 10,
            SectionKind::Skills => 15,
            SectionKind::Contact => 10,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section score
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionStatus {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl SectionStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => SectionStatus::Excellent,
            s if s >= 60 => SectionStatus::Good,
            s if s >= 40 => SectionStatus::NeedsImprovement,
            _ => SectionStatus::Poor,
        }
    }
}

/// Feedback sentences for one scorer, keyed by score band.
#[derive(Debug, Clone, Copy)]
pub struct Feedback {
    /// score >= 80
    pub strong: &'static str,
    /// score >= 60
    pub fair: &'static str,
    pub weak: &'static str,
}

impl Feedback {
    pub fn for_score(&self, score: u32) -> &'static str {
        if score >= 80 {
            self.strong
        } else if score >= 60 {
            self.fair
        } else {
            self.weak
        }
    }
}

pub const MAX_TIPS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub score: u32,
    pub status: SectionStatus,
    pub feedback: String,
    pub tips: Vec<String>,
}

impl SectionScore {
    /// Clamps a raw point total into 0..=100 and derives status and feedback from it.
    pub fn from_raw(raw: i32, feedback: &Feedback, mut tips: Vec<String>) -> Self {
        let score = raw.clamp(0, 100) as u32;
        tips.truncate(MAX_TIPS);
        Self {
            score,
            status: SectionStatus::from_score(score),
            feedback: feedback.for_score(score).to_string(),
            tips,
        }
    }
}

/// One score per [`SectionKind`]. Serializes as an object with all six keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub formatting: SectionScore,
    pub keywords: SectionScore,
    pub experience: SectionScore,
    pub education: SectionScore,
    pub skills: SectionScore,
    pub contact: SectionScore,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> &SectionScore {
        match kind {
            SectionKind::Formatting => &self.formatting,
            SectionKind::Keywords => &self.keywords,
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
            SectionKind::Skills => &self.skills,
            SectionKind::Contact => &self.contact,
        }
    }

    /// Sections in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &SectionScore)> {
        SectionKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Improvements and report fields
// ────────────────────────────────────────────────────────────────────────────

/// Declaration order is sort order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub section: String,
    pub issue: String,
    pub suggestion: String,
    pub priority: Priority,
    pub impact: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryFit {
    pub target_role: String,
    pub fit_score: u32,
    pub suggestions: Vec<String>,
}

/// Full result of one analysis run. Fully determined by its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub overall_score: u32,
    pub sections: Sections,
    pub improvements: Vec<Improvement>,
    pub missing_keywords: Vec<String>,
    pub strong_points: Vec<String>,
    pub weak_points: Vec<String>,
    pub industry_fit: IndustryFit,
}
