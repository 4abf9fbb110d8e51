//! Section scorers.
//!
//! Each scorer starts from a base score, applies fixed point deltas for the
//! features it detects, and hands the raw total to [`SectionScore::from_raw`]
//! which clamps it. Tips are pushed in detection order.

use crate::ats::lexicon::{
    count_terms, has_header, is_bullet_line, ACTION_VERBS, DATE_RE, DEGREE_RE, EDUCATION_HEADERS,
    EMAIL_RE, EXPERIENCE_HEADERS, GRADE_RE, INSTITUTION_RE, LOCATION_RE, METRIC_RE, PHONE_RE,
    QUANTIFIED_RE, ROLE_TITLE_RE, SKILLS_HEADERS, SKILL_CATEGORY_TOKENS, SOFT_SKILLS,
    TECH_KEYWORDS,
};
use crate::ats::models::{Feedback, SectionScore};

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1500;
const MIN_BULLETS: usize = 5;
const MIN_DATES: usize = 2;
const MAX_AVG_LINE_CHARS: usize = 120;

/// Action verb threshold shared by the keyword and experience scorers.
const MIN_ACTION_VERBS: usize = 5;

const FORMATTING_FEEDBACK: Feedback = Feedback {
    strong: "Well-formatted, ATS-friendly resume",
    fair: "Good structure, minor formatting improvements possible",
    weak: "Formatting needs improvement for ATS parsing",
};

const KEYWORDS_FEEDBACK: Feedback = Feedback {
    strong: "Excellent keyword optimization",
    fair: "Decent keyword coverage, room to add more",
    weak: "Needs more industry-relevant keywords",
};

const EXPERIENCE_FEEDBACK: Feedback = Feedback {
    strong: "Strong work experience section",
    fair: "Good experience, could use more detail",
    weak: "Experience section needs improvement",
};

const EDUCATION_FEEDBACK: Feedback = Feedback {
    strong: "Well-documented education",
    fair: "Education is present but could use more detail",
    weak: "Education section needs detail",
};

const SKILLS_FEEDBACK: Feedback = Feedback {
    strong: "Comprehensive skills section",
    fair: "Solid skills, consider expanding",
    weak: "Expand and organize your skills section",
};

const CONTACT_FEEDBACK: Feedback = Feedback {
    strong: "Complete contact information",
    fair: "Most contact details present",
    weak: "Missing important contact details",
};

/// Layout and structure. `lines` are the original-case non-empty lines.
pub fn score_formatting(lower: &str, lines: &[&str]) -> SectionScore {
    let mut score: i32 = 100;
    let mut tips = Vec::new();

    let word_count = lower.split_whitespace().count();
    if word_count < MIN_WORDS {
        score -= 25;
        tips.push("Add more detail to your experience and projects".to_string());
    } else if word_count > MAX_WORDS {
        score -= 15;
        tips.push("Consider condensing your resume to 1-2 pages".to_string());
    }

    let missing_headers = [EXPERIENCE_HEADERS, EDUCATION_HEADERS, SKILLS_HEADERS]
        .iter()
        .filter(|synonyms| !has_header(lower, synonyms))
        .count() as i32;
    if missing_headers > 0 {
        score -= 10 * missing_headers;
        tips.push("Add clear section headers: Experience, Education, Skills".to_string());
    }

    let bullet_lines = lines.iter().filter(|line| is_bullet_line(line)).count();
    if bullet_lines < MIN_BULLETS {
        score -= 15;
        tips.push("Use bullet points to list achievements".to_string());
    }

    if DATE_RE.find_iter(lower).count() < MIN_DATES {
        score -= 10;
        tips.push("Add start and end dates to each role and degree".to_string());
    }

    if !lines.is_empty() {
        let total_chars: usize = lines.iter().map(|line| line.trim().chars().count()).sum();
        if total_chars / lines.len() > MAX_AVG_LINE_CHARS {
            score -= 10;
            tips.push("Break long paragraphs into short, scannable lines".to_string());
        }
    }

    SectionScore::from_raw(score, &FORMATTING_FEEDBACK, tips)
}

pub fn score_keywords(lower: &str) -> SectionScore {
    let tech = count_terms(lower, TECH_KEYWORDS) as i32;
    let verbs = count_terms(lower, ACTION_VERBS) as i32;
    let soft = count_terms(lower, SOFT_SKILLS) as i32;
    let quantified = QUANTIFIED_RE.find_iter(lower).count() as i32;

    let score = (tech * 3).min(40)
        + (verbs * 3).min(30)
        + (soft * 4).min(20)
        + (quantified * 2).min(10);

    let mut tips = Vec::new();
    if tech < 8 {
        tips.push("Add more technical keywords that match your target role".to_string());
    }
    if verbs < MIN_ACTION_VERBS as i32 {
        tips.push("Start bullet points with strong action verbs".to_string());
    }
    if quantified < 3 {
        tips.push("Quantify achievements with percentages, amounts or counts".to_string());
    }

    SectionScore::from_raw(score, &KEYWORDS_FEEDBACK, tips)
}

pub fn score_experience(lower: &str) -> SectionScore {
    let mut score: i32 = 50;
    let mut tips = Vec::new();

    if !has_header(lower, EXPERIENCE_HEADERS) {
        score -= 30;
        tips.push("Add a clearly labelled Experience section".to_string());
    }

    let roles = ROLE_TITLE_RE.find_iter(lower).count() as i32;
    score += (roles * 5).min(20);

    let verbs = count_terms(lower, ACTION_VERBS);
    score += (verbs as i32 * 2).min(15);

    let metrics = METRIC_RE.find_iter(lower).count() as i32;
    score += (metrics * 5).min(15);

    if metrics < 2 {
        tips.push("Add quantified results to your experience (%, $, team size)".to_string());
    }
    if verbs < MIN_ACTION_VERBS {
        tips.push("Describe each role with action verbs like developed, led, improved".to_string());
    }

    SectionScore::from_raw(score, &EXPERIENCE_FEEDBACK, tips)
}

pub fn score_education(lower: &str) -> SectionScore {
    let mut score: i32 = 50;
    let mut tips = Vec::new();

    if !has_header(lower, EDUCATION_HEADERS) {
        score -= 20;
        tips.push("Add an Education section".to_string());
    }

    let degrees = DEGREE_RE.find_iter(lower).count() as i32;
    score += (degrees * 15).min(25);
    if degrees == 0 {
        tips.push("State your degree clearly (e.g. B.Tech, B.S., Master's)".to_string());
    }

    if INSTITUTION_RE.is_match(lower) {
        score += 15;
    }

    if GRADE_RE.is_match(lower) {
        score += 10;
    } else {
        tips.push("Add your GPA/CGPA if it is 3.0 (or 7.5/10) or above".to_string());
    }

    SectionScore::from_raw(score, &EDUCATION_FEEDBACK, tips)
}

pub fn score_skills(lower: &str) -> SectionScore {
    let mut score: i32 = 40;
    let mut tips = Vec::new();

    if !has_header(lower, SKILLS_HEADERS) {
        score -= 20;
        tips.push("Add a dedicated Skills section".to_string());
    }

    let tech = count_terms(lower, TECH_KEYWORDS) as i32;
    score += (tech * 3).min(35);

    if count_terms(lower, SKILL_CATEGORY_TOKENS) >= 2 {
        score += 15;
    } else {
        tips.push("Group skills into categories such as Languages, Frameworks, Tools".to_string());
    }

    if count_terms(lower, SOFT_SKILLS) >= 2 {
        score += 10;
    } else {
        tips.push("Mention soft skills like communication or teamwork".to_string());
    }

    SectionScore::from_raw(score, &SKILLS_FEEDBACK, tips)
}

/// Email, phone and location are matched against the original-case text.
pub fn score_contact(lower: &str, raw: &str) -> SectionScore {
    let mut score: i32 = 0;
    let mut channels = 0;
    let mut tips = Vec::new();

    if EMAIL_RE.is_match(raw) {
        score += 30;
        channels += 1;
    } else {
        tips.push("Add a professional email address".to_string());
    }

    if PHONE_RE.is_match(raw) {
        score += 20;
        channels += 1;
    } else {
        tips.push("Add a phone number".to_string());
    }

    if lower.contains("linkedin") {
        score += 20;
        channels += 1;
    } else {
        tips.push("Add your LinkedIn profile URL".to_string());
    }

    if lower.contains("github") || lower.contains("portfolio") {
        score += 20;
        channels += 1;
    } else {
        tips.push("Add a GitHub or portfolio link".to_string());
    }

    if channels > 0 || LOCATION_RE.is_match(raw) {
        score += 10;
    } else {
        tips.push("Add your city and country".to_string());
    }

    SectionScore::from_raw(score, &CONTACT_FEEDBACK, tips)
}
