//! Improvement ranker. Turns weak sections and global findings into a
//! capped, priority-ordered remediation list.

use crate::ats::lexicon::{
    count_terms, has_header, ACHIEVEMENT_VERBS, CERTIFICATION_HEADERS, PROJECTS_HEADERS,
    SUMMARY_HEADERS,
};
use crate::ats::models::{Improvement, Priority, Sections};

pub const MAX_IMPROVEMENTS: usize = 8;

/// Sections scoring below this produce improvement entries.
const IMPROVEMENT_THRESHOLD: u32 = 70;
/// Sections scoring below this are high priority; the rest are medium.
const HIGH_PRIORITY_BELOW: u32 = 50;

pub fn rank_improvements(sections: &Sections, lower: &str) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    for (kind, section) in sections.iter() {
        if section.score >= IMPROVEMENT_THRESHOLD {
            continue;
        }
        let priority = if section.score < HIGH_PRIORITY_BELOW {
            Priority::High
        } else {
            Priority::Medium
        };
        for tip in &section.tips {
            improvements.push(Improvement {
                section: kind.label().to_string(),
                issue: format!("{} score is {}%", kind.label(), section.score),
                suggestion: tip.clone(),
                priority,
                impact: priority,
            });
        }
    }

    apply_global_detectors(&mut improvements, lower);

    // sort_by_key is stable: ties keep discovery order.
    improvements.sort_by_key(|improvement| improvement.priority);
    improvements.truncate(MAX_IMPROVEMENTS);
    improvements
}

/// Findings that do not depend on any section score.
fn apply_global_detectors(improvements: &mut Vec<Improvement>, lower: &str) {
    if !has_header(lower, SUMMARY_HEADERS) {
        improvements.push(finding(
            "Summary",
            "Missing professional summary",
            "Add a 2-3 sentence summary highlighting your key qualifications",
            Priority::Medium,
        ));
    }

    if !has_header(lower, PROJECTS_HEADERS) {
        improvements.push(finding(
            "Projects",
            "No projects section found",
            "Add 2-3 projects with the tech stack used and a measurable outcome",
            Priority::Medium,
        ));
    }

    if !has_header(lower, CERTIFICATION_HEADERS) {
        improvements.push(finding(
            "Certifications",
            "No certifications listed",
            "List relevant certifications or completed online courses",
            Priority::Low,
        ));
    }

    if count_terms(lower, ACHIEVEMENT_VERBS) == 0 {
        improvements.insert(
            0,
            finding(
                "Experience",
                "Resume lacks achievement-oriented language",
                "Lead bullet points with outcome verbs like achieved, improved or reduced, followed by a measurable result",
                Priority::High,
            ),
        );
    }
}

fn finding(section: &str, issue: &str, suggestion: &str, priority: Priority) -> Improvement {
    Improvement {
        section: section.to_string(),
        issue: issue.to_string(),
        suggestion: suggestion.to_string(),
        priority,
        impact: priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::models::{Feedback, SectionScore};

    const FB: Feedback = Feedback {
        strong: "s",
        fair: "f",
        weak: "w",
    };

    /// Text that triggers none of the global detectors.
    const QUIET_TEXT: &str = "summary projects certifications achieved";

    fn section(score: i32, tips: &[&str]) -> SectionScore {
        SectionScore::from_raw(score, &FB, tips.iter().map(|t| t.to_string()).collect())
    }

    fn sections_with(
        formatting: SectionScore,
        keywords: SectionScore,
        rest: SectionScore,
    ) -> Sections {
        Sections {
            formatting,
            keywords,
            experience: rest.clone(),
            education: rest.clone(),
            skills: rest.clone(),
            contact: rest,
        }
    }

    #[test]
    fn test_sections_at_or_above_70_produce_nothing() {
        let sections = sections_with(
            section(70, &["a"]),
            section(95, &["b"]),
            section(100, &["c"]),
        );
        assert!(rank_improvements(&sections, QUIET_TEXT).is_empty());
    }

    #[test]
    fn test_priority_from_section_score() {
        let sections = sections_with(
            section(49, &["fix formatting"]),
            section(50, &["fix keywords"]),
            section(90, &[]),
        );
        let improvements = rank_improvements(&sections, QUIET_TEXT);
        assert_eq!(improvements.len(), 2);
        assert_eq!(improvements[0].section, "Formatting");
        assert_eq!(improvements[0].priority, Priority::High);
        assert_eq!(improvements[0].impact, Priority::High);
        assert_eq!(improvements[0].issue, "Formatting score is 49%");
        assert_eq!(improvements[1].section, "Keywords");
        assert_eq!(improvements[1].priority, Priority::Medium);
    }

    #[test]
    fn test_high_priority_precedes_medium_regardless_of_discovery() {
        // Formatting (55) is discovered before keywords (45).
        let sections = sections_with(
            section(55, &["f1", "f2"]),
            section(45, &["k1", "k2"]),
            section(90, &[]),
        );
        let improvements = rank_improvements(&sections, QUIET_TEXT);
        let suggestions: Vec<&str> = improvements.iter().map(|i| i.suggestion.as_str()).collect();
        assert_eq!(suggestions, vec!["k1", "k2", "f1", "f2"]);
    }

    #[test]
    fn test_truncation_drops_lowest_priority_first() {
        // 3 high + 10 medium section tips, then summary/projects are present but
        // certifications are not, adding one low-priority finding last.
        let sections = sections_with(
            section(30, &["h1", "h2", "h3"]),
            section(60, &["m1", "m2"]),
            section(60, &["m3", "m4"]),
        );
        let text = "summary projects achieved";
        let improvements = rank_improvements(&sections, text);

        assert_eq!(improvements.len(), MAX_IMPROVEMENTS);
        assert!(improvements.iter().all(|i| i.priority != Priority::Low));
        assert!(improvements[..3].iter().all(|i| i.priority == Priority::High));
        assert!(improvements[3..].iter().all(|i| i.priority == Priority::Medium));
    }

    #[test]
    fn test_low_priority_survives_when_room() {
        let sections = sections_with(section(90, &[]), section(90, &[]), section(90, &[]));
        let improvements = rank_improvements(&sections, "summary projects achieved");
        assert_eq!(improvements.len(), 1);
        assert_eq!(improvements[0].section, "Certifications");
        assert_eq!(improvements[0].priority, Priority::Low);
    }

    #[test]
    fn test_missing_achievement_language_is_prepended() {
        let sections = sections_with(section(30, &["h1"]), section(90, &[]), section(90, &[]));
        let improvements = rank_improvements(&sections, "summary projects certifications");
        assert_eq!(improvements.len(), 2);
        assert_eq!(improvements[0].issue, "Resume lacks achievement-oriented language");
        assert_eq!(improvements[0].priority, Priority::High);
        assert_eq!(improvements[1].suggestion, "h1");
    }

    #[test]
    fn test_all_detectors_fire_on_empty_text() {
        let sections = sections_with(section(90, &[]), section(90, &[]), section(90, &[]));
        let improvements = rank_improvements(&sections, "");
        let found: Vec<&str> = improvements.iter().map(|i| i.section.as_str()).collect();
        assert_eq!(found, vec!["Experience", "Summary", "Projects", "Certifications"]);
    }
}
