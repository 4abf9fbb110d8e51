//! Local ATS resume scorer.
//!
//! `analyze_resume_text` is a pure function of (text, target role): six
//! section scorers feed a weighted aggregate, an improvement ranker and the
//! strength/role-fit reporters. No I/O, no clock, no randomness.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` so handlers never depend on
//! the concrete backend.

pub mod handlers;
pub mod improvements;
pub mod lexicon;
pub mod models;
pub mod report;
pub mod sections;
pub mod structured;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;

pub use models::{
    AtsAnalysis, Improvement, IndustryFit, Priority, SectionKind, SectionScore, SectionStatus,
    Sections,
};
pub use structured::StructuredResume;

// ────────────────────────────────────────────────────────────────────────────
// Scoring pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores plain resume text. Total over every `&str`, including empty input.
pub fn analyze_resume_text(resume_text: &str, target_role: Option<&str>) -> AtsAnalysis {
    let lower = resume_text.to_lowercase();
    let lines: Vec<&str> = resume_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let sections = Sections {
        formatting: sections::score_formatting(&lower, &lines),
        keywords: sections::score_keywords(&lower),
        experience: sections::score_experience(&lower),
        education: sections::score_education(&lower),
        skills: sections::score_skills(&lower),
        contact: sections::score_contact(&lower, resume_text),
    };

    let overall_score = overall_score(&sections);
    let improvements = improvements::rank_improvements(&sections, &lower);
    let missing_keywords = report::missing_keywords(&lower, target_role);
    let (strong_points, weak_points) = report::strengths_and_weaknesses(&sections, &lower);
    let industry_fit = report::industry_fit(&lower, target_role);

    debug!(
        overall_score,
        fit_score = industry_fit.fit_score,
        role_bucket = report::RoleBucket::from_target_role(target_role).name(),
        improvements = improvements.len(),
        "resume scored"
    );

    AtsAnalysis {
        overall_score,
        sections,
        improvements,
        missing_keywords,
        strong_points,
        weak_points,
        industry_fit,
    }
}

/// Scores parser output by rendering it to text first, so both inputs share
/// one rule set.
pub fn analyze_structured_resume(
    resume: &StructuredResume,
    target_role: Option<&str>,
) -> AtsAnalysis {
    analyze_resume_text(&resume.to_plain_text(), target_role)
}

/// Weighted sum of the six section scores, rounded half-up.
///
/// Weights are integer percents (15/25/25/10/15/10) so the sum is exact.
pub fn overall_score(sections: &Sections) -> u32 {
    let weighted: u32 = sections
        .iter()
        .map(|(kind, section)| section.score * kind.weight_pct())
        .sum();
    (weighted + 50) / 100
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer trait
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to plug in another scoring backend without touching the
/// handlers. Carried in `AppState` as `Arc<dyn ResumeAnalyzer>`.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// Label reported to callers as `scorer_backend`.
    fn backend(&self) -> &'static str;

    async fn analyze(
        &self,
        resume_text: &str,
        target_role: Option<&str>,
    ) -> Result<AtsAnalysis, AppError>;
}

/// Deterministic lexicon-based scorer. Runs on the blocking pool so large
/// inputs never stall the async workers.
pub struct LocalAtsAnalyzer;

#[async_trait]
impl ResumeAnalyzer for LocalAtsAnalyzer {
    fn backend(&self) -> &'static str {
        "local"
    }

    async fn analyze(
        &self,
        resume_text: &str,
        target_role: Option<&str>,
    ) -> Result<AtsAnalysis, AppError> {
        let text = resume_text.to_owned();
        let role = target_role.map(str::to_owned);
        tokio::task::spawn_blocking(move || analyze_resume_text(&text, role.as_deref()))
            .await
            .map_err(|e| AppError::Analysis(format!("scoring task failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::ats::improvements::MAX_IMPROVEMENTS;
    use crate::ats::lexicon::{ACTION_VERBS, SOFT_SKILLS, TECH_KEYWORDS};
    use crate::ats::models::MAX_TIPS;
    use crate::ats::report::{MAX_FIT_SUGGESTIONS, MAX_MISSING_KEYWORDS, MAX_POINTS};

    const FULL_RESUME: &str = "\
Priya Sharma
priya.sharma@example.com | +1 (415) 555-0134 | linkedin.com/in/priyasharma | github.com/priyasharma
San Francisco, CA

SUMMARY
Full-stack engineer focused on reliable web platforms.

EXPERIENCE
Software Engineer, Acme Corp (2021 - Present)
- Developed microservices in Python and Go serving 2M+ requests per day
- Reduced API latency by 35% through Redis caching
- Led migration to Kubernetes on AWS, cutting infra cost by $120,000
- Mentored 4 engineers and improved code review throughput 2x
Software Developer Intern, Beta Labs (2020 - 2021)
- Built React and TypeScript dashboards with GraphQL
- Automated CI/CD pipelines with Jenkins and Docker

EDUCATION
B.Tech in Computer Science, National Institute of Technology (2016 - 2020)
CGPA: 8.9/10

SKILLS
Languages: Python, Java, TypeScript, JavaScript, Go, SQL
Frameworks: React, Django, Node.js, Express
Tools: Git, Docker, Kubernetes, Terraform, Linux
Soft skills: leadership, communication, teamwork

PROJECTS
- Placement tracker built with Django and PostgreSQL

CERTIFICATIONS
- AWS Certified Developer
";

    fn assert_caps(analysis: &AtsAnalysis) {
        assert!(analysis.overall_score <= 100);
        for (_, section) in analysis.sections.iter() {
            assert!(section.score <= 100);
            assert!(section.tips.len() <= MAX_TIPS);
            assert_eq!(section.status, SectionStatus::from_score(section.score));
        }
        assert!(analysis.improvements.len() <= MAX_IMPROVEMENTS);
        assert!(analysis.missing_keywords.len() <= MAX_MISSING_KEYWORDS);
        assert!(analysis.strong_points.len() <= MAX_POINTS);
        assert!(analysis.weak_points.len() <= MAX_POINTS);
        assert!(analysis.industry_fit.fit_score <= 100);
        assert!(analysis.industry_fit.suggestions.len() <= MAX_FIT_SUGGESTIONS);
        assert!(analysis
            .improvements
            .windows(2)
            .all(|pair| pair[0].priority <= pair[1].priority));
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze_resume_text("", None);
        assert_caps(&analysis);
        assert_eq!(analysis.sections.contact.score, 0);
        // 20*15 + 0 + 20*25 + 30*10 + 20*15 + 0 = 1400 -> 14
        assert_eq!(analysis.overall_score, 14);
        assert!(analysis.strong_points.is_empty());
        assert!(!analysis.weak_points.is_empty());
        assert_eq!(analysis.industry_fit.target_role, "Software Developer");
    }

    #[test]
    fn test_whitespace_only_matches_empty() {
        let blank = analyze_resume_text("  \n\t \n ", None);
        let empty = analyze_resume_text("", None);
        assert_eq!(blank, empty);
    }

    #[test]
    fn test_minimal_contact_text() {
        let text =
            "John Doe john@example.com (555) 123-4567 linkedin.com/in/johndoe github.com/johndoe";
        let analysis = analyze_resume_text(text, None);
        assert_eq!(analysis.sections.contact.score, 100);
        assert!(analysis.sections.experience.score <= 20);
        assert_caps(&analysis);
    }

    #[test]
    fn test_headers_bullets_and_keywords() {
        let text = "\
experience
- developed react and typescript apps with node.js and graphql
- implemented rest api services in python, java and go
- designed docker and kubernetes deployments on aws
- optimized sql queries on postgresql and redis
- built ci/cd with jenkins and git, led agile scrum rituals
education
skills
communication, teamwork, leadership
";
        let analysis = analyze_resume_text(text, None);
        let formatting = &analysis.sections.formatting;
        assert!(!formatting.tips.iter().any(|t| t.contains("section headers")));
        assert!(!formatting.tips.iter().any(|t| t.contains("bullet")));
        // Only the short-resume and missing-date penalties remain.
        assert_eq!(formatting.score, 65);
        assert!(
            analysis.sections.keywords.score >= 70,
            "keywords scored {}",
            analysis.sections.keywords.score
        );
    }

    #[test]
    fn test_role_fit_follows_target_role() {
        let text = "Skills: React, CSS, JavaScript";
        let frontend = analyze_resume_text(text, Some("Frontend Developer"));
        let backend = analyze_resume_text(text, Some("Backend Engineer"));
        assert!(frontend.industry_fit.fit_score > backend.industry_fit.fit_score);
        assert_eq!(frontend.sections, backend.sections);
        assert_ne!(frontend.missing_keywords, backend.missing_keywords);
    }

    #[test]
    fn test_no_action_verbs_prepends_achievement_finding() {
        let text = "Jane Roe\nSkills: Python, SQL\nEducation: BSc Mathematics";
        let analysis = analyze_resume_text(text, None);
        let first = &analysis.improvements[0];
        assert_eq!(first.issue, "Resume lacks achievement-oriented language");
        assert_eq!(first.priority, Priority::High);
    }

    #[test]
    fn test_full_resume_scores_well() {
        let analysis = analyze_resume_text(FULL_RESUME, Some("Full Stack Developer"));
        assert_caps(&analysis);
        assert_eq!(analysis.sections.contact.score, 100);
        assert!(analysis.sections.education.score >= 80);
        assert!(analysis.sections.skills.score >= 80);
        assert!(analysis.overall_score >= 70, "overall {}", analysis.overall_score);
        assert!(analysis
            .strong_points
            .contains(&"Good technical keyword coverage".to_string())
            || analysis.strong_points.len() == MAX_POINTS);
        assert!(!analysis
            .improvements
            .iter()
            .any(|i| i.issue == "Resume lacks achievement-oriented language"));
        assert_eq!(analysis.industry_fit.target_role, "Full Stack Developer");
    }

    #[test]
    fn test_deterministic() {
        let a = analyze_resume_text(FULL_RESUME, Some("devops"));
        let b = analyze_resume_text(FULL_RESUME, Some("devops"));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_overall_score_rounding() {
        let mut analysis = analyze_resume_text("", None);
        let fb = models::Feedback {
            strong: "s",
            fair: "f",
            weak: "w",
        };
        // 1*15 + 1*25 + 1*25 + 0 + 0 + 0 = 65 -> rounds up to 1
        analysis.sections.formatting = SectionScore::from_raw(1, &fb, vec![]);
        analysis.sections.keywords = SectionScore::from_raw(1, &fb, vec![]);
        analysis.sections.experience = SectionScore::from_raw(1, &fb, vec![]);
        analysis.sections.education = SectionScore::from_raw(0, &fb, vec![]);
        analysis.sections.skills = SectionScore::from_raw(0, &fb, vec![]);
        analysis.sections.contact = SectionScore::from_raw(0, &fb, vec![]);
        assert_eq!(overall_score(&analysis.sections), 1);

        analysis.sections.formatting = SectionScore::from_raw(100, &fb, vec![]);
        analysis.sections.keywords = SectionScore::from_raw(100, &fb, vec![]);
        analysis.sections.experience = SectionScore::from_raw(100, &fb, vec![]);
        analysis.sections.education = SectionScore::from_raw(100, &fb, vec![]);
        analysis.sections.skills = SectionScore::from_raw(100, &fb, vec![]);
        analysis.sections.contact = SectionScore::from_raw(100, &fb, vec![]);
        assert_eq!(overall_score(&analysis.sections), 100);
    }

    #[test]
    fn test_serialized_shape_uses_camel_case_keys() {
        let value = serde_json::to_value(analyze_resume_text("", Some("data analyst"))).unwrap();
        for key in [
            "overallScore",
            "sections",
            "improvements",
            "missingKeywords",
            "strongPoints",
            "weakPoints",
            "industryFit",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        for kind in SectionKind::ALL {
            assert!(value["sections"].get(kind.key()).is_some());
        }
        assert_eq!(value["industryFit"]["targetRole"], "data analyst");
        assert_eq!(value["sections"]["contact"]["status"], "poor");
    }

    #[test]
    fn test_structured_resume_uses_text_engine() {
        let resume: StructuredResume = serde_json::from_str(
            r#"{
                "emails": ["a@b.io"],
                "phoneNumbers": ["(555) 123-4567"],
                "linkedin": "linkedin.com/in/ab",
                "websites": ["github.com/ab"]
            }"#,
        )
        .unwrap();
        let structured = analyze_structured_resume(&resume, None);
        let text = analyze_resume_text(&resume.to_plain_text(), None);
        assert_eq!(structured, text);
        assert_eq!(structured.sections.contact.score, 100);
    }

    #[tokio::test]
    async fn test_local_analyzer_matches_pure_function() {
        let analyzer = LocalAtsAnalyzer;
        let via_trait = analyzer
            .analyze(FULL_RESUME, Some("backend"))
            .await
            .unwrap();
        assert_eq!(via_trait, analyze_resume_text(FULL_RESUME, Some("backend")));
        assert_eq!(analyzer.backend(), "local");
    }

    /// Lexicon terms mixed with headers, bullets, dates and numbers, so generated
    /// text reaches every scorer branch rather than just the base values.
    fn resume_vocabulary() -> Vec<&'static str> {
        let mut vocab: Vec<&'static str> = vec![
            "\n", "\n- ", "\n• ", "\n1. ", "EXPERIENCE", "Education", "skills", "Summary",
            "projects", "certifications", "2021", "present", "40%", "$12,000", "500+", "3x",
            "b.tech", "university", "cgpa", "engineer", "leadership", "jane@example.com",
            "(555) 123-4567", "linkedin.com/in/jane", "github.com/jane", "Austin, TX", "İ", "ß",
        ];
        vocab.extend_from_slice(TECH_KEYWORDS);
        vocab.extend_from_slice(ACTION_VERBS);
        vocab.extend_from_slice(SOFT_SKILLS);
        vocab
    }

    proptest! {
        #[test]
        fn arbitrary_text_stays_in_range_and_is_deterministic(
            text in ".{0,400}",
            role in proptest::option::of(".{0,30}"),
        ) {
            let analysis = analyze_resume_text(&text, role.as_deref());
            assert_caps(&analysis);
            prop_assert_eq!(analysis, analyze_resume_text(&text, role.as_deref()));
        }

        #[test]
        fn resume_shaped_text_stays_in_range_and_is_deterministic(
            tokens in prop::collection::vec(prop::sample::select(resume_vocabulary()), 0..400),
            role in proptest::option::of(prop::sample::select(vec![
                "Frontend Developer", "backend", "Full-Stack", "data analyst", "dev-ops", "", "  ",
            ])),
        ) {
            let text = tokens.join(" ");
            let analysis = analyze_resume_text(&text, role);
            assert_caps(&analysis);
            prop_assert_eq!(analysis, analyze_resume_text(&text, role));
        }

        #[test]
        fn more_tech_keywords_never_lower_the_keyword_score(
            base in prop::sample::subsequence(TECH_KEYWORDS.to_vec(), 0..=TECH_KEYWORDS.len()),
            extra in prop::sample::subsequence(TECH_KEYWORDS.to_vec(), 0..=TECH_KEYWORDS.len()),
        ) {
            let smaller = base.join(" ");
            let larger = format!("{smaller} {}", extra.join(" "));
            let before = analyze_resume_text(&smaller, None).sections.keywords.score;
            let after = analyze_resume_text(&larger, None).sections.keywords.score;
            prop_assert!(after >= before, "{after} < {before}");
        }
    }
}
