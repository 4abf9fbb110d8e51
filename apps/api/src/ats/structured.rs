//! Structured resume input.
//!
//! Resume parsers hand back fields rather than text. Instead of scoring those
//! fields with a second rule set, `StructuredResume` renders them as a
//! conventional plain-text resume which the text engine then scores.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredResume {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub objective: Option<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub linkedin: Option<String>,
    pub websites: Vec<String>,
    pub location: Option<String>,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub certifications: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub job_title: Option<String>,
    pub organization: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub organization: Option<String>,
    pub degree: Option<String>,
    pub grade: Option<String>,
    pub start_date: Option<String>,
    pub completion_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: String,
    /// Parser category such as "technical", "soft" or "language".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl StructuredResume {
    /// Renders the resume as plain text: contact header, then SUMMARY,
    /// EXPERIENCE, EDUCATION, SKILLS, PROJECTS and CERTIFICATIONS. Empty
    /// sections are left out.
    pub fn to_plain_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if let Some(name) = non_blank(&self.name) {
            lines.push(name.to_string());
        }
        let contact: Vec<&str> = self
            .emails
            .iter()
            .chain(self.phone_numbers.iter())
            .map(String::as_str)
            .chain(non_blank(&self.linkedin))
            .chain(self.websites.iter().map(String::as_str))
            .chain(non_blank(&self.location))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if !contact.is_empty() {
            lines.push(contact.join(" | "));
        }

        if let Some(summary) = non_blank(&self.summary).or_else(|| non_blank(&self.objective)) {
            start_section(&mut lines, "SUMMARY");
            lines.push(summary.to_string());
        }

        if !self.work_experience.is_empty() {
            start_section(&mut lines, "EXPERIENCE");
            for job in &self.work_experience {
                let heading =
                    join_present(&[non_blank(&job.job_title), non_blank(&job.organization)]);
                lines.push(with_dates(heading, &job.start_date, &job.end_date));
                push_bullets(&mut lines, &job.job_description);
            }
        }

        if !self.education.is_empty() {
            start_section(&mut lines, "EDUCATION");
            for entry in &self.education {
                let heading =
                    join_present(&[non_blank(&entry.degree), non_blank(&entry.organization)]);
                lines.push(with_dates(heading, &entry.start_date, &entry.completion_date));
                if let Some(grade) = non_blank(&entry.grade) {
                    lines.push(format!("- GPA: {grade}"));
                }
            }
        }

        if !self.skills.is_empty() {
            start_section(&mut lines, "SKILLS");
            for (label, names) in group_skills(&self.skills) {
                lines.push(format!("{label}: {}", names.join(", ")));
            }
        }

        if !self.projects.is_empty() {
            start_section(&mut lines, "PROJECTS");
            for project in &self.projects {
                if let Some(name) = non_blank(&project.name) {
                    lines.push(name.to_string());
                }
                push_bullets(&mut lines, &project.description);
            }
        }

        let certifications: Vec<&str> = self
            .certifications
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        if !certifications.is_empty() {
            start_section(&mut lines, "CERTIFICATIONS");
            lines.extend(certifications.iter().map(|c| format!("- {c}")));
        }

        lines.join("\n")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn start_section(lines: &mut Vec<String>, header: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(header.to_string());
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts.iter().flatten().copied().collect::<Vec<_>>().join(", ")
}

fn with_dates(heading: String, start: &Option<String>, end: &Option<String>) -> String {
    match (non_blank(start), non_blank(end)) {
        (Some(start), Some(end)) => format!("{heading} ({start} - {end})"),
        (Some(start), None) => format!("{heading} ({start} - Present)"),
        (None, Some(end)) => format!("{heading} ({end})"),
        (None, None) => heading,
    }
}

/// One `- ` bullet per sentence or line of the description.
fn push_bullets(lines: &mut Vec<String>, description: &Option<String>) {
    let Some(description) = non_blank(description) else {
        return;
    };
    lines.extend(
        description
            .split(['\n', ';'])
            .flat_map(|part| part.split(". "))
            .map(|s| s.trim().trim_start_matches(['-', '•', '*']).trim())
            .map(|s| s.trim_end_matches('.'))
            .filter(|s| !s.is_empty())
            .map(|s| format!("- {s}")),
    );
}

/// Groups skills by parser category, preserving first-seen order.
fn group_skills(skills: &[SkillEntry]) -> Vec<(String, Vec<&str>)> {
    let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
    for skill in skills {
        let name = skill.name.trim();
        if name.is_empty() {
            continue;
        }
        let label = category_label(skill.kind.as_deref());
        match groups.iter().position(|(existing, _)| *existing == label) {
            Some(idx) => groups[idx].1.push(name),
            None => groups.push((label, vec![name])),
        }
    }
    groups
}

fn category_label(kind: Option<&str>) -> String {
    let kind = kind.map(|k| k.trim().to_lowercase()).unwrap_or_default();
    if kind.contains("soft") {
        "Soft Skills".to_string()
    } else if kind.contains("language") {
        "Languages".to_string()
    } else if kind.contains("framework") || kind.contains("librar") {
        "Frameworks".to_string()
    } else if kind.contains("database") {
        "Databases".to_string()
    } else if kind.contains("tool") || kind.contains("platform") {
        "Tools".to_string()
    } else {
        "Technologies".to_string()
    }
}
