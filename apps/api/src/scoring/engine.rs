//! Rubric scorer: five fixed categories, 100 points in total.
//!
//! Pure and total. Every input scores; blank or missing content earns zero
//! and adds a suggestion. Categories are always reported in `CATEGORIES`
//! order.

use tracing::debug;

use crate::models::resume::{is_present, Education, Project, Resume, Skill, WorkExperience};
use crate::scoring::report::{CategoryScore, ScoreReport};

pub const PERSONAL_INFO: &str = "Personal Information";
pub const WORK_EXPERIENCE: &str = "Work Experience";
pub const EDUCATION: &str = "Education";
pub const SKILLS: &str = "Skills";
pub const PROJECTS: &str = "Projects";

/// (label, max points, excellent line, good line), in report order.
/// Maxima sum to 100.
pub const CATEGORIES: &[(&str, u32, u32, u32)] = &[
    (PERSONAL_INFO, 20, 16, 12),
    (WORK_EXPERIENCE, 25, 20, 15),
    (EDUCATION, 15, 12, 8),
    (SKILLS, 20, 16, 12),
    (PROJECTS, 20, 16, 12),
];

const SUMMARY_MIN_CHARS: usize = 50;
const JOB_DESCRIPTION_MIN_CHARS: usize = 100;
const PROJECT_DESCRIPTION_MIN_CHARS: usize = 50;

/// Points earned so far in one category plus the suggestions for checks that failed.
#[derive(Default)]
struct Tally {
    score: u32,
    suggestions: Vec<String>,
}

impl Tally {
    fn check(&mut self, passed: bool, points: u32, suggestion: &str) {
        if passed {
            self.score += points;
        } else {
            self.suggest(suggestion);
        }
    }

    fn suggest(&mut self, suggestion: &str) {
        self.suggestions.push(suggestion.to_string());
    }

    fn finish(self, label: &str) -> CategoryScore {
        let (max, excellent, good) = category_limits(label);
        CategoryScore::with_cut_lines(
            label,
            self.score,
            max,
            (excellent, good),
            self.suggestions,
        )
    }
}

fn category_limits(label: &str) -> (u32, u32, u32) {
    CATEGORIES
        .iter()
        .find(|(l, ..)| *l == label)
        .map(|&(_, max, excellent, good)| (max, excellent, good))
        .unwrap_or((0, 0, 0))
}

/// Scores a resume snapshot. Same input, same report.
pub fn score(resume: &Resume) -> ScoreReport {
    let items = vec![
        score_personal_info(resume),
        score_work_experience(&resume.work_experience),
        score_education(&resume.education),
        score_skills(&resume.skills),
        score_projects(&resume.projects),
    ];

    let report = ScoreReport::from_items(items);
    debug!(
        percentage = report.percentage,
        total = report.total_score,
        suggestions = report.suggestion_count,
        "Scored resume: {}",
        report
            .items
            .iter()
            .map(|i| format!("{}={}/{}", i.label, i.score, i.max_score))
            .collect::<Vec<_>>()
            .join(", ")
    );
    report
}

fn score_personal_info(resume: &Resume) -> CategoryScore {
    let info = &resume.personal_info;
    let mut tally = Tally::default();

    tally.check(!info.full_name.is_empty(), 3, "Add your full name");
    tally.check(!info.email.is_empty(), 3, "Add your email address");
    tally.check(!info.phone.is_empty(), 2, "Add your phone number");
    tally.check(!info.location.is_empty(), 2, "Add your location");
    tally.check(
        char_len(&info.summary) >= SUMMARY_MIN_CHARS,
        6,
        "Add a professional summary (50+ characters)",
    );
    tally.check(is_present(info.linkedin.as_deref()), 2, "Add LinkedIn profile");
    tally.check(
        is_present(info.github.as_deref()),
        2,
        "Add GitHub profile (if relevant)",
    );

    tally.finish(PERSONAL_INFO)
}

fn score_work_experience(entries: &[WorkExperience]) -> CategoryScore {
    let mut tally = Tally::default();

    if entries.is_empty() {
        tally.suggest("Add work experience entries");
        return tally.finish(WORK_EXPERIENCE);
    }
    tally.score += 10;

    let joined: Vec<String> = entries.iter().map(|e| e.joined_description()).collect();

    tally.check(
        joined
            .iter()
            .any(|d| char_len(d) >= JOB_DESCRIPTION_MIN_CHARS),
        8,
        "Add detailed job descriptions (100+ characters)",
    );
    tally.check(
        entries.len() >= 2,
        4,
        "Add more work experiences if available",
    );
    tally.check(
        joined.iter().any(|d| is_quantified(d)),
        3,
        "Include quantifiable achievements (numbers, percentages)",
    );

    tally.finish(WORK_EXPERIENCE)
}

fn score_education(entries: &[Education]) -> CategoryScore {
    let mut tally = Tally::default();

    if entries.is_empty() {
        tally.suggest("Add education information");
        return tally.finish(EDUCATION);
    }
    tally.score += 8;

    tally.check(
        entries
            .iter()
            .any(|e| !e.degree.is_empty() && !e.institution.is_empty()),
        7,
        "Complete education details (degree and school)",
    );

    tally.finish(EDUCATION)
}

fn score_skills(skills: &[Skill]) -> CategoryScore {
    let mut tally = Tally::default();

    match skills.len() {
        n if n >= 5 => tally.score += 15,
        n if n >= 3 => tally.score += 10,
        n if n >= 1 => tally.score += 5,
        _ => tally.suggest("Add relevant skills"),
    }

    // Compared against the first skill only, not as a distinct-category count.
    let varied = skills
        .first()
        .is_some_and(|first| skills.iter().any(|s| s.category != first.category));
    tally.check(varied, 5, "Add skills from different categories");

    if tally.score < 15 {
        tally.suggest("Add more skills (aim for 5+ skills)");
    }

    tally.finish(SKILLS)
}

fn score_projects(projects: &[Project]) -> CategoryScore {
    let mut tally = Tally::default();

    if projects.is_empty() {
        tally.suggest("Add relevant projects");
        return tally.finish(PROJECTS);
    }
    tally.score += 10;

    tally.check(
        projects
            .iter()
            .any(|p| char_len(&p.description) >= PROJECT_DESCRIPTION_MIN_CHARS),
        5,
        "Add detailed project descriptions",
    );
    tally.check(
        projects.iter().any(|p| is_present(p.url.as_deref())),
        3,
        "Add project URLs or GitHub links",
    );
    tally.check(
        projects.len() >= 2,
        2,
        "Add more projects to showcase your skills",
    );

    tally.finish(PROJECTS)
}

/// A measurable outcome: any `%`, `$`, or ASCII digit.
pub fn is_quantified(text: &str) -> bool {
    text.chars().any(|c| c == '%' || c == '$' || c.is_ascii_digit())
}

/// Length in Unicode scalar values. A character outside the BMP counts
/// once here, where a UTF-16 length would count it twice.
fn char_len(text: &str) -> usize {
    text.chars().count()
}
