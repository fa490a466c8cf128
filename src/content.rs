use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

/// The parsed content store. Loaded once, read-only for the process lifetime.
static PORTFOLIO: LazyLock<PortfolioData> =
    LazyLock::new(|| load().expect("Portfolio content should parse"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Content asset not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
}

/// Access the content store. All sections read from this; nothing writes to it.
pub fn portfolio() -> &'static PortfolioData {
    &PORTFOLIO
}

/// Parse the embedded profile. Fallible so tests can exercise the content
/// without going through the static.
pub fn load() -> Result<PortfolioData, ContentError> {
    let raw = Assets::get("profile.json")
        .ok_or_else(|| ContentError::NotFound("profile.json".to_string()))?;
    serde_json::from_slice(&raw.data).map_err(|e| ContentError::Parse(e.to_string()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioData {
    pub person: Person,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub highlights: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub name: String,
    pub title: String,
    pub location: Location,
    pub contact: ContactChannels,
    pub description: String,
    pub hero_description: String,
    pub status: Availability,
    pub stats: Stats,
}

impl Person {
    /// First and remaining words of the name, for the split hero heading.
    pub fn name_parts(&self) -> (&str, &str) {
        match self.name.split_once(' ') {
            Some((first, rest)) => (first, rest),
            None => (self.name.as_str(), ""),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
    pub display_text: String,
}

impl Location {
    pub fn full(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, self.country)
    }

    pub fn maps_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            self.city.replace(' ', "+"),
            self.state.replace(' ', "+")
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactChannels {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
}

impl ContactChannels {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone.replace(' ', ""))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Availability {
    pub available: bool,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub years_label: String,
    pub years_description: String,
    pub projects: u32,
    pub coffee: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: Icon,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Display-only proficiency percentage, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub role: String,
    pub status: ProjectStatus,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProjectStatus {
    Live,
    Dev,
    Plan,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::Dev => "Dev",
            ProjectStatus::Plan => "Plan",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "bg-green",
            ProjectStatus::Dev => "bg-yellow",
            ProjectStatus::Plan => "bg-blue",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub position: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub kind: ExperienceKind,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ExperienceKind {
    Internship,
    Leadership,
}

impl ExperienceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceKind::Internship => "Internship",
            ExperienceKind::Leadership => "Leadership",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            ExperienceKind::Internship => Icon::Briefcase,
            ExperienceKind::Leadership => Icon::Users,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationEntry {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub status: String,
    pub current: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub event: String,
    pub kind: String,
}

/// Renderable glyphs. Every icon the site displays goes through this table,
/// so records hold a tag rather than a reference to markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Code,
    Database,
    Cpu,
    Terminal,
    Briefcase,
    Users,
    Graduation,
    Mail,
    Phone,
    Location,
    Github,
    Linkedin,
    Download,
    Send,
    Link,
}

impl Icon {
    pub fn class(&self) -> &'static str {
        match self {
            Icon::Code => "extra-code",
            Icon::Database => "extra-database",
            Icon::Cpu => "extra-cpu",
            Icon::Terminal => "extra-terminal",
            Icon::Briefcase => "extra-briefcase",
            Icon::Users => "extra-users",
            Icon::Graduation => "extra-graduation",
            Icon::Mail => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Download => "extra-download",
            Icon::Send => "extra-send",
            Icon::Link => "extra-link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parses() {
        let data = load().expect("embedded profile should parse");
        assert!(!data.person.name.is_empty());
        assert!(!data.skills.is_empty());
        assert!(!data.projects.is_empty());
        assert!(!data.experience.is_empty());
        assert!(!data.education.is_empty());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        let data = load().unwrap();
        for cat in &data.skills {
            assert!(!cat.items.is_empty(), "empty category {}", cat.name);
            for skill in &cat.items {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_name_parts_split() {
        let data = load().unwrap();
        let (first, rest) = data.person.name_parts();
        assert!(!first.is_empty());
        assert!(!first.contains(' '));
        assert_eq!(format!("{first} {rest}"), data.person.name);
    }

    #[test]
    fn test_project_status_labels() {
        assert_eq!(ProjectStatus::Live.label(), "Live");
        assert_eq!(ProjectStatus::Dev.label(), "Dev");
        assert_eq!(ProjectStatus::Plan.label(), "Plan");
        assert_eq!(ProjectStatus::Live.badge_class(), "bg-green");
    }

    #[test]
    fn test_experience_kind_icons() {
        assert_eq!(ExperienceKind::Internship.icon(), Icon::Briefcase);
        assert_eq!(ExperienceKind::Leadership.icon(), Icon::Users);
    }

    #[test]
    fn test_contact_links() {
        let data = load().unwrap();
        let contact = &data.person.contact;
        assert!(contact.mailto().starts_with("mailto:"));
        let tel = contact.tel();
        assert!(tel.starts_with("tel:"));
        assert!(!tel.contains(' '));
        assert!(contact.github.starts_with("https://"));
        assert!(contact.linkedin.starts_with("https://"));
    }

    #[test]
    fn test_icon_lookup_is_total() {
        // Every tag maps to a non-empty glyph class.
        let icons = [
            Icon::Code,
            Icon::Database,
            Icon::Cpu,
            Icon::Terminal,
            Icon::Briefcase,
            Icon::Users,
            Icon::Graduation,
            Icon::Mail,
            Icon::Phone,
            Icon::Location,
            Icon::Github,
            Icon::Linkedin,
            Icon::Download,
            Icon::Send,
            Icon::Link,
        ];
        for icon in icons {
            assert!(!icon.class().is_empty());
        }
    }
}
