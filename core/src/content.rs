use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

const BUILTIN_CONTENT: &str = include_str!("../assets/content.json");

/// Everything the portfolio displays. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub personal: PersonalInfo,
    pub social: SocialLinks,
    pub about: About,
    pub education: Education,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub sidebar_files: Vec<SidebarFile>,
    pub terminal: TerminalContent,
    pub welcome_screen: WelcomeScreen,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub full_title: String,
    pub email: String,
    /// Path of the resume asset, relative to the asset directory.
    pub resume_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: SocialLink,
    pub linkedin: SocialLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub url: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub kind: String,
    pub period: String,
}

/// A named group of skills. Kept as a list so categories render in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    pub status: String,
    pub last_updated: String,
    pub detailed_description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Which content pane a sidebar file opens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    About,
    Projects,
    Contact,
}

impl TabKind {
    pub const ALL: [TabKind; 3] = [TabKind::About, TabKind::Projects, TabKind::Contact];
}

/// File flavour, only used for the icon glyph and colour in the explorer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    React,
    Typescript,
    Json,
    Markdown,
    #[serde(other)]
    Plain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarFile {
    pub name: String,
    pub tab: TabKind,
    pub kind: FileKind,
    pub description: String,
}

/// Canned terminal output. Each field is the line list printed by the command of the same name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalContent {
    pub welcome: Vec<String>,
    pub help: Vec<String>,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub contact: Vec<String>,
    pub ls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeScreen {
    pub title: String,
    pub subtitle: String,
    pub tip: String,
}

/// Errors raised while loading a content file
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid content file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Content {
    /// The sample content compiled into the binary
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Load content from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn sidebar_file(&self, tab: TabKind) -> Option<&SidebarFile> {
        self.sidebar_files.iter().find(|f| f.tab == tab)
    }

    /// Display name for a tab, falling back to a generic file name
    pub fn tab_title(&self, tab: TabKind) -> String {
        match self.sidebar_file(tab) {
            Some(file) => file.name.clone(),
            None => match tab {
                TabKind::About => "about".to_string(),
                TabKind::Projects => "projects".to_string(),
                TabKind::Contact => "contact".to_string(),
            },
        }
    }

    pub fn contact_github(&self) -> String {
        format!("github.com/{}", self.social.github.username)
    }

    pub fn contact_linkedin(&self) -> String {
        format!("linkedin.com/in/{}", self.social.linkedin.username)
    }

    // Code-style renderings shown (and typed out) in the editor panes.

    pub fn about_code(&self) -> String {
        format!("// About Me\nconst about = \"{}\";", self.about.bio)
    }

    pub fn education_code(&self) -> String {
        let mut out = String::from("// Education & Experience\nconst education = {\n");
        out.push_str("  // Current Education\n");
        out.push_str(&format!("  institution: \"{}\",\n", self.education.institution));
        out.push_str(&format!("  degree: \"{}\",\n", self.education.degree));
        out.push_str(&format!("  period: \"{}\"\n", self.education.period));
        out.push_str("};\n\nconst experience = [\n");
        for (i, exp) in self.experience.iter().enumerate() {
            out.push_str("  {\n");
            out.push_str(&format!("    title: \"{}\",\n", exp.title));
            if !exp.company.is_empty() {
                out.push_str(&format!("    company: \"{}\",\n", exp.company));
            }
            out.push_str(&format!("    type: \"{}\",\n", exp.kind));
            out.push_str(&format!("    period: \"{}\",\n", exp.period));
            out.push_str(if i + 1 < self.experience.len() { "  },\n" } else { "  }\n" });
        }
        out.push_str("];");
        out
    }

    pub fn skills_code(&self) -> String {
        let mut out = String::from("const skills = {\n");
        for (i, group) in self.skills.iter().enumerate() {
            let items = group
                .items
                .iter()
                .map(|s| format!("\"{}\"", s))
                .collect::<Vec<_>>()
                .join(", ");
            let sep = if i + 1 < self.skills.len() { "," } else { "" };
            out.push_str(&format!("  {}: [{}]{}\n", group.category, items, sep));
        }
        out.push_str("};");
        out
    }

    pub fn contact_code(&self) -> String {
        format!(
            "// Contact Me\n// Let's build something amazing together!\n\nconst Contact = {{\n  Email: \"{}\",\n  Github: \"{}\",\n  Linkedin: \"{}\"\n}};",
            self.personal.email,
            self.contact_github(),
            self.contact_linkedin()
        )
    }
}
