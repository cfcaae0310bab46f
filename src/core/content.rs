//! The portfolio document – an ordered list of typed sections loaded from TOML.
//!
//! The document is the single source of truth for the page: section order
//! here is section order on screen, and each widget reads exactly one
//! section kind at startup. A section that is missing (or missing the data a
//! widget needs) leaves that widget disabled; only an unreadable or
//! unparseable document is a hard error.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid portfolio document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A complete portfolio document.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    /// Site title, shown in the header bar.
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One page section: a stable id, the label shown in navigation, and a
/// kind-specific body.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: SectionKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionKind {
    Hero {
        headline: String,
        #[serde(default)]
        intro: String,
        /// JSON-encoded array of strings. Kept raw here; the typewriter
        /// parses it and silently disables itself when it is malformed.
        #[serde(default)]
        taglines: Option<String>,
    },
    About {
        #[serde(default)]
        paragraphs: Vec<String>,
    },
    Resume {
        #[serde(default)]
        tabs: Vec<TabButton>,
        #[serde(default)]
        panels: Vec<TabPanel>,
    },
    Projects {
        #[serde(default)]
        filters: Vec<String>,
        #[serde(default)]
        items: Vec<ProjectItem>,
    },
    Testimonials {
        #[serde(default)]
        entries: Vec<Testimonial>,
    },
    Contact {
        /// Where the form POSTs. Defaults to the hosted form relay.
        #[serde(default = "default_endpoint")]
        endpoint: String,
        /// Relay access key, sent alongside the form fields when present.
        #[serde(default)]
        access_key: Option<String>,
    },
}

/// A resume tab button: `key` resolves the panel to show, `label` is what
/// the button displays.
#[derive(Debug, Clone, Deserialize)]
pub struct TabButton {
    pub key: String,
    pub label: String,
}

/// A resume content panel, addressed by id.
#[derive(Debug, Clone, Deserialize)]
pub struct TabPanel {
    pub id: String,
    #[serde(default)]
    pub entries: Vec<ResumeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeEntry {
    pub title: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

fn default_endpoint() -> String {
    "https://api.web3forms.com/submit".to_string()
}

/// Load and parse a portfolio document.
pub fn load(path: &Path) -> Result<Portfolio, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::from_str(&raw)?)
}

/// Starter document printed by `--init`. Doubles as the test fixture.
pub const STARTER: &str = r#"title = "Sam Doe"

[[sections]]
id = "home"
label = "Home"
kind = "hero"
headline = "Hi, I'm Sam Doe"
intro = "Systems programmer with a soft spot for terminals."
taglines = '["I build command-line tools.", "I make servers boring.", "I write Rust."]'

[[sections]]
id = "about"
label = "About"
kind = "about"
paragraphs = [
    "I have spent the last decade building infrastructure tooling, from deployment pipelines to observability stacks.",
    "These days I mostly work on developer experience: fast feedback loops, good defaults, and error messages that tell you what to do next.",
]

[[sections]]
id = "resume"
label = "Resume"
kind = "resume"
tabs = [
    { key = "experience", label = "Experience" },
    { key = "education", label = "Education" },
    { key = "certifications", label = "Certifications" },
]

[[sections.panels]]
id = "experience-content"
entries = [
    { title = "Senior Engineer, Northwind", period = "2021 - present", detail = "Own the build and release platform used by forty product teams." },
    { title = "Engineer, Initech", period = "2017 - 2021", detail = "Moved the monolith's hot paths to services without anyone noticing." },
]

[[sections.panels]]
id = "education-content"
entries = [
    { title = "BSc Computer Science, State University", period = "2013 - 2017", detail = "Thesis on incremental dataflow engines." },
]

[[sections.panels]]
id = "certifications-content"
entries = [
    { title = "Certified Kubernetes Administrator", period = "2022", detail = "" },
]

[[sections]]
id = "work"
label = "Work"
kind = "projects"
filters = ["all", "tools", "services", "libraries"]
items = [
    { name = "hexpeek", category = "tools", blurb = "A hex viewer that keeps up with multi-gigabyte files.", link = "https://example.com/hexpeek" },
    { name = "relayd", category = "services", blurb = "Tiny TCP relay with hot-reloadable routing rules." },
    { name = "spanviz", category = "tools", blurb = "Render distributed traces as flame graphs in the terminal." },
    { name = "slotmap-rs", category = "libraries", blurb = "Generational-index arena with stable handles." },
]

[[sections]]
id = "testimonials"
label = "Testimonials"
kind = "testimonials"
entries = [
    { quote = "Sam turned our week-long release ritual into a ten-minute non-event.", author = "Ada Park", role = "Engineering lead, Northwind" },
    { quote = "The rare engineer who deletes more code than they write, and everything gets faster.", author = "Jonas Mehta", role = "CTO, Initech" },
    { quote = "Writes documentation you actually want to read.", author = "Priya Natarajan", role = "Staff engineer" },
]

[[sections]]
id = "contact"
label = "Contact"
kind = "contact"
access_key = "YOUR-ACCESS-KEY"
"#;

/// Parsed copy of [`STARTER`] for use in tests across the crate.
#[cfg(test)]
pub fn sample() -> Portfolio {
    toml::from_str(STARTER).expect("starter document parses")
}
