use serde::{Deserialize, Serialize};

/// The whole portfolio document as read from YAML.
///
/// Sections are optional at parse time; the assembler decides which ones it
/// cannot render without and reports them as missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub personal: Option<Personal>,
    pub current_work: Option<Vec<ListItem>>,
    pub past_work: Option<Vec<ListItem>>,
    pub current_explorations: Option<Vec<ListItem>>,
    pub proud_projects: Option<Vec<ProjectItem>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub project_carousel: Option<Vec<CarouselItem>>,
    pub footer: Option<Footer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: Option<String>,
    pub title: Option<String>,
    pub profile_image: Option<String>,
    pub resume_pdf: Option<String>,
    pub calendly_url: Option<String>,
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub template_credit: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub link: Option<String>,
}

/// An entry in one of the "about me" lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawListItem", into = "RawListItem")]
pub enum ListItem {
    Plain(String),
    /// Unlinked text shown in italics.
    Styled(String),
    Linked {
        text: String,
        link: String,
        italic: bool,
    },
}

/// An entry in the projects list. Same as [`ListItem`] without italics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawListItem", into = "RawListItem")]
pub enum ProjectItem {
    Plain(String),
    Linked { text: String, link: String },
}

/// The two shapes a list entry may take in YAML: a bare string or a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawListItem {
    Text(String),
    Record {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        italic: Option<bool>,
    },
}

impl From<RawListItem> for ListItem {
    fn from(raw: RawListItem) -> Self {
        match raw {
            RawListItem::Text(text) => ListItem::Plain(text),
            RawListItem::Record { text, link, italic } => {
                let italic = italic.unwrap_or(false);
                match link.filter(|l| !l.is_empty()) {
                    Some(link) => ListItem::Linked { text, link, italic },
                    None if italic => ListItem::Styled(text),
                    None => ListItem::Plain(text),
                }
            }
        }
    }
}

impl From<ListItem> for RawListItem {
    fn from(item: ListItem) -> Self {
        match item {
            ListItem::Plain(text) => RawListItem::Text(text),
            ListItem::Styled(text) => RawListItem::Record {
                text,
                link: None,
                italic: Some(true),
            },
            ListItem::Linked { text, link, italic } => RawListItem::Record {
                text,
                link: Some(link),
                italic: italic.then_some(true),
            },
        }
    }
}

impl From<RawListItem> for ProjectItem {
    fn from(raw: RawListItem) -> Self {
        match raw {
            RawListItem::Text(text) => ProjectItem::Plain(text),
            RawListItem::Record { text, link, .. } => match link.filter(|l| !l.is_empty()) {
                Some(link) => ProjectItem::Linked { text, link },
                None => ProjectItem::Plain(text),
            },
        }
    }
}

impl From<ProjectItem> for RawListItem {
    fn from(item: ProjectItem) -> Self {
        match item {
            ProjectItem::Plain(text) => RawListItem::Text(text),
            ProjectItem::Linked { text, link } => RawListItem::Record {
                text,
                link: Some(link),
                italic: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub institution: String,
    pub coursework: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub image_url: String,
    pub caption: String,
}

/// The assembled page, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub html: String,
    pub summary: DocumentSummary,
}

/// Counts reported after a build or dry run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSummary {
    pub name: String,
    pub list_items: usize,
    pub projects: usize,
    pub experience: usize,
    pub education: usize,
    pub carousel: usize,
}
