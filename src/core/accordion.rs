use crate::domain::model::{EducationEntry, ExperienceEntry};

/// Id namespace for one collapsible panel group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionGroup {
    pub parent: &'static str,
    pub heading_prefix: &'static str,
    pub collapse_prefix: &'static str,
}

pub const EXPERIENCE_GROUP: AccordionGroup = AccordionGroup {
    parent: "experienceAccordion",
    heading_prefix: "heading",
    collapse_prefix: "collapse",
};

pub const EDUCATION_GROUP: AccordionGroup = AccordionGroup {
    parent: "educationAccordion",
    heading_prefix: "eduHeading",
    collapse_prefix: "eduCollapse",
};

impl AccordionGroup {
    pub fn heading_id(&self, index: usize) -> String {
        format!("{}{}", self.heading_prefix, index)
    }

    pub fn collapse_id(&self, index: usize) -> String {
        format!("{}{}", self.collapse_prefix, index)
    }
}

/// Something that can be shown as one accordion panel.
pub trait Panel {
    /// Markup shown in the always-visible toggle.
    fn heading(&self) -> String;
    /// Markup shown when the panel is expanded.
    fn body(&self) -> String;
}

impl Panel for ExperienceEntry {
    fn heading(&self) -> String {
        format!("{} | <strong>{}</strong>", self.title, self.company)
    }

    fn body(&self) -> String {
        let details: String = self
            .details
            .iter()
            .map(|detail| format!("<li>{}</li>", detail))
            .collect();

        format!(
            "<p><i>{}</i></p>\n                    <ul>\n                        {}\n                    </ul>",
            self.period, details
        )
    }
}

impl Panel for EducationEntry {
    fn heading(&self) -> String {
        format!("{} | <strong>{}</strong>", self.title, self.institution)
    }

    fn body(&self) -> String {
        format!("<p>Coursework: {}</p>", self.coursework)
    }
}

/// Render one panel per entry. Ids come from the entry's position, so
/// reordering entries renumbers them.
pub fn render_accordion<P: Panel>(group: &AccordionGroup, entries: &[P]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_panel(group, index, entry))
        .collect()
}

fn render_panel<P: Panel>(group: &AccordionGroup, index: usize, entry: &P) -> String {
    let heading_id = group.heading_id(index);
    let collapse_id = group.collapse_id(index);
    let parent = group.parent;
    let heading = entry.heading();
    let body = entry.body();

    format!(
        r##"
        <div class="panel panel-default">
            <div class="panel-heading" role="tab" id="{heading_id}">
                <h4 class="panel-title">
                    <a class="collapsed hover-glow" data-toggle="collapse" data-parent="#{parent}"
                       href="#{collapse_id}" aria-expanded="false" aria-controls="{collapse_id}">
                        {heading}
                    </a>
                </h4>
            </div>
            <div id="{collapse_id}" class="panel-collapse collapse" role="tabpanel" aria-labelledby="{heading_id}">
                <div class="panel-body">
                    {body}
                </div>
            </div>
        </div>
    "##
    )
}
