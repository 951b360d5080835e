use crate::domain::model::{ListItem, ProjectItem};

/// Render list entries as `<li>` fragments, in input order.
///
/// Text and links are inserted verbatim; the config is trusted input.
pub fn render_list(items: &[ListItem]) -> String {
    items.iter().map(render_list_item).collect()
}

pub fn render_projects(items: &[ProjectItem]) -> String {
    items.iter().map(render_project_item).collect()
}

fn render_list_item(item: &ListItem) -> String {
    match item {
        ListItem::Plain(text) => format!("<li>{}</li>", text),
        ListItem::Styled(text) => format!("<li style=\"font-style: italic;\">{}</li>", text),
        ListItem::Linked { text, link, italic } => {
            let anchor = anchor(text, link);
            if *italic {
                format!("<li><i>{}</i></li>", anchor)
            } else {
                format!("<li>{}</li>", anchor)
            }
        }
    }
}

fn render_project_item(item: &ProjectItem) -> String {
    match item {
        ProjectItem::Plain(text) => format!("<li>{}</li>", text),
        ProjectItem::Linked { text, link } => format!("<li>{}</li>", anchor(text, link)),
    }
}

fn anchor(text: &str, link: &str) -> String {
    format!("<a target=\"_blank\" href=\"{}\">{}</a>", link, text)
}
