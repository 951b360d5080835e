use crate::core::accordion::{render_accordion, EDUCATION_GROUP, EXPERIENCE_GROUP};
use crate::core::embed::embed_carousel;
use crate::core::list::{render_list, render_projects};
use crate::domain::model::{DocumentSummary, PortfolioConfig, RenderedDocument};
use crate::utils::error::Result;
use crate::utils::validation::required;
use tera::{Context, Tera};

const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html.tera");

/// Build the full page from the portfolio document.
///
/// Every required field is looked up before the template runs, so a missing
/// one fails the build without producing any output. Values are inserted
/// without escaping.
pub fn assemble(config: &PortfolioConfig) -> Result<RenderedDocument> {
    let personal = required("personal", &config.personal)?;
    let name = required("personal.name", &personal.name)?;
    let title = required("personal.title", &personal.title)?;
    let profile_image = required("personal.profile_image", &personal.profile_image)?;
    let resume_pdf = required("personal.resume_pdf", &personal.resume_pdf)?;
    let calendly_url = required("personal.calendly_url", &personal.calendly_url)?;
    let linkedin_url = required("personal.linkedin_url", &personal.linkedin_url)?;

    let current_work = required("current_work", &config.current_work)?;
    let past_work = required("past_work", &config.past_work)?;
    let explorations = required("current_explorations", &config.current_explorations)?;
    let projects = required("proud_projects", &config.proud_projects)?;
    let experience = required("experience", &config.experience)?;
    let education = required("education", &config.education)?;

    let footer = required("footer", &config.footer)?;
    let credit = required("footer.template_credit", &footer.template_credit)?;
    let credit_link = required("footer.template_credit.link", &credit.link)?;

    let carousel = config.carousel();

    let mut context = Context::new();
    context.insert("name", name);
    context.insert("title", title);
    context.insert("profile_image", profile_image);
    context.insert("resume_pdf", resume_pdf);
    context.insert("calendly_url", calendly_url);
    context.insert("linkedin_url", linkedin_url);
    context.insert("current_work", &render_list(current_work));
    context.insert("past_work", &render_list(past_work));
    context.insert("current_explorations", &render_list(explorations));
    context.insert("proud_projects", &render_projects(projects));
    context.insert("experience", &render_accordion(&EXPERIENCE_GROUP, experience));
    context.insert("education", &render_accordion(&EDUCATION_GROUP, education));
    context.insert("template_credit", credit_link);
    context.insert("carousel_json", &embed_carousel(carousel)?);

    let html = Tera::one_off(PAGE_TEMPLATE, &context, false)?;

    tracing::debug!("Assembled page for {} ({} bytes)", name, html.len());

    Ok(RenderedDocument {
        html,
        summary: DocumentSummary {
            name: name.clone(),
            list_items: current_work.len() + past_work.len() + explorations.len(),
            projects: projects.len(),
            experience: experience.len(),
            education: education.len(),
            carousel: carousel.len(),
        },
    })
}
