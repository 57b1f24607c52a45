use std::fs;
use std::path::Path;
use serde::Serialize;
use tera::{Context, Tera};
use crate::domain::Project;
use crate::error::{Error, Result};
use crate::interaction::{PageState, HEADER_OFFSET, SHADOW_THRESHOLD};
use crate::render::{NotesBody, NotesState, ProjectCard, TabFilter, NOTES_COLUMNS};

pub fn init_tera(templates_dir: &Path) -> Result<Tera> {
    let glob = templates_dir.join("**").join("*.html");
    let mut tera = Tera::new(&glob.to_string_lossy())?;
    tera.add_template_file(templates_dir.join("script.js"), Some("script.js"))?;
    Ok(tera)
}

/// Browser bindings for the page interactions, sharing the offsets used by
/// [`PageState`].
pub fn render_script(tera: &Tera) -> Result<String> {
    let mut context = Context::new();
    context.insert("header_offset", &HEADER_OFFSET);
    context.insert("shadow_threshold", &SHADOW_THRESHOLD);
    Ok(tera.render("script.js", &context)?)
}

pub fn render_projects(tera: &Tera, projects: &[Project]) -> Result<String> {
    let cards: Vec<ProjectCard<'_>> = projects.iter().map(ProjectCard::from).collect();
    let mut context = Context::new();
    context.insert("projects", &cards);
    Ok(tera.render("partials/projects.html", &context)?)
}

/// Renders the whole `#notes-body` content; callers replace the body with it.
pub fn render_notes_body(tera: &Tera, body: &NotesBody<'_>) -> Result<String> {
    let mut context = Context::new();
    match body {
        NotesBody::Rows(rows) => context.insert("rows", rows),
        NotesBody::Empty | NotesBody::LoadError => context.insert("rows", &Vec::<()>::new()),
    }
    context.insert("placeholder", &body.placeholder());
    context.insert("error", &matches!(body, NotesBody::LoadError));
    context.insert("columns", &NOTES_COLUMNS);
    Ok(tera.render("partials/notes_body.html", &context)?)
}

#[derive(Debug, Serialize)]
struct TabLink {
    tab: String,
    label: &'static str,
    href: String,
    active: bool,
}

fn tab_links(page: &PageState) -> Vec<TabLink> {
    TabFilter::tabs()
        .map(|tab| TabLink {
            tab: tab.to_string(),
            label: tab.label(),
            href: format!("{}#apuntes", tab.page_name()),
            active: page.is_active(tab),
        })
        .collect()
}

pub fn render_page(tera: &Tera, page: &PageState, projects_html: &str, notes_html: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("page", page);
    context.insert("tabs", &tab_links(page));
    context.insert("projects_html", projects_html);
    context.insert("notes_html", notes_html);
    Ok(tera.render("index.html", &context)?)
}

/// Writes one page per tab state: `index.html` for `all`, then one per category.
pub fn render_tab_pages(
    tera: &Tera,
    output_dir: &Path,
    projects_html: &str,
    notes: &NotesState,
) -> Result<usize> {
    let mut written = 0;
    for tab in TabFilter::tabs() {
        let page = PageState::with_tab(tab);
        let notes_html = render_notes_body(tera, &notes.body(tab))?;
        let html = render_page(tera, &page, projects_html, &notes_html)?;
        let page_path = output_dir.join(tab.page_name());
        fs::write(&page_path, html).map_err(|e| Error::io(&page_path, e))?;
        log::info!("Wrote HTML: {}", page_path.display());
        written += 1;
    }
    Ok(written)
}
