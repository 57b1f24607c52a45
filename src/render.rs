use std::fmt;
use std::fs;
use std::path::Path;
use serde::Serialize;
use crate::domain::{Category, Extension, Note, Project};
use crate::error::{Error, Result};

pub const EMPTY_FILTER_MESSAGE: &str = "No hay apuntes en esta categoría.";
pub const LOAD_ERROR_MESSAGE: &str = "Error cargando apuntes.";
pub const NOTES_COLUMNS: usize = 6;

pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Loads the notes array. A record that does not fit [`Note`] is skipped with
/// a warning; only an unreadable file or a non-array document fails.
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&content)?;
    let notes = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Note>(record) {
            Ok(note) => Some(note),
            Err(e) => {
                log::warn!("Skipping note #{index} in {}: {e}", path.display());
                None
            }
        })
        .collect();
    Ok(notes)
}

pub fn link_label(link: &str) -> &'static str {
    if link.contains("wikipedia.org") {
        "Ver en Wikipedia"
    } else {
        "Ver en GitHub"
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProjectCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
    pub link: &'a str,
    pub link_label: &'static str,
}

impl<'a> From<&'a Project> for ProjectCard<'a> {
    fn from(project: &'a Project) -> Self {
        ProjectCard {
            title: &project.title,
            description: &project.description,
            tags: &project.tags,
            link: &project.link,
            link_label: link_label(&project.link),
        }
    }
}

/// Which notes the table shows: every note, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabFilter {
    #[default]
    All,
    Category(Category),
}

impl TabFilter {
    pub fn tabs() -> impl Iterator<Item = TabFilter> {
        std::iter::once(TabFilter::All).chain(Category::ALL.into_iter().map(TabFilter::Category))
    }

    pub fn label(self) -> &'static str {
        match self {
            TabFilter::All => "Todos",
            TabFilter::Category(category) => category.label(),
        }
    }

    pub fn admits(self, note: &Note) -> bool {
        match self {
            TabFilter::All => true,
            TabFilter::Category(category) => note.category == category,
        }
    }

    /// File the page for this tab state is written to.
    pub fn page_name(self) -> String {
        match self {
            TabFilter::All => "index.html".to_string(),
            TabFilter::Category(category) => format!("apuntes-{}.html", category.dir_name()),
        }
    }
}

impl fmt::Display for TabFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabFilter::All => f.write_str("all"),
            TabFilter::Category(category) => f.write_str(category.dir_name()),
        }
    }
}

/// One row of the notes table, with the action cell resolved from the extension.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NoteRow<'a> {
    pub category: &'static str,
    pub tag_class: &'a str,
    pub category_display: &'a str,
    pub asignatura: &'a str,
    pub title: &'a str,
    pub note_type: &'static str,
    pub date: &'a str,
    pub file: &'a str,
    pub extension: &'static str,
    pub action_label: &'static str,
    pub new_tab: bool,
    pub download: bool,
}

impl<'a> From<&'a Note> for NoteRow<'a> {
    fn from(note: &'a Note) -> Self {
        let (action_label, new_tab, download) = match note.extension {
            Extension::Pdf => ("⬇ PDF", false, true),
            Extension::Zip => ("📦 ZIP", false, true),
            Extension::Txt => ("⬇ TXT", false, true),
            Extension::Link => ("🔗 GitHub", true, false),
        };
        NoteRow {
            category: note.category.dir_name(),
            tag_class: &note.tag_class,
            category_display: &note.category_display,
            asignatura: &note.asignatura,
            title: &note.title,
            note_type: note.note_type.as_str(),
            date: &note.date,
            file: &note.file,
            extension: note.extension.as_str(),
            action_label,
            new_tab,
            download,
        }
    }
}

/// What the table body shows after a render.
#[derive(Debug, Clone, PartialEq)]
pub enum NotesBody<'a> {
    Rows(Vec<NoteRow<'a>>),
    Empty,
    LoadError,
}

impl NotesBody<'_> {
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            NotesBody::Rows(_) => None,
            NotesBody::Empty => Some(EMPTY_FILTER_MESSAGE),
            NotesBody::LoadError => Some(LOAD_ERROR_MESSAGE),
        }
    }
}

/// The full list of notes loaded for the page. Filtering never mutates it.
#[derive(Debug, Clone, Default)]
pub struct NotesTable {
    notes: Vec<Note>,
}

impl NotesTable {
    pub fn new(notes: Vec<Note>) -> Self {
        NotesTable { notes }
    }

    pub fn filter(&self, filter: TabFilter) -> Vec<&Note> {
        self.notes.iter().filter(|note| filter.admits(note)).collect()
    }

    pub fn body(&self, filter: TabFilter) -> NotesBody<'_> {
        let rows: Vec<NoteRow<'_>> = self.filter(filter).into_iter().map(NoteRow::from).collect();
        if rows.is_empty() {
            NotesBody::Empty
        } else {
            NotesBody::Rows(rows)
        }
    }
}

/// Notes as far as the page is concerned: loaded, or failed to load.
#[derive(Debug, Clone)]
pub enum NotesState {
    Loaded(NotesTable),
    Failed,
}

impl NotesState {
    pub fn body(&self, filter: TabFilter) -> NotesBody<'_> {
        match self {
            NotesState::Loaded(table) => table.body(filter),
            NotesState::Failed => NotesBody::LoadError,
        }
    }
}
