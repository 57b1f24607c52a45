use std::path::{Path, PathBuf};
use clap::Parser;
use crate::fs::{copy_tree, prepare_output_dir, process_asset};
use crate::notes::{collect_notes, sort_notes, write_notes};
use crate::render::{load_notes, load_projects, NotesState, NotesTable};
use crate::template::{init_tera, render_projects, render_script, render_tab_pages};

pub mod classify;
pub mod domain;
pub mod error;
pub mod fs;
pub mod interaction;
pub mod notes;
pub mod render;
pub mod template;

pub use error::{Error, Result};

pub const PROJECTS_FILE: &str = "proyectos.json";
pub const NOTES_FILE: &str = "apuntes.json";
pub const DOCUMENTS_DIR: &str = "pdfs";
pub const SCRIPT_FILE: &str = "script.js";

#[derive(Parser, Debug)]
#[command(author, version, about = "Regenerate apuntes.json from the documents folder", long_about = None)]
pub struct UpdateNotesArgs {
    /// Folder holding one subfolder per note category
    #[arg(short, long, default_value = DOCUMENTS_DIR)]
    pub source_dir: PathBuf,

    /// Notes metadata file to overwrite
    #[arg(short, long, default_value = NOTES_FILE)]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the portfolio into a static site", long_about = None)]
pub struct SiteArgs {
    /// Folder holding proyectos.json, apuntes.json and the documents folder
    #[arg(short, long, default_value = ".")]
    pub site_dir: PathBuf,

    /// Path to the output directory
    #[arg(short, long, default_value = "public")]
    pub output_dir: PathBuf,

    /// Folder with the tera templates and style.css
    #[arg(short, long, default_value = "templates")]
    pub templates_dir: PathBuf,
}

/// Scans the documents folder and rewrites the notes file. Returns the number
/// of notes written. Nothing is written when the scan fails.
pub fn update_notes(source_dir: &Path, output: &Path) -> Result<usize> {
    let mut notes = collect_notes(source_dir)?;
    sort_notes(&mut notes);
    write_notes(output, &notes)?;

    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());
    log::info!("Successfully generated {} with {} notes.", name, notes.len());
    Ok(notes.len())
}

pub fn build_site(site_dir: &Path, output_dir: &Path, templates_dir: &Path) -> Result<()> {
    log::info!("Building site...");

    let tera = init_tera(templates_dir)?;
    let documents = site_dir.join(DOCUMENTS_DIR);
    prepare_output_dir(output_dir, site_dir, &[documents.as_path(), templates_dir])?;

    let projects_path = site_dir.join(PROJECTS_FILE);
    let projects = load_projects(&projects_path).unwrap_or_else(|e| {
        log::error!("Error loading projects: {e}");
        Vec::new()
    });
    let projects_html = render_projects(&tera, &projects)?;

    let notes_path = site_dir.join(NOTES_FILE);
    let notes = match load_notes(&notes_path) {
        Ok(notes) => NotesState::Loaded(NotesTable::new(notes)),
        Err(e) => {
            log::error!("Error loading notes: {e}");
            NotesState::Failed
        }
    };

    render_tab_pages(&tera, output_dir, &projects_html, &notes)?;

    process_asset(&templates_dir.join("style.css"), &output_dir.join("style.css"))?;
    let script_path = output_dir.join(SCRIPT_FILE);
    std::fs::write(&script_path, render_script(&tera)?).map_err(|e| Error::io(&script_path, e))?;
    for data_file in [PROJECTS_FILE, NOTES_FILE] {
        let path = site_dir.join(data_file);
        if path.is_file() {
            process_asset(&path, &output_dir.join(data_file))?;
        }
    }
    if documents.is_dir() {
        let copied = copy_tree(&documents, &output_dir.join(DOCUMENTS_DIR))?;
        log::info!("Copied {} documents", copied);
    }

    log::info!("Site built successfully.");
    Ok(())
}
