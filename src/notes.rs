use std::fs;
use std::path::Path;
use std::time::SystemTime;
use chrono::{DateTime, Datelike, Local};
use crate::classify::{resolve, subject_rank, RULES};
use crate::domain::{Category, Extension, NO_SUBJECT, Note};
use crate::error::{Error, Result};
use crate::fs::{files_recursively, read_link_target, slash_relative};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Short Spanish month with its first letter capitalised, then the year: `Ene 2024`.
pub fn format_month_year<D: Datelike>(date: &D) -> String {
    let month = MONTHS_ES[date.month0() as usize];
    let mut chars = month.chars();
    let capitalised = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} {}", capitalised, date.year())
}

fn format_mtime(mtime: SystemTime) -> String {
    let local: DateTime<Local> = mtime.into();
    format_month_year(&local)
}

pub fn title_from_file_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default()
}

/// Matches on the lowercased file name suffix, so a bare `.pdf` counts too.
fn registered_extension(path: &Path) -> Option<Extension> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    let (_, ext) = name.rsplit_once('.')?;
    Extension::from_file_ext(ext)
}

/// Builds the record for one document. `source_dir` is the root holding the
/// category folders; its own folder name prefixes the record's `file`.
pub fn build_note(category: Category, path: &Path, source_dir: &Path) -> Result<Option<Note>> {
    let Some(mut extension) = registered_extension(path) else {
        return Ok(None);
    };

    let relative = slash_relative(path, source_dir).unwrap_or_else(|| {
        path.to_string_lossy().replace('\\', "/")
    });
    let lower_path = relative.to_lowercase();
    let mut file = match source_dir.file_name() {
        Some(root) => format!("{}/{}", root.to_string_lossy(), relative),
        None => relative.clone(),
    };

    if extension == Extension::Txt {
        match read_link_target(path) {
            Ok(Some(url)) => {
                file = url;
                extension = Extension::Link;
            }
            Ok(None) => log::debug!("{} does not start with a URL", path.display()),
            Err(e) => log::warn!("Error reading link file {}: {e}", path.display()),
        }
    }

    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    let mtime = metadata.modified().map_err(|e| Error::io(path, e))?;

    let overrides = resolve(RULES, category, &lower_path);

    Ok(Some(Note {
        category,
        category_display: overrides
            .category_display
            .unwrap_or(category.label())
            .to_string(),
        tag_class: category.tag_class().to_string(),
        asignatura: overrides.asignatura.unwrap_or(NO_SUBJECT).to_string(),
        title: title_from_file_name(path),
        note_type: category.note_type(),
        date: format_mtime(mtime),
        file,
        extension,
    }))
}

pub fn collect_notes(source_dir: &Path) -> Result<Vec<Note>> {
    if !source_dir.is_dir() {
        return Err(Error::MissingSourceDir(source_dir.to_path_buf()));
    }

    let mut notes = Vec::new();
    for category in Category::ALL {
        let category_dir = source_dir.join(category.dir_name());
        if !category_dir.is_dir() {
            log::debug!("Skipping missing category folder: {}", category_dir.display());
            continue;
        }

        for path in files_recursively(&category_dir)? {
            if let Some(note) = build_note(category, &path, source_dir)? {
                log::debug!("Registered note: {}", note.file);
                notes.push(note);
            }
        }
    }
    Ok(notes)
}

/// Priority subjects first, in list order; everything else keeps its order.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by_key(|note| subject_rank(&note.asignatura));
}

pub fn write_notes(output: &Path, notes: &[Note]) -> Result<()> {
    let json = serde_json::to_string_pretty(notes)?;
    fs::write(output, json).map_err(|e| Error::io(output, e))?;
    Ok(())
}
