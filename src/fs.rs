use std::fs;
use std::path::{Path, PathBuf};
use regex::Regex;
use std::sync::OnceLock;
use walkdir::WalkDir;
use crate::error::{Error, Result};

/// Absolute form of `path`, resolving symlinks through its nearest existing
/// ancestor so paths that do not exist yet still compare correctly.
fn resolve(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return std::env::current_dir()
            .and_then(|dir| dir.canonicalize())
            .map_err(|e| Error::io(path, e));
    }
    if let Ok(resolved) = path.canonicalize() {
        return Ok(resolved);
    }
    let name = path
        .file_name()
        .ok_or_else(|| Error::io(path, std::io::Error::other("Failed to resolve path")))?;
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(resolve(parent)?.join(name))
}

/// Cleans and recreates `output_dir`. Refuses when it would hold `site_dir`,
/// or overlap any of `source_dirs` in either direction.
pub fn prepare_output_dir(output_dir: &Path, site_dir: &Path, source_dirs: &[&Path]) -> Result<()> {
    let output_abs = resolve(output_dir)?;
    if resolve(site_dir)?.starts_with(&output_abs) {
        return Err(Error::UnsafeOutputDir(output_dir.to_path_buf()));
    }
    for source in source_dirs {
        let source_abs = resolve(source)?;
        if source_abs.starts_with(&output_abs) || output_abs.starts_with(&source_abs) {
            return Err(Error::UnsafeOutputDir(output_dir.to_path_buf()));
        }
    }

    if output_dir.exists() {
        log::info!("Cleaning output directory: {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;
    }
    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;
    Ok(())
}

pub fn process_asset(path: &Path, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    log::debug!("Copying asset: {} -> {}", path.display(), output_path.display());
    fs::copy(path, output_path).map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Mirrors every file under `src_dir` into `dest_dir`.
pub fn copy_tree(src_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(src_dir).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry.path().strip_prefix(src_dir).map_err(|_e| {
            Error::io(
                entry.path(),
                std::io::Error::other("Failed to compute relative path"),
            )
        })?;
        process_asset(entry.path(), &dest_dir.join(relative))?;
        copied += 1;
    }
    Ok(copied)
}

/// Every regular file under `dir`, depth first, siblings in file-name order.
pub fn files_recursively(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn url_pattern() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("valid URL pattern"))
}

/// Interprets the first line of a link file as a URL, forgiving one trailing
/// period. Returns `None` when the line is not an http(s) URL.
pub fn parse_link_line(content: &str) -> Option<String> {
    let line = content.lines().next()?.trim().trim_start_matches('\u{feff}');
    let line = line.strip_suffix('.').unwrap_or(line);
    url_pattern().is_match(line).then(|| line.to_string())
}

pub fn read_link_target(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_link_line(&content))
}

/// `path` relative to `base`, always with `/` separators.
pub fn slash_relative(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
