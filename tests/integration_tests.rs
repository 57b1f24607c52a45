use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use serde_json::Value;
use tempfile::tempdir;

/// Run the notes generator in a specific directory
fn run_update_notes(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_update-notes"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute update-notes")
}

/// Run the site builder in a specific directory
fn run_portfolio(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_portfolio"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute portfolio")
}

fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

fn stderr_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn touch(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_notes(dir: &Path) -> Vec<Value> {
    let content = fs::read_to_string(dir.join("apuntes.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// =============================================================================
// UPDATE-NOTES TESTS
// =============================================================================

#[test]
fn test_update_notes_fails_without_pdfs_dir() {
    let dir = tempdir().unwrap();

    let output = run_update_notes(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("not found"));
    assert!(!dir.path().join("apuntes.json").exists());
}

#[test]
fn test_update_notes_registers_documents_and_links() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "pdfs/algoritmos/fal/tema_1-intro.pdf", "%PDF");
    touch(dir.path(), "pdfs/algoritmos/fal/codigo.zip", "PK");
    touch(dir.path(), "pdfs/algoritmos/fal/README.md", "# ignored");
    touch(dir.path(), "pdfs/empresas/tcge/repositorio.txt", "https://github.com/user/tcge.\n");
    touch(dir.path(), "pdfs/empresas/notas.txt", "sin enlace\n");

    let output = run_update_notes(dir.path(), &[]);
    assert!(output.status.success(), "update-notes should succeed: {}", stderr_str(&output));

    let notes = read_notes(dir.path());
    assert_eq!(notes.len(), 4);

    let intro = notes.iter().find(|n| n["title"] == "tema 1 intro").unwrap();
    assert_eq!(intro["file"], "pdfs/algoritmos/fal/tema_1-intro.pdf");
    assert_eq!(intro["asignatura"], "FAL");
    assert_eq!(intro["type"], "Ejercicios");
    assert_eq!(intro["extension"], "PDF");
    assert_eq!(intro["tagClass"], "tag-code");

    let repo = notes.iter().find(|n| n["title"] == "repositorio").unwrap();
    assert_eq!(repo["file"], "https://github.com/user/tcge");
    assert_eq!(repo["extension"], "LINK");
    assert_eq!(repo["asignatura"], "TCGE");

    let plain = notes.iter().find(|n| n["title"] == "notas").unwrap();
    assert_eq!(plain["file"], "pdfs/empresas/notas.txt");
    assert_eq!(plain["asignatura"], "-");
}

#[test]
fn test_update_notes_orders_priority_subjects_first() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "pdfs/algoritmos/fal/grafos.pdf", "");
    touch(dir.path(), "pdfs/equipos/tradicionales/La Biblia de IS1.pdf", "");
    touch(dir.path(), "pdfs/equipos/agiles/scrum.pdf", "");
    touch(dir.path(), "pdfs/equipos/tradicionales/La Biblia de Modelado de Software.pdf", "");

    let output = run_update_notes(dir.path(), &[]);
    assert!(output.status.success(), "update-notes should succeed: {}", stderr_str(&output));

    let subjects: Vec<String> = read_notes(dir.path())
        .iter()
        .map(|n| n["asignatura"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(subjects, vec!["GPS", "MS", "IS1", "FAL"]);
}

#[test]
fn test_update_notes_accepts_custom_paths() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "docs/equipos/agiles/kanban.pdf", "");

    let output = run_update_notes(dir.path(), &["--source-dir", "docs", "--output", "out.json"]);
    assert!(output.status.success(), "update-notes should succeed: {}", stderr_str(&output));

    let content = fs::read_to_string(dir.path().join("out.json")).unwrap();
    let notes: Vec<Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(notes[0]["file"], "docs/equipos/agiles/kanban.pdf");
    assert_eq!(notes[0]["categoryDisplay"], "Metodologías Ágiles");
}

// =============================================================================
// PORTFOLIO TESTS
// =============================================================================

#[test]
fn test_portfolio_renders_a_page_per_tab() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "pdfs/equipos/agiles/scrum.pdf", "%PDF");
    touch(
        dir.path(),
        "proyectos.json",
        r#"[{"title": "Quicksort", "description": "Artículo", "tags": ["C"], "link": "https://es.wikipedia.org/wiki/Quicksort"}]"#,
    );
    assert!(run_update_notes(dir.path(), &[]).status.success());

    let templates = templates_dir();
    let output = run_portfolio(dir.path(), &["--templates-dir", templates.to_str().unwrap()]);
    assert!(output.status.success(), "portfolio should succeed: {}", stderr_str(&output));

    let public = dir.path().join("public");
    for page in ["index.html", "apuntes-algoritmos.html", "apuntes-equipos.html", "apuntes-empresas.html"] {
        assert!(public.join(page).exists(), "missing {page}");
    }
    assert!(public.join("style.css").exists());
    assert!(public.join("apuntes.json").exists());
    assert!(public.join("pdfs/equipos/agiles/scrum.pdf").exists());

    let index = fs::read_to_string(public.join("index.html")).unwrap();
    assert!(index.contains("Ver en Wikipedia"));
    assert!(index.contains("scrum"));

    let empresas = fs::read_to_string(public.join("apuntes-empresas.html")).unwrap();
    assert!(empresas.contains("No hay apuntes en esta categoría."));
}

#[test]
fn test_portfolio_ships_menu_and_shadow_bindings() {
    let dir = tempdir().unwrap();

    let templates = templates_dir();
    let output = run_portfolio(dir.path(), &["--templates-dir", templates.to_str().unwrap()]);
    assert!(output.status.success(), "portfolio should succeed: {}", stderr_str(&output));

    let public = dir.path().join("public");
    for page in ["index.html", "apuntes-equipos.html"] {
        let html = fs::read_to_string(public.join(page)).unwrap();
        assert!(html.contains("<script src=\"script.js\" defer></script>"), "{page} lacks script");
        assert!(html.contains("class=\"mobile-menu-btn\""));
    }

    let script = fs::read_to_string(public.join("script.js")).unwrap();
    assert!(script.contains("document.querySelector('.mobile-menu-btn')"));
    assert!(script.contains("navMenu.classList.toggle('active', page.menuOpen)"));
    assert!(script.contains("navbar.classList.toggle('scrolled', page.headerShadow)"));
    assert!(script.contains("const HEADER_OFFSET = 70"));
    assert!(script.contains("const SHADOW_THRESHOLD = 50"));
}

#[test]
fn test_portfolio_refuses_documents_folder_as_output() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "pdfs/equipos/agiles/scrum.pdf", "%PDF");

    let templates = templates_dir();
    let output = run_portfolio(
        dir.path(),
        &["--output-dir", "pdfs", "--templates-dir", templates.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("Refusing to clean output directory"));
    assert!(dir.path().join("pdfs/equipos/agiles/scrum.pdf").exists());
}

#[test]
fn test_portfolio_survives_missing_data_files() {
    let dir = tempdir().unwrap();

    let templates = templates_dir();
    let output = run_portfolio(dir.path(), &["--templates-dir", templates.to_str().unwrap()]);
    assert!(output.status.success(), "portfolio should succeed: {}", stderr_str(&output));

    let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
    assert!(index.contains("Error cargando apuntes."));
    assert!(!index.contains("project-card"));
    assert!(stderr_str(&output).contains("Error loading projects"));
}
