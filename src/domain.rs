use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level folder a note lives under. Declaration order is the order the
/// generator visits them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Algoritmos,
    Equipos,
    Empresas,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Algoritmos, Category::Equipos, Category::Empresas];

    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Algoritmos => "algoritmos",
            Category::Equipos => "equipos",
            Category::Empresas => "empresas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Algoritmos => "Algoritmos",
            Category::Equipos => "Gestión Equipos",
            Category::Empresas => "Empresas",
        }
    }

    pub fn tag_class(self) -> &'static str {
        match self {
            Category::Algoritmos => "tag-code",
            Category::Equipos => "tag-management",
            Category::Empresas => "tag-business",
        }
    }

    pub fn note_type(self) -> NoteType {
        match self {
            Category::Algoritmos | Category::Empresas => NoteType::Ejercicios,
            Category::Equipos => NoteType::Apuntes,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    Apuntes,
    Ejercicios,
}

impl NoteType {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteType::Apuntes => "Apuntes",
            NoteType::Ejercicios => "Ejercicios",
        }
    }
}

/// Display token for the kind of document behind a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Extension {
    Pdf,
    Zip,
    Txt,
    Link,
}

impl Extension {
    /// Maps a lowercased file extension to its token. Only the extensions the
    /// generator registers are recognised.
    pub fn from_file_ext(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(Extension::Pdf),
            "zip" => Some(Extension::Zip),
            "txt" => Some(Extension::Txt),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Extension::Pdf => "PDF",
            Extension::Zip => "ZIP",
            Extension::Txt => "TXT",
            Extension::Link => "LINK",
        }
    }
}

pub const NO_SUBJECT: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub category: Category,
    pub category_display: String,
    pub tag_class: String,
    pub asignatura: String,
    pub title: String,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub date: String,
    pub file: String,
    pub extension: Extension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: String,
}
