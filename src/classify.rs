use crate::domain::Category;

/// Fields a path rule can override on a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub asignatura: Option<&'static str>,
    pub category_display: Option<&'static str>,
}

/// A rule fires when the note is in `category` and every needle occurs in the
/// lowercased, `/`-separated path of the note relative to the source root.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub all_of: &'static [&'static str],
    pub overrides: Overrides,
}

impl Rule {
    pub fn matches(&self, category: Category, lower_path: &str) -> bool {
        self.category == category && self.all_of.iter().all(|needle| lower_path.contains(needle))
    }
}

const fn subject(
    category: Category,
    all_of: &'static [&'static str],
    asignatura: &'static str,
) -> Rule {
    Rule {
        category,
        all_of,
        overrides: Overrides {
            asignatura: Some(asignatura),
            category_display: None,
        },
    }
}

/// Ordered by priority: for each field the first matching rule that sets it wins.
pub const RULES: &[Rule] = &[
    Rule {
        category: Category::Equipos,
        all_of: &["equipos/agiles"],
        overrides: Overrides {
            asignatura: Some("GPS"),
            category_display: Some("Metodologías Ágiles"),
        },
    },
    Rule {
        category: Category::Equipos,
        all_of: &["equipos/tradicionales"],
        overrides: Overrides {
            asignatura: None,
            category_display: Some("Metodologías Tradicionales"),
        },
    },
    subject(
        Category::Equipos,
        &["equipos/tradicionales", "la biblia de modelado de software"],
        "MS",
    ),
    subject(Category::Equipos, &["equipos/tradicionales", "la biblia de is1"], "IS1"),
    subject(Category::Equipos, &["equipos/tradicionales", "la biblia de is2"], "IS2"),
    subject(Category::Empresas, &["empresas/tcge"], "TCGE"),
    subject(Category::Algoritmos, &["algoritmos/fal"], "FAL"),
];

/// Folds `rules` over a note's path, keeping the first value seen per field.
pub fn resolve(rules: &[Rule], category: Category, lower_path: &str) -> Overrides {
    rules
        .iter()
        .filter(|rule| rule.matches(category, lower_path))
        .fold(Overrides::default(), |acc, rule| Overrides {
            asignatura: acc.asignatura.or(rule.overrides.asignatura),
            category_display: acc.category_display.or(rule.overrides.category_display),
        })
}

/// Subjects listed first in the notes table, in this order.
pub const SUBJECT_PRIORITY: &[&str] = &["GPS", "MS", "IS2", "IS1"];

pub fn subject_rank(asignatura: &str) -> usize {
    SUBJECT_PRIORITY
        .iter()
        .position(|s| *s == asignatura)
        .unwrap_or(SUBJECT_PRIORITY.len())
}
