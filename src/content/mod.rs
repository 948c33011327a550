//! Static portfolio content rendered by the section components.
//!
//! DESIGN
//! ======
//! Prose that differs per language is stored inline as [`Localized`] pairs
//! next to the record it belongs to, instead of in the UI string tables.
//! Proper nouns (companies, schools, tech names) are plain strings.


mod data;

pub use data::{EDUCATION, EXPERIENCE, PROJECTS, SKILL_CATEGORIES};

use crate::state::language::Language;

/// One string per site language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub fr: &'static str,
    pub en: &'static str,
}

impl Localized {
    #[must_use]
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Fr => self.fr,
            Language::En => self.en,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub id: &'static str,
    pub title: Localized,
    pub company: &'static str,
    pub period: Localized,
    pub location: &'static str,
    pub description: Localized,
    pub tags: &'static [&'static str],
    pub is_current: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub id: &'static str,
    pub school: &'static str,
    pub degree: Localized,
    pub period: &'static str,
    pub highlight: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
}

impl Skill {
    /// Level clamped to a valid percentage for bar widths.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: Localized,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectCategory {
    #[default]
    All,
    Web,
    School,
    Personal,
}

impl ProjectCategory {
    pub const FILTERS: [Self; 4] = [Self::All, Self::Web, Self::School, Self::Personal];

    #[must_use]
    pub fn label(self) -> Localized {
        match self {
            Self::All => Localized { fr: "Tous", en: "All" },
            Self::Web => Localized { fr: "Web", en: "Web" },
            Self::School => Localized { fr: "École 42", en: "School 42" },
            Self::Personal => Localized { fr: "Personnel", en: "Personal" },
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: Localized,
    pub url: Option<&'static str>,
    pub github: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
}

/// Projects shown under `filter`; `All` keeps every project.
#[must_use]
pub fn projects_in(filter: ProjectCategory) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| filter == ProjectCategory::All || p.category == filter)
        .collect()
}

/// Whole years elapsed between `start_year` and `current_year`.
#[must_use]
pub fn years_since(start_year: u32, current_year: u32) -> u32 {
    current_year.saturating_sub(start_year)
}

/// Calendar year on the rendering side.
pub fn current_year() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        const SECS_PER_YEAR: u64 = 31_556_952;
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        1970 + u32::try_from(secs / SECS_PER_YEAR).unwrap_or(0)
    }
}
