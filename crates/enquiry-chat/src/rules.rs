//! Keyword rule tables for query classification and course selection.
//!
//! All matching is substring containment against the lowercased query. There
//! is no tokenization, so short keywords such as `be` or `ai` also match
//! inside longer words. Table order is significant everywhere: the first
//! matching entry wins.

use crate::types::Category;

// =============================================================================
// Category keyword sets
// =============================================================================

pub const TRANSPORT_KEYWORDS: &[&str] = &["bus", "transport", "route", "timing", "incharge"];

pub const DIPLOMA_KEYWORDS: &[&str] = &[
    "diploma",
    "diplomo",
    "diplamo",
    "dipamo",
    "dplamo",
    "polytechnic",
];

pub const ENGINEERING_KEYWORDS: &[&str] = &[
    "engineering",
    "engg",
    "engieering",
    "b.e",
    "be",
    "btech",
    "b.tech",
    "ug course",
];

pub const MEDICAL_KEYWORDS: &[&str] = &[
    "medical",
    "pharmacy",
    "nursing",
    "physiotherapy",
    "siddha",
    "homoeopathy",
    "naturopathy",
    "ayush",
];

/// Medical keywords that select the whole category, never a single course.
pub const MEDICAL_GENERIC_KEYWORDS: &[&str] = &["medical", "ayush"];

pub const PLACEMENT_KEYWORDS: &[&str] = &["placement", "recruiter", "company", "job", "placed"];

pub const CAMPUS_KEYWORDS: &[&str] = &[
    "campus",
    "institutions",
    "colleges list",
    "technical",
    "medical campus",
];

pub const GENERAL_KEYWORDS: &[&str] = &[
    "address", "contact", "phone", "email", "vision", "mission", "location", "map", "group",
];

pub const PHOTO_KEYWORDS: &[&str] = &["photo", "pic", "image", "view"];

// =============================================================================
// Transport sub-rules
// =============================================================================

/// Words asking for the whole timetable.
pub const ROUTE_LISTING_MARKERS: &[&str] = &["what", "list", "all"];

/// A `route` query heading somewhere ("route to ...") asks for one specific
/// route, so it is looked up rather than listed.
pub const ROUTE_DESTINATION_MARKERS: &[&str] = &[" to "];

// =============================================================================
// Category rule table
// =============================================================================

/// A category and the keywords that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    pub fn matches(&self, query: &str) -> bool {
        contains_any(query, self.keywords)
    }
}

/// Classification order. Photo is last so any informational keyword beats it.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule { category: Category::Transport, keywords: TRANSPORT_KEYWORDS },
    CategoryRule { category: Category::DiplomaCourses, keywords: DIPLOMA_KEYWORDS },
    CategoryRule { category: Category::EngineeringCourses, keywords: ENGINEERING_KEYWORDS },
    CategoryRule { category: Category::MedicalCourses, keywords: MEDICAL_KEYWORDS },
    CategoryRule { category: Category::Placements, keywords: PLACEMENT_KEYWORDS },
    CategoryRule { category: Category::CampusList, keywords: CAMPUS_KEYWORDS },
    CategoryRule { category: Category::GeneralInfo, keywords: GENERAL_KEYWORDS },
    CategoryRule { category: Category::Photo, keywords: PHOTO_KEYWORDS },
];

/// Classify an already-lowercased query.
pub fn classify(query: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(query))
        .map(|rule| rule.category)
        .unwrap_or(Category::Fallback)
}

pub fn contains_any(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| query.contains(kw))
}

// =============================================================================
// Discipline rules
// =============================================================================

/// Narrows a course query to one catalog entry.
///
/// A course is selected when it contains `marker` verbatim (case-sensitive,
/// for abbreviations spelled out or parenthesised in the catalog), or when its
/// lowercased name contains `keyword`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisciplineRule {
    pub keyword: &'static str,
    pub marker: Option<&'static str>,
}

impl DisciplineRule {
    const fn plain(keyword: &'static str) -> Self {
        Self { keyword, marker: None }
    }

    const fn marked(keyword: &'static str, marker: &'static str) -> Self {
        Self { keyword, marker: Some(marker) }
    }

    pub fn selects(&self, course: &str) -> bool {
        if let Some(marker) = self.marker {
            if course.contains(marker) {
                return true;
            }
        }
        course.to_lowercase().contains(self.keyword)
    }
}

/// Diploma disciplines. The trailing entries are disciplines the polytechnic
/// does not offer; naming one yields "not available" instead of the full list.
pub const DIPLOMA_DISCIPLINES: &[DisciplineRule] = &[
    DisciplineRule::marked("cse", "Computer Science"),
    DisciplineRule::plain("computer"),
    DisciplineRule::plain("mechanical"),
    DisciplineRule::plain("civil"),
    DisciplineRule::marked("ece", "Electronics and Communication"),
    DisciplineRule::marked("eee", "(EEE)"),
    DisciplineRule::plain("electrical"),
    DisciplineRule::plain("electronics"),
    DisciplineRule::plain("automobile"),
    DisciplineRule::marked("mlt", "(MLT)"),
    DisciplineRule::plain("medical lab"),
    DisciplineRule::plain("aeronautical"),
    DisciplineRule::plain("aerospace"),
    DisciplineRule::plain("biomedical"),
    DisciplineRule::plain("agriculture"),
    DisciplineRule::plain("petrochemical"),
    DisciplineRule::plain("chemical"),
    DisciplineRule::plain("marine"),
];

pub const ENGINEERING_DISCIPLINES: &[DisciplineRule] = &[
    DisciplineRule::marked("cse", "Computer Science"),
    DisciplineRule::plain("computer"),
    DisciplineRule::plain("mechanical"),
    DisciplineRule::plain("civil"),
    DisciplineRule::marked("ece", "Electronics and Communication"),
    DisciplineRule::marked("eee", "Electrical and Electronics"),
    DisciplineRule::plain("electrical"),
    DisciplineRule::plain("electronics"),
    DisciplineRule::marked("ai", "Artificial Intelligence"),
    DisciplineRule::marked("ds", "Data Science"),
    DisciplineRule::marked("ml", "Machine Learning"),
    DisciplineRule::marked("it", "Information Technology"),
    DisciplineRule::plain("information"),
    DisciplineRule::plain("biomedical"),
    DisciplineRule::plain("aeronautical"),
    DisciplineRule::plain("agriculture"),
    DisciplineRule::plain("safety"),
    DisciplineRule::plain("fire"),
    DisciplineRule::plain("food"),
    DisciplineRule::plain("petrochemical"),
    DisciplineRule::plain("business"),
    DisciplineRule::plain("aerospace"),
    DisciplineRule::plain("marine"),
];

pub const MEDICAL_DISCIPLINES: &[DisciplineRule] = &[
    DisciplineRule::plain("pharmacy"),
    DisciplineRule::plain("nursing"),
    DisciplineRule::plain("physiotherapy"),
    DisciplineRule::plain("siddha"),
    DisciplineRule::plain("homoeopathy"),
    DisciplineRule::plain("naturopathy"),
];

/// Outcome of narrowing a course query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// No discipline keyword in the query.
    Unspecified,
    /// A discipline keyword matched this catalog entry.
    Available(&'a str),
    /// A discipline keyword was present but no entry matched it.
    Unavailable,
}

/// Pick the first discipline rule present in `query`, then the first course it selects.
pub fn select_course<'a>(
    query: &str,
    rules: &[DisciplineRule],
    catalog: &'a [String],
) -> Selection<'a> {
    let Some(rule) = rules.iter().find(|r| query.contains(r.keyword)) else {
        return Selection::Unspecified;
    };
    match catalog.iter().find(|c| rule.selects(c)) {
        Some(course) => Selection::Available(course.as_str()),
        None => Selection::Unavailable,
    }
}
