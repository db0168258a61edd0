use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Which family of campuses a [`CampusGroup`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampusKind {
    /// Engineering, arts and science, polytechnic, education, sports.
    Technical,
    /// Health science colleges.
    Medical,
}

impl CampusKind {
    /// Heading used when both groups are listed together.
    pub fn heading(&self) -> &'static str {
        match self {
            CampusKind::Technical => "Technical Campus",
            CampusKind::Medical => "Medical Campus",
        }
    }
}

/// Course catalog key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseCategory {
    Polytechnic,
    EngineeringUg,
    Medical,
}

// =============================================================================
// Reference data
// =============================================================================

/// The institution itself. One instance per dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub address: String,
    /// Contact phone number, stored as display text.
    pub contact: String,
    pub email: String,
    pub vision: String,
    pub mission: String,
}

/// A tagged list of campus names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampusGroup {
    pub kind: CampusKind,
    pub campuses: Vec<String>,
}

/// Ordered course lists. Order is display order and first-match order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseCatalog {
    #[serde(default)]
    pub polytechnic: Vec<String>,
    #[serde(default)]
    pub engineering_ug: Vec<String>,
    #[serde(default)]
    pub medical: Vec<String>,
}

impl CourseCatalog {
    /// Courses for one category, in catalog order.
    pub fn courses(&self, category: CourseCategory) -> &[String] {
        match category {
            CourseCategory::Polytechnic => &self.polytechnic,
            CourseCategory::EngineeringUg => &self.engineering_ug,
            CourseCategory::Medical => &self.medical,
        }
    }
}

/// A college bus route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusRoute {
    /// Route number. Only positive numbers take part in number matching.
    pub num: u32,
    /// Route name, e.g. "Gobi via Nambiyur".
    pub route: String,
    /// Morning pick-up times, free text.
    pub morning: String,
    /// Evening drop times, free text.
    pub evening: String,
    /// Name of the staff member in charge of the bus.
    pub incharge: String,
}

/// Placement cell contact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementOfficer {
    pub name: String,
    pub email: String,
}

/// Placement statistics and recruiters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementInfo {
    /// Summary line, e.g. "850+ students placed."
    pub total: String,
    pub officer: PlacementOfficer,
    #[serde(default)]
    pub it_recruiters: Vec<String>,
    #[serde(default)]
    pub core_companies: Vec<String>,
}

/// Everything the resolver answers from.
///
/// Constructed once per session and never mutated. Deserializes from TOML or
/// JSON; see [`Dataset::load`](crate::dataset).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub organization: Organization,
    #[serde(default)]
    pub campuses: Vec<CampusGroup>,
    #[serde(default)]
    pub courses: CourseCatalog,
    #[serde(default)]
    pub routes: Vec<BusRoute>,
    pub placements: PlacementInfo,
    /// Campus photo URLs, shown one per photo request in rotation.
    #[serde(default)]
    pub campus_images: Vec<String>,
    /// Campus layout map shown on the campus view. Not part of the rotation.
    #[serde(default)]
    pub layout_map: Option<String>,
}

impl Dataset {
    /// All campus names of one kind, across every group of that kind, in order.
    pub fn campuses_of(&self, kind: CampusKind) -> Vec<&str> {
        self.campuses
            .iter()
            .filter(|g| g.kind == kind)
            .flat_map(|g| g.campuses.iter().map(String::as_str))
            .collect()
    }
}

// =============================================================================
// Rotation cursor
// =============================================================================

/// Index into [`Dataset::campus_images`] for the next photo response.
///
/// Owned by the caller and threaded through the resolver. Starts at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoCursor(usize);

impl PhotoCursor {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// The position to display for a sequence of `len` images.
    ///
    /// Wraps a cursor that was saved against a longer sequence. `None` when
    /// there are no images.
    pub fn position(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.0 % len)
        }
    }

    /// The cursor after showing one image out of `len`.
    pub fn advanced(&self, len: usize) -> Self {
        match self.position(len) {
            Some(pos) => Self((pos + 1) % len),
            None => *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_default_is_zero() {
        assert_eq!(PhotoCursor::default().index(), 0);
    }

    #[test]
    fn test_cursor_advances_modulo_len() {
        let c = PhotoCursor::new(2);
        assert_eq!(c.advanced(4).index(), 3);
        assert_eq!(c.advanced(3).index(), 0);
    }

    #[test]
    fn test_cursor_position_wraps_stale_index() {
        let c = PhotoCursor::new(9);
        assert_eq!(c.position(4), Some(1));
        assert_eq!(c.advanced(4).index(), 2);
    }

    #[test]
    fn test_cursor_no_images() {
        let c = PhotoCursor::new(0);
        assert_eq!(c.position(0), None);
        assert_eq!(c.advanced(0), c);
    }

    #[test]
    fn test_campus_kind_serde_snake_case() {
        let json = serde_json::to_string(&CampusKind::Technical).unwrap();
        assert_eq!(json, "\"technical\"");
        let kind: CampusKind = serde_json::from_str("\"medical\"").unwrap();
        assert_eq!(kind, CampusKind::Medical);
    }

    #[test]
    fn test_catalog_courses_by_category() {
        let catalog = CourseCatalog {
            polytechnic: vec!["Diploma in Civil Engineering".into()],
            engineering_ug: vec![],
            medical: vec!["Nursing".into(), "Pharmacy".into()],
        };
        assert_eq!(catalog.courses(CourseCategory::Polytechnic).len(), 1);
        assert!(catalog.courses(CourseCategory::EngineeringUg).is_empty());
        assert_eq!(catalog.courses(CourseCategory::Medical)[1], "Pharmacy");
    }
}
