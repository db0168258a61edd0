//! Dataset loading, saving and the built-in Excel Group fixture.
//!
//! Files ending in `.json` are read with `serde_json`; anything else is
//! treated as TOML.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EnquiryError, Result};
use crate::types::{
    BusRoute, CampusGroup, CampusKind, CourseCatalog, Dataset, Organization, PlacementInfo,
    PlacementOfficer,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn route(num: u32, name: &str, morning: &str, evening: &str, incharge: &str) -> BusRoute {
    BusRoute {
        num,
        route: name.to_string(),
        morning: morning.to_string(),
        evening: evening.to_string(),
        incharge: incharge.to_string(),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

impl Dataset {
    /// The dataset for Excel Group of Institutions, Komarapalayam.
    pub fn builtin() -> Self {
        Self {
            organization: Organization {
                name: "Excel Group of Institutions".to_string(),
                address: "NH-544, Salem-Coimbatore Highway, Komarapalayam, Namakkal District – 637303, Tamil Nadu, India".to_string(),
                contact: "9965523999".to_string(),
                email: "info@excelcolleges.com".to_string(),
                vision: "To educate and empower the aspiring young generation and mould ideal citizens.".to_string(),
                mission: "To create total personality development through knowledge, skill and technology.".to_string(),
            },
            campuses: vec![
                CampusGroup {
                    kind: CampusKind::Technical,
                    campuses: strings(&[
                        "Excel Engineering College",
                        "Excel College for Commerce & Science",
                        "Excel Polytechnic College & ITI",
                        "Excel College of Education",
                        "Excel Fitness & Sports Academy",
                    ]),
                },
                CampusGroup {
                    kind: CampusKind::Medical,
                    campuses: strings(&[
                        "Excel Homoeopathy Medical College",
                        "Excel Siddha Medical College & Research Centre",
                        "Excel Medical College for Naturopathy & Yoga",
                        "Excel College of Pharmacy",
                        "Excel Nursing College",
                        "Excel College of Physiotherapy",
                        "Excel College of Occupational Therapy",
                        "Excel Institute of Health Science",
                    ]),
                },
            ],
            courses: CourseCatalog {
                polytechnic: strings(&[
                    "Diploma in Computer Science Engineering",
                    "Diploma in Mechanical Engineering",
                    "Diploma in Civil Engineering",
                    "Diploma in Electronics and Communication Engineering",
                    "Diploma in Electrical and Electronics Engineering (EEE)",
                    "Diploma in Automobile Engineering",
                    "Diploma in Medical Laboratory Technology (MLT)",
                ]),
                engineering_ug: strings(&[
                    "B.E Civil Engineering",
                    "B.E Mechanical Engineering",
                    "B.E Computer Science Engineering",
                    "B.E Electrical and Electronics Engineering",
                    "B.E Electronics and Communication Engineering",
                    "B.Tech Artificial Intelligence & Data Science",
                    "B.Tech Artificial Intelligence & Machine Learning",
                    "B.Tech Information Technology",
                    "B.E Biomedical Engineering",
                    "B.E Aeronautical Engineering",
                    "B.E Agriculture Engineering",
                    "B.E Safety & Fire Engineering",
                    "B.Tech Food Technology",
                    "B.E Petrochemical Engineering",
                    "B.Tech Computer Science and Business Systems",
                ]),
                medical: strings(&[
                    "Homoeopathy",
                    "Siddha",
                    "Naturopathy & Yoga",
                    "Pharmacy",
                    "Nursing",
                    "Physiotherapy",
                    "Occupational Therapy",
                    "Allied Health Sciences",
                ]),
            },
            routes: vec![
                route(42, "Poonachi", "7:40 AM / 9:00 AM", "4:45 PM / 6:15 PM", "Periya Sami"),
                route(115, "Gobi via Nambiyur", "7:15 AM / 9:00 AM", "4:45 PM / 6:15 PM", "Arul Kumar"),
                route(84, "Pudhur", "7:40 AM / 9:00 AM", "4:45 PM / 6:00 PM", "Arun Kumar"),
                route(72, "Nerunjipettai", "8:00 AM / 9:00 AM", "4:45 PM / 6:00 PM", "Sathish"),
                route(54, "Gobi via Kavandapadi", "7:45 AM / 9:00 AM", "4:45 PM / 6:20 PM", "Thiyagu"),
                route(86, "Salem via Elampillai", "7:30 AM / 9:00 AM", "4:45 PM / 6:30 PM", "Ravi"),
                route(123, "Mettur", "7:30 AM / 9:00 AM", "4:45 PM / 7:30 PM", "Sakthi Kumar"),
                route(81, "Kannamoochi", "7:30 AM / 9:00 AM", "4:45 PM / 6:00 PM", "Murthi"),
            ],
            placements: PlacementInfo {
                total: "850+ students placed.".to_string(),
                officer: PlacementOfficer {
                    name: "Er. O. Obulakshmi B.E., M.E.".to_string(),
                    email: "placement@excelcolleges.com".to_string(),
                },
                it_recruiters: strings(&["TCS", "Infosys", "Wipro", "HCL", "Zoho"]),
                core_companies: strings(&[
                    "Hyundai Motors India",
                    "Sharda Motors Industries",
                    "Royal Enfield",
                    "Larsen & Toubro",
                    "Schneider Electric",
                    "TVS Training & Service",
                    "Sakthi Auto Components",
                    "Santhi Gears",
                ]),
            },
            campus_images: strings(&[
                "https://i.postimg.cc/2yCT33nQ/layout-image.jpg",
                "https://www.agarum.com/photos/1/1/15/205/c/l/07ca789bc30ba134509f463b4b3b80c3.jpg",
                "https://assets.allegiance-educare.com/colleges/1480678672acd2.jpg",
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS6h-Yr_I8hLLz6HAk7qtyEHkbffnAS4DaTRA&s",
            ]),
            layout_map: Some("https://i.postimg.cc/2yCT33nQ/layout-image.jpg".to_string()),
        }
    }

    /// Load a dataset from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset: Dataset = if is_json(path) {
            serde_json::from_str(&content).map_err(|e| EnquiryError::Dataset(e.to_string()))?
        } else {
            toml::from_str(&content).map_err(|e| EnquiryError::Dataset(e.to_string()))?
        };
        info!(
            path = %path.display(),
            organization = %dataset.organization.name,
            routes = dataset.routes.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Load from `path` when given, otherwise return [`Dataset::builtin`].
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                info!("Using built-in dataset");
                Ok(Self::builtin())
            }
        }
    }

    /// Write the dataset as TOML or JSON, chosen by file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        info!("Dataset saved to {}", path.display());
        Ok(())
    }

    /// Report anomalies that degrade answers without breaking them.
    ///
    /// Every issue is logged at `warn` and returned. An empty vector means
    /// the dataset is fully populated.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let lists: [(&str, usize); 8] = [
            ("courses.polytechnic", self.courses.polytechnic.len()),
            ("courses.engineering_ug", self.courses.engineering_ug.len()),
            ("courses.medical", self.courses.medical.len()),
            ("routes", self.routes.len()),
            ("placements.it_recruiters", self.placements.it_recruiters.len()),
            ("placements.core_companies", self.placements.core_companies.len()),
            ("campus_images", self.campus_images.len()),
            ("campuses", self.campuses.len()),
        ];
        for (name, len) in lists {
            if len == 0 {
                issues.push(format!("{name} is empty"));
            }
        }

        let mut seen = HashSet::new();
        for r in &self.routes {
            if r.route.trim().is_empty() {
                issues.push(format!("route {} has no name and cannot be matched by name", r.num));
            }
            if r.num == 0 {
                issues.push(format!("route '{}' has number 0 and cannot be matched by number", r.route));
            } else if !seen.insert(r.num) {
                issues.push(format!("route number {} is duplicated; the first entry wins", r.num));
            }
        }

        for issue in &issues {
            warn!(issue = %issue, "Dataset anomaly");
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CourseCategory;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_is_fully_populated() {
        let ds = Dataset::builtin();
        assert!(ds.validate().is_empty());
        assert_eq!(ds.organization.name, "Excel Group of Institutions");
        assert_eq!(ds.routes.len(), 8);
        assert_eq!(ds.campus_images.len(), 4);
    }

    #[test]
    fn test_builtin_catalog_order() {
        let ds = Dataset::builtin();
        let poly = ds.courses.courses(CourseCategory::Polytechnic);
        assert_eq!(poly[0], "Diploma in Computer Science Engineering");
        assert_eq!(poly.len(), 7);
        assert_eq!(ds.courses.engineering_ug.len(), 15);
        assert_eq!(ds.courses.medical.len(), 8);
    }

    #[test]
    fn test_builtin_campuses_by_kind() {
        let ds = Dataset::builtin();
        assert_eq!(ds.campuses_of(CampusKind::Technical).len(), 5);
        assert_eq!(ds.campuses_of(CampusKind::Medical)[0], "Excel Homoeopathy Medical College");
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.toml");
        let ds = Dataset::builtin();
        ds.save(&path).unwrap();
        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded, ds);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dataset.json");
        let ds = Dataset::builtin();
        ds.save(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.trim_start().starts_with('{'));
        assert_eq!(Dataset::load(&path).unwrap(), ds);
    }

    #[test]
    fn test_load_minimal_toml_defaults_lists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiny.toml");
        std::fs::write(
            &path,
            r#"
[organization]
name = "Tiny College"
address = "1 Main St"
contact = "000"
email = "a@b.c"
vision = "v"
mission = "m"

[placements]
total = "None yet."

[placements.officer]
name = "Nobody"
email = "n@b.c"
"#,
        )
        .unwrap();

        let ds = Dataset::load(&path).unwrap();
        assert_eq!(ds.organization.name, "Tiny College");
        assert!(ds.routes.is_empty());
        assert!(ds.courses.polytechnic.is_empty());
        assert!(ds.layout_map.is_none());
        assert!(!ds.validate().is_empty());
    }

    #[test]
    fn test_load_missing_organization_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "campus_images = []\n").unwrap();
        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, EnquiryError::Dataset(_)));
    }

    #[test]
    fn test_load_malformed_json_is_dataset_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ \"organization\": ").unwrap();
        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, EnquiryError::Dataset(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Dataset::load(Path::new("/nonexistent/dataset.toml")).unwrap_err();
        assert!(matches!(err, EnquiryError::Io(_)));
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        let ds = Dataset::load_or_builtin(None).unwrap();
        assert_eq!(ds, Dataset::builtin());
    }

    #[test]
    fn test_validate_flags_zero_and_duplicate_routes() {
        let mut ds = Dataset::builtin();
        ds.routes.push(route(0, "Depot", "-", "-", "-"));
        ds.routes.push(route(42, "Poonachi Express", "-", "-", "-"));
        let issues = ds.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("number 0"));
        assert!(issues[1].contains("42 is duplicated"));
    }

    #[test]
    fn test_validate_flags_unnamed_route() {
        let mut ds = Dataset::builtin();
        ds.routes.insert(0, route(9, "", "m", "e", "i"));
        let issues = ds.validate();
        assert_eq!(issues, vec!["route 9 has no name and cannot be matched by name"]);
    }
}
