//! Query resolver: free text in, canned answer out.
//!
//! [`QueryResolver::resolve`] is total over all strings. It never fails and
//! never touches shared state; the photo rotation cursor is passed in and the
//! updated cursor is handed back.

use std::sync::Arc;

use enquiry_core::types::{BusRoute, CampusKind, CourseCategory, Dataset, PhotoCursor};
use tracing::debug;

use crate::response;
use crate::rules::{self, DisciplineRule, Selection};
use crate::types::{Category, ResolutionResult};

/// Rule-based resolver over one immutable dataset.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    dataset: Arc<Dataset>,
}

impl QueryResolver {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Category a query falls into. Case-insensitive.
    pub fn classify(&self, query: &str) -> Category {
        rules::classify(&query.to_lowercase())
    }

    /// Resolve a query against the dataset.
    ///
    /// Only a photo answer moves the cursor: it shows the image at the
    /// current position and returns the cursor advanced by one.
    pub fn resolve(&self, query: &str, cursor: PhotoCursor) -> (ResolutionResult, PhotoCursor) {
        let q = query.to_lowercase();
        let category = rules::classify(&q);
        debug!(%category, query_len = query.len(), "Query classified");

        let result = match category {
            Category::Transport => self.transport(&q),
            Category::DiplomaCourses => {
                self.courses(&q, CourseCategory::Polytechnic, rules::DIPLOMA_DISCIPLINES)
            }
            Category::EngineeringCourses => {
                self.courses(&q, CourseCategory::EngineeringUg, rules::ENGINEERING_DISCIPLINES)
            }
            Category::MedicalCourses => {
                self.courses(&q, CourseCategory::Medical, rules::MEDICAL_DISCIPLINES)
            }
            Category::Placements => self.placements(&q),
            Category::CampusList => self.campuses(&q),
            Category::GeneralInfo => self.general(&q),
            Category::Photo => return self.photo(cursor),
            Category::Fallback => ResolutionResult::text(response::FALLBACK),
        };
        (result, cursor)
    }

    // -----------------------------------------------------------------
    // Branches
    // -----------------------------------------------------------------

    fn transport(&self, q: &str) -> ResolutionResult {
        let routes = &self.dataset.routes;
        let names_route = routes.iter().any(|r| names(r, q));
        let wants_listing = rules::contains_any(q, rules::ROUTE_LISTING_MARKERS)
            || (q.contains("route")
                && !names_route
                && !rules::contains_any(q, rules::ROUTE_DESTINATION_MARKERS));

        if wants_listing {
            return ResolutionResult::text(response::route_list(routes));
        }

        match find_route(routes, q) {
            Some(r) => ResolutionResult::text(response::route_line(r)),
            None => ResolutionResult::text(response::ROUTE_NOT_FOUND),
        }
    }

    fn courses(
        &self,
        q: &str,
        category: CourseCategory,
        disciplines: &[DisciplineRule],
    ) -> ResolutionResult {
        let catalog = self.dataset.courses.courses(category);
        match rules::select_course(q, disciplines, catalog) {
            Selection::Available(course) => ResolutionResult::text(response::course_available(course)),
            Selection::Unavailable => ResolutionResult::text(response::COURSE_NOT_AVAILABLE),
            Selection::Unspecified => ResolutionResult::text(response::course_list(catalog)),
        }
    }

    fn placements(&self, q: &str) -> ResolutionResult {
        let p = &self.dataset.placements;
        let text = if q.contains("how many") || q.contains("total") {
            p.total.clone()
        } else if q.contains("officer") {
            response::placement_officer(p)
        } else if q.contains("it company") {
            p.it_recruiters.join("\n")
        } else if q.contains("core company") {
            p.core_companies.join("\n")
        } else {
            response::placement_summary(p)
        };
        ResolutionResult::text(text)
    }

    fn campuses(&self, q: &str) -> ResolutionResult {
        let text = if q.contains("technical") {
            response::campus_list(&self.dataset, CampusKind::Technical)
        } else if q.contains("medical") {
            response::campus_list(&self.dataset, CampusKind::Medical)
        } else {
            response::campus_overview(&self.dataset)
        };
        ResolutionResult::text(text)
    }

    fn general(&self, q: &str) -> ResolutionResult {
        let org = &self.dataset.organization;
        let text = if q.contains("address") {
            org.address.clone()
        } else if q.contains("contact") || q.contains("phone") {
            org.contact.clone()
        } else if q.contains("vision") {
            org.vision.clone()
        } else if q.contains("mission") {
            org.mission.clone()
        } else if q.contains("email") {
            org.email.clone()
        } else {
            response::contact_block(org)
        };
        ResolutionResult::text(text)
    }

    fn photo(&self, cursor: PhotoCursor) -> (ResolutionResult, PhotoCursor) {
        let images = &self.dataset.campus_images;
        let image = cursor
            .position(images.len())
            .map(|pos| images[pos].clone());
        let next = cursor.advanced(images.len());
        debug!(from = cursor.index(), to = next.index(), "Photo cursor advanced");
        (ResolutionResult::with_image(response::PHOTO_CAPTION, image), next)
    }
}

/// Whether the query mentions the route by name. A blank name never matches.
fn names(route: &BusRoute, q: &str) -> bool {
    !route.route.trim().is_empty() && q.contains(&route.route.to_lowercase())
}

/// First route named in the query, by route name or by (positive) number.
fn find_route<'a>(routes: &'a [BusRoute], q: &str) -> Option<&'a BusRoute> {
    routes
        .iter()
        .find(|r| names(r, q) || (r.num > 0 && q.contains(&r.num.to_string())))
}
