//! Reply text for each answer shape.
//!
//! Everything here is a pure function of dataset records. Lists are joined
//! with `\n`; an empty list produces an empty body.

use enquiry_core::types::{BusRoute, CampusKind, Dataset, Organization, PlacementInfo};

pub const ROUTE_NOT_FOUND: &str = "This bus route is not available in the transport database.";
pub const COURSE_NOT_AVAILABLE: &str = "This course is not available in this category.";
pub const FALLBACK: &str =
    "Sorry, this information is not available. Please contact the college office.";
pub const PHOTO_CAPTION: &str = "Campus View";
pub const CHAT_CLEARED: &str = "Chat cleared. How can I help you today?";

/// Opening line of every conversation.
pub fn greeting(organization: &Organization) -> String {
    format!(
        "Official Enquiry Bot for {}. How can I help you today?",
        organization.name
    )
}

// =============================================================================
// Transport
// =============================================================================

pub fn route_line(r: &BusRoute) -> String {
    format!(
        "Bus {} – {} – {} – {} – Incharge: {}",
        r.num, r.route, r.morning, r.evening, r.incharge
    )
}

pub fn route_list(routes: &[BusRoute]) -> String {
    routes.iter().map(route_line).collect::<Vec<_>>().join("\n")
}

// =============================================================================
// Courses
// =============================================================================

pub fn course_available(course: &str) -> String {
    format!("Yes. {} is available.", course)
}

pub fn course_list(courses: &[String]) -> String {
    courses.join("\n")
}

// =============================================================================
// Placements
// =============================================================================

pub fn placement_officer(p: &PlacementInfo) -> String {
    format!("{}\nEmail: {}", p.officer.name, p.officer.email)
}

pub fn placement_summary(p: &PlacementInfo) -> String {
    format!(
        "Total: {}\nIT Recruiters: {}\nCore Companies: {}",
        p.total,
        p.it_recruiters.join(", "),
        p.core_companies.join(", ")
    )
}

// =============================================================================
// Campuses
// =============================================================================

pub fn campus_list(dataset: &Dataset, kind: CampusKind) -> String {
    dataset.campuses_of(kind).join("\n")
}

/// Both campus groups as bulleted blocks, technical first.
pub fn campus_overview(dataset: &Dataset) -> String {
    [CampusKind::Technical, CampusKind::Medical]
        .iter()
        .map(|kind| {
            let mut block = format!("{}:", kind.heading());
            for name in dataset.campuses_of(*kind) {
                block.push_str("\n- ");
                block.push_str(name);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// =============================================================================
// General
// =============================================================================

pub fn contact_block(org: &Organization) -> String {
    format!(
        "Address: {}\nPhone: {}\nEmail: {}",
        org.address, org.contact, org.email
    )
}
