//! Front-end view flow for the terminal client.
//!
//! Enforces valid view transitions:
//! - Welcome -> Awakening (college selected, start enquiry)
//! - Awakening -> Chat (awakening sequence finished)
//! - Welcome | Chat -> Campus | Docs (overlay pages)
//! - Campus | Docs -> the view they were opened from

use std::fmt;

use enquiry_chat::types::{ChatMessage, Sender};
use enquiry_core::error::{EnquiryError, Result};
use enquiry_core::types::{CampusKind, Dataset};

/// Screen currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// College search and start button.
    Welcome,
    /// Scripted start-up sequence before the chat opens.
    Awakening,
    /// The conversation itself.
    Chat,
    /// Campus map and photo gallery.
    Campus,
    /// Project overview page.
    Docs,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Welcome => write!(f, "Welcome"),
            View::Awakening => write!(f, "Awakening"),
            View::Chat => write!(f, "Chat"),
            View::Campus => write!(f, "Campus"),
            View::Docs => write!(f, "Docs"),
        }
    }
}

impl View {
    /// Returns whether a transition from `self` to `target` is valid,
    /// ignoring college selection and the return view.
    pub fn can_transition_to(&self, target: &View) -> bool {
        matches!(
            (self, target),
            (View::Welcome, View::Awakening)
                | (View::Awakening, View::Chat)
                | (View::Welcome | View::Chat, View::Campus | View::Docs)
                | (View::Campus | View::Docs, View::Welcome | View::Chat)
        )
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, View::Campus | View::Docs)
    }
}

/// View state for one terminal session.
#[derive(Debug, Clone)]
pub struct ViewState {
    current: View,
    return_to: Option<View>,
    college_selected: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            current: View::Welcome,
            return_to: None,
            college_selected: false,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn college_selected(&self) -> bool {
        self.college_selected
    }

    pub fn select_college(&mut self) {
        self.college_selected = true;
    }

    /// Attempt to move to `target`.
    ///
    /// Leaving the welcome screen for the awakening or campus view needs a
    /// selected college. An overlay can only return to the view it was
    /// opened from.
    pub fn transition(&mut self, target: View) -> Result<()> {
        if !self.allowed(target) {
            return Err(EnquiryError::InvalidTransition {
                from: self.current.to_string(),
                to: target.to_string(),
            });
        }

        tracing::debug!("View: {} -> {}", self.current, target);
        if target.is_overlay() {
            // Switching between overlays keeps the first return view.
            if !self.current.is_overlay() {
                self.return_to = Some(self.current);
            }
        } else {
            self.return_to = None;
        }
        self.current = target;
        Ok(())
    }

    /// Close an overlay page. Returns the view now shown.
    pub fn back(&mut self) -> Result<View> {
        match self.return_to {
            Some(view) if self.current.is_overlay() => {
                self.transition(view)?;
                Ok(view)
            }
            _ => Err(EnquiryError::InvalidTransition {
                from: self.current.to_string(),
                to: "previous view".to_string(),
            }),
        }
    }

    fn allowed(&self, target: View) -> bool {
        // Overlays may also switch to each other.
        let overlay_swap = self.current.is_overlay() && target.is_overlay() && self.current != target;
        if !self.current.can_transition_to(&target) && !overlay_swap {
            return false;
        }
        let origin = if self.current.is_overlay() {
            self.return_to
        } else {
            Some(self.current)
        };
        match target {
            View::Awakening | View::Campus if origin == Some(View::Welcome) => self.college_selected,
            _ if self.current.is_overlay() && !target.is_overlay() => self.return_to == Some(target),
            _ => true,
        }
    }
}

// =============================================================================
// College search
// =============================================================================

/// Search box on the welcome screen.
#[derive(Debug, Clone)]
pub struct CollegeSearch {
    aliases: Vec<String>,
}

impl CollegeSearch {
    pub fn new(aliases: &[String]) -> Self {
        Self {
            aliases: aliases.iter().map(|a| a.to_lowercase()).collect(),
        }
    }

    /// Whether the institution should be offered for this search text.
    pub fn matches(&self, search: &str) -> bool {
        let search = search.to_lowercase();
        let search = search.trim();
        !search.is_empty() && self.aliases.iter().any(|a| search.contains(a.as_str()))
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Lines printed for one chat message.
pub fn render_message(message: &ChatMessage) -> Vec<String> {
    let prefix = match message.sender {
        Sender::Bot => "bot",
        Sender::User => "you",
    };
    let mut lines: Vec<String> = message
        .text
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("[{}] {}: {}", message.time_label(), prefix, line)
            } else {
                format!("    {}", line)
            }
        })
        .collect();
    if let Some(url) = &message.image {
        lines.push(format!("[image] {}", url));
    }
    lines
}

/// Campus page: layout map, campus names and the photo gallery.
pub fn render_campus(dataset: &Dataset) -> Vec<String> {
    let mut lines = vec![format!("{} campus", dataset.organization.name)];
    if let Some(map) = &dataset.layout_map {
        lines.push(format!("[map] {}", map));
    }
    for kind in [CampusKind::Technical, CampusKind::Medical] {
        let names = dataset.campuses_of(kind);
        if names.is_empty() {
            continue;
        }
        lines.push(format!("{}:", kind.heading()));
        lines.extend(names.iter().map(|n| format!("- {}", n)));
    }
    lines.extend(dataset.campus_images.iter().map(|url| format!("[image] {}", url)));
    lines
}

/// Docs page: what the bot is and what it can answer.
pub fn render_docs(dataset: &Dataset) -> Vec<String> {
    vec![
        "Project overview".to_string(),
        format!(
            "The official enquiry bot for {} answers student questions instantly.",
            dataset.organization.name
        ),
        "Topics: courses (diploma, engineering, medical), bus routes, placements, campuses, \
         contact details, and campus photos."
            .to_string(),
        "Answers come only from the college data loaded at start-up.".to_string(),
    ]
}

pub const HELP: &[(&str, &str)] = &[
    ("/quick <label>", "send a quick action (see below)"),
    ("/campus", "open the campus page"),
    ("/docs", "open the project overview"),
    ("/back", "close the campus or docs page"),
    ("/voice", "mute or unmute spoken replies"),
    ("/clear", "clear the conversation"),
    ("/help", "show this help"),
    ("/quit", "exit"),
];

// =============================================================================
// Tests
// =============================================================================
