//! The résumé builder page: initial form markup plus the controller that
//! owns the surface and routes UI events to the entry manager, the
//! delegated removal handler, and the submission pipeline.

use tracing::{debug, error};

use crate::entries::{removal, EntryGroupManager, GroupKind};
use crate::events::UiEvent;
use crate::submit::{SubmissionPipeline, SubmitError, SubmitOutcome};
use crate::surface::{Element, Surface};

pub const FORM_ID: &str = "resumeBuilderForm";
/// Data attribute on the form element holding the submission target URL.
pub const ACTION_DATA_KEY: &str = "action";

/// Fixed, non-repeating controls, in render order.
const FIXED_FIELDS: &[&str] = &[
    "resume_name",
    "pi_full_name",
    "pi_email",
    "pi_phone",
    "pi_location",
    "pi_linkedin",
    "pi_github",
    "summary_text",
    "skills_text",
];

/// Builds the initial form: fixed fields, then one add button and one
/// (initially empty) container region per group kind.
pub fn build_resume_page(action: &str) -> Surface {
    let mut form = Element::with_id(FORM_ID).data(ACTION_DATA_KEY, action);
    for &name in FIXED_FIELDS {
        form = form.child(Element::new().control(name, ""));
    }
    for kind in GroupKind::ALL {
        form = form
            .child(Element::with_id(kind.add_button_id()))
            .child(Element::with_id(kind.container_id()));
    }
    Surface::new(form)
}

/// User-facing notice surfaced after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Navigate(String),
    Success(String),
    Failure(String),
}

pub struct PageController {
    surface: Surface,
    manager: EntryGroupManager,
    pipeline: SubmissionPipeline,
}

impl PageController {
    pub fn new(surface: Surface) -> Self {
        let manager = EntryGroupManager::new(&surface);
        PageController {
            surface,
            manager,
            pipeline: SubmissionPipeline::new(),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Routes one event. Click dispatch mirrors the page wiring: add
    /// buttons are bound by id and removal is delegated by marker class;
    /// everything else falls through. Only `Submit` yields a notice.
    pub async fn handle_event(&mut self, event: UiEvent) -> Option<Notice> {
        match event {
            UiEvent::Click { target } => {
                if let Some(kind) = GroupKind::from_add_button(&target) {
                    self.manager.add_group(&mut self.surface, kind);
                } else {
                    removal::handle_click(&mut self.surface, &target);
                }
                None
            }
            UiEvent::Input { name, value } => {
                if !self.surface.set_control_value(&name, &value) {
                    debug!(%name, "input on unknown control ignored");
                }
                None
            }
            UiEvent::Submit => Some(self.submit().await),
        }
    }

    async fn submit(&mut self) -> Notice {
        let action = self
            .surface
            .by_id(FORM_ID)
            .and_then(|form| form.data.get(ACTION_DATA_KEY).cloned())
            .unwrap_or_default();

        match self.pipeline.submit(&self.surface, &action).await {
            Ok(SubmitOutcome::Navigate(url)) => Notice::Navigate(url),
            Ok(SubmitOutcome::Saved) => {
                Notice::Success("Resume saved successfully!".to_string())
            }
            Err(SubmitError::Rejected {
                message: Some(message),
                ..
            }) => Notice::Failure(format!("Error saving resume: {message}")),
            Err(SubmitError::Rejected { .. }) => {
                Notice::Failure("Error saving resume: Unknown error".to_string())
            }
            Err(SubmitError::MalformedResponse(e)) => {
                error!("unreadable response from endpoint: {e}");
                Notice::Failure(
                    "Error saving resume. Please check the logs for details.".to_string(),
                )
            }
            Err(SubmitError::Transport(e)) => {
                error!("submission transport failure: {e}");
                Notice::Failure("An error occurred while submitting the form.".to_string())
            }
        }
    }
}
