use tracing::{debug, error};

use super::spec::{Action, FormSpec};
use super::state::FormState;
use super::validation::{self, ValidationErrors};
use crate::gateway::{Gateway, SubmissionRequest};
use crate::render::{RenderError, RenderedOutput};

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Pending,
    Success(String),
    Failure(String),
}

/// Work a validated form hands to its driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Transform `input` locally
    Local { input: String },
    /// Send the request to the backend
    Remote(SubmissionRequest),
}

/// Coordinates input state, validation and submission for one form.
///
/// `submit` borrows the controller mutably for the whole request, so a
/// second submission cannot start on the same controller while one is in
/// flight.
#[derive(Debug, Clone)]
pub struct FormController {
    spec: FormSpec,
    state: FormState,
    errors: Option<ValidationErrors>,
    result: Option<SubmissionResult>,
}

impl FormController {
    pub fn new(spec: FormSpec) -> Self {
        Self {
            spec,
            state: FormState::default(),
            errors: None,
            result: None,
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn get_value(&self, field: &str) -> &str {
        self.state.get(field)
    }

    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.state.set(field, value);
    }

    /// Exchanges two field values, e.g. source and target language.
    pub fn swap(&mut self, a: &str, b: &str) {
        self.state.swap(a, b);
    }

    /// Clears every field, the last validation errors and the result.
    pub fn reset(&mut self) {
        self.state.clear();
        self.errors = None;
        self.result = None;
    }

    /// Field errors from the last submit attempt, if validation failed.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, Some(SubmissionResult::Pending))
    }

    /// Validates the form and, on success, marks it Pending.
    ///
    /// Any previous result is discarded. On failure the field errors are
    /// stored and returned and nothing is submitted.
    pub fn begin(&mut self) -> Result<Submission, ValidationErrors> {
        self.result = None;

        let values = match validation::validate(self.spec.fields(), &self.state) {
            Ok(values) => values,
            Err(errors) => {
                debug!(form = self.spec.name(), errors = errors.len(), "validation failed");
                self.errors = Some(errors.clone());
                return Err(errors);
            }
        };

        self.errors = None;
        self.result = Some(SubmissionResult::Pending);

        Ok(match self.spec.action() {
            Action::Local { field } => Submission::Local {
                input: self.state.get(field).to_string(),
            },
            Action::Remote { path } => Submission::Remote(SubmissionRequest {
                path,
                body: values.to_json(),
            }),
        })
    }

    /// Resolves a Pending submission.
    ///
    /// Returns `false` and ignores the outcome when nothing is pending, which
    /// happens if the form was reset while the request was in flight.
    pub fn complete(&mut self, outcome: Result<String, String>) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.result = Some(match outcome {
            Ok(content) => SubmissionResult::Success(content),
            Err(message) => SubmissionResult::Failure(message),
        });
        true
    }

    /// Validates, submits and stores the outcome.
    ///
    /// Local forms run their renderer on the input; a render error (such as
    /// malformed JSON) becomes a Failure carrying the parser message. Remote
    /// failures are logged and surface as the form's generic failure text.
    pub async fn submit<G: Gateway>(&mut self, gateway: &G) -> Option<&SubmissionResult> {
        let submission = self.begin().ok()?;

        let outcome = match submission {
            Submission::Local { input } => match self.spec.render_strategy().render(&input) {
                Ok(_) => Ok(input),
                Err(e) => Err(e.to_string()),
            },
            Submission::Remote(request) => match gateway.post(request.path, &request.body).await {
                Ok(content) => Ok(content),
                Err(e) => {
                    error!(form = self.spec.name(), path = request.path, error = %e, "submission failed");
                    Err(self.spec.failure_text().to_string())
                }
            },
        };

        self.complete(outcome);
        self.result.as_ref()
    }

    /// Output derived from the current Success, if any.
    pub fn rendered(&self) -> Option<Result<RenderedOutput, RenderError>> {
        match &self.result {
            Some(SubmissionResult::Success(content)) => {
                Some(self.spec.render_strategy().render(content))
            }
            _ => None,
        }
    }

    /// Text a clipboard copy of the current output would contain.
    pub fn copy_text(&self) -> Option<String> {
        match self.rendered() {
            Some(Ok(output)) => Some(output.plain_text()),
            _ => None,
        }
    }
}
