//! The generic validated-submit-and-render form.
//!
//! A [`FormSpec`] declares the fields, validation rules, action and renderer
//! of a conversion feature; a [`FormController`] drives one instance of it.

mod controller;
mod spec;
mod state;
mod validation;

pub use controller::{FormController, Submission, SubmissionResult};
pub use spec::{Action, FormSpec};
pub use state::FormState;
pub use validation::{
    FieldSpec, Rule, ValidatedValues, ValidationErrors, one_of, required, url, validate,
};
