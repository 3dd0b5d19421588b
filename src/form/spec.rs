use super::validation::{FieldSpec, Rule};
use crate::render::Renderer;

/// What a form does with its validated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render the named field locally, without the backend
    Local { field: &'static str },
    /// POST the values to an endpoint path
    Remote { path: &'static str },
}

/// Declarative description of one conversion form.
///
/// Built with chained setters:
///
/// ```
/// use conversors::form::{FormSpec, required};
/// use conversors::render::Renderer;
///
/// let spec = FormSpec::remote("math", "/math-formulas-in-latex")
///     .field("formula_input", vec![required("Mathematical formula is required.")])
///     .renderer(Renderer::Latex)
///     .copy_label("LaTeX");
/// assert_eq!(spec.fields().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    name: &'static str,
    title: &'static str,
    fields: Vec<FieldSpec>,
    action: Action,
    renderer: Renderer,
    copy_label: &'static str,
    failure_message: &'static str,
}

impl FormSpec {
    fn new(name: &'static str, action: Action) -> Self {
        Self {
            name,
            title: name,
            fields: Vec::new(),
            action,
            renderer: Renderer::Text,
            copy_label: "Output",
            failure_message: "Request failed. Please try again.",
        }
    }

    /// A form rendered locally from `field`.
    pub fn local(name: &'static str, field: &'static str) -> Self {
        Self::new(name, Action::Local { field })
    }

    /// A form submitted to the backend at `path`.
    pub fn remote(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Action::Remote { path })
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldSpec { name, rules });
        self
    }

    pub fn renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Noun used in clipboard notices ("SQL copied to clipboard!").
    pub fn copy_label(mut self, label: &'static str) -> Self {
        self.copy_label = label;
        self
    }

    /// Generic message shown when the backend call fails.
    pub fn failure_message(mut self, message: &'static str) -> Self {
        self.failure_message = message;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display_title(&self) -> &'static str {
        self.title
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn render_strategy(&self) -> Renderer {
        self.renderer
    }

    pub fn copied_notice(&self) -> String {
        format!("{} copied to clipboard!", self.copy_label)
    }

    pub fn failure_text(&self) -> &'static str {
        self.failure_message
    }
}
