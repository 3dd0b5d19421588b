use std::collections::BTreeMap;
use std::fmt;

use super::state::FormState;

/// A single validation rule attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain something other than whitespace
    Required { message: &'static str },
    /// Value must parse as an absolute URL
    Url { message: &'static str },
    /// Value must be one of a fixed set of labels
    OneOf { options: &'static [&'static str] },
}

/// Non-empty rule with a field-specific message.
pub fn required(message: &'static str) -> Rule {
    Rule::Required { message }
}

/// Well-formed URL rule with a field-specific message.
pub fn url(message: &'static str) -> Rule {
    Rule::Url { message }
}

/// Enumerated-value rule.
pub fn one_of(options: &'static [&'static str]) -> Rule {
    Rule::OneOf { options }
}

impl Rule {
    /// Checks a value against this rule.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self {
            Rule::Required { message } => {
                if value.trim().is_empty() {
                    Err((*message).to_string())
                } else {
                    Ok(())
                }
            }
            Rule::Url { message } => match reqwest::Url::parse(value) {
                Ok(_) => Ok(()),
                Err(_) => Err((*message).to_string()),
            },
            Rule::OneOf { options } => {
                if options.iter().any(|option| *option == value) {
                    Ok(())
                } else {
                    let expected = options
                        .iter()
                        .map(|o| format!("'{}'", o))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    Err(format!(
                        "Invalid enum value. Expected {}, received '{}'",
                        expected, value
                    ))
                }
            }
        }
    }
}

/// A field together with the rules it must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

/// Field-level validation failures, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    /// The message recorded for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(name, message)| (*name, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Values that passed validation, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidatedValues {
    values: BTreeMap<&'static str, String>,
}

impl ValidatedValues {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Request body: one JSON string per schema field.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .values
            .iter()
            .map(|(name, value)| ((*name).to_string(), serde_json::Value::from(value.as_str())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

/// Validates `state` against `fields`.
///
/// Every failing field is reported with the message of its first failing
/// rule. Missing fields are checked as empty strings.
pub fn validate(fields: &[FieldSpec], state: &FormState) -> Result<ValidatedValues, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut values = BTreeMap::new();

    for field in fields {
        let value = state.get(field.name);
        match field.rules.iter().find_map(|rule| rule.check(value).err()) {
            Some(message) => errors.errors.push((field.name, message)),
            None => {
                values.insert(field.name, value.to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(ValidatedValues { values })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIALECTS: &[&str] = &["MySQL", "PostgreSQL"];

    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec {
                name: "json_input",
                rules: vec![required("JSON input is required.")],
            },
            FieldSpec {
                name: "sql_dbms",
                rules: vec![one_of(DIALECTS)],
            },
        ]
    }

    #[test]
    fn test_required_rejects_blank() {
        let rule = required("Text input is required.");
        assert_eq!(rule.check(""), Err("Text input is required.".to_string()));
        assert_eq!(rule.check("  \n"), Err("Text input is required.".to_string()));
        assert!(rule.check("x").is_ok());
    }

    #[test]
    fn test_url_rule() {
        let rule = url("A valid image URL is required.");
        assert!(rule.check("https://example.com/cat.png").is_ok());
        assert!(rule.check("not a url").is_err());
        assert!(rule.check("").is_err());
    }

    #[test]
    fn test_one_of_message_lists_options() {
        let err = one_of(DIALECTS).check("DB2").unwrap_err();
        assert_eq!(
            err,
            "Invalid enum value. Expected 'MySQL' | 'PostgreSQL', received 'DB2'"
        );
    }

    #[test]
    fn test_one_of_is_case_sensitive() {
        assert!(one_of(DIALECTS).check("mysql").is_err());
    }

    #[test]
    fn test_validate_reports_all_fields() {
        let state = FormState::default();
        let errors = validate(&schema(), &state).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("json_input"), Some("JSON input is required."));
        assert!(errors.get("sql_dbms").is_some());
    }

    #[test]
    fn test_validate_success_builds_body() {
        let mut state = FormState::default();
        state.set("json_input", "{\"a\":1}");
        state.set("sql_dbms", "MySQL");

        let values = validate(&schema(), &state).unwrap();
        assert_eq!(
            values.to_json(),
            serde_json::json!({ "json_input": "{\"a\":1}", "sql_dbms": "MySQL" })
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let fields = vec![FieldSpec {
            name: "img_url",
            rules: vec![required("Required."), url("Bad URL.")],
        }];
        let errors = validate(&fields, &FormState::default()).unwrap_err();
        assert_eq!(errors.get("img_url"), Some("Required."));
    }

    #[test]
    fn test_display_lists_fields() {
        let errors = validate(&schema(), &FormState::default()).unwrap_err();
        let text = errors.to_string();
        assert!(text.starts_with("json_input: JSON input is required."));
        assert!(text.contains("sql_dbms: Invalid enum value"));
    }
}
