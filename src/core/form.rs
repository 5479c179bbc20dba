use crate::core::validators::{self, Validator};
use serde::Serialize;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const SUCCESS_MESSAGE: &str = "¡Mensaje enviado correctamente! Te contactaré pronto.";

/// Contact form values read fresh at submit time. Serialized field names
/// match the page's field identifiers so the logged payload mirrors what
/// the document carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormInput {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "mensaje")]
    pub message: String,
}

type FieldAccessor = fn(&FormInput) -> &str;

/// Validation rules for the contact form. Fields are checked in a fixed
/// order (name, email, message) and each field contributes at most one
/// error: the first failing rule wins.
pub struct ContactValidator {
    fields: Vec<(FieldAccessor, Vec<Validator>)>,
}

impl ContactValidator {
    pub fn new() -> Self {
        Self {
            fields: vec![
                (
                    |input: &FormInput| input.name.as_str(),
                    vec![
                        validators::required("El nombre es requerido"),
                        validators::min_trimmed_length(
                            NAME_MIN_CHARS,
                            "El nombre debe tener al menos 2 caracteres",
                        ),
                    ],
                ),
                (
                    |input: &FormInput| input.email.as_str(),
                    vec![
                        validators::required("El correo electrónico es requerido"),
                        validators::email("El correo electrónico no es válido"),
                    ],
                ),
                (
                    |input: &FormInput| input.message.as_str(),
                    vec![
                        validators::required("El mensaje es requerido"),
                        validators::min_trimmed_length(
                            MESSAGE_MIN_CHARS,
                            "El mensaje debe tener al menos 10 caracteres",
                        ),
                    ],
                ),
            ],
        }
    }

    pub fn validate(&self, input: &FormInput) -> Vec<String> {
        let mut errors = Vec::new();
        for (accessor, rules) in &self.fields {
            let value = accessor(input);
            for rule in rules {
                if let Err(message) = rule(value) {
                    errors.push(message);
                    break;
                }
            }
        }
        errors
    }
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate(input: &FormInput) -> Vec<String> {
    ContactValidator::new().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, message: &str) -> FormInput {
        FormInput {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_input_yields_one_error_per_field_in_order() {
        let errors = validate(&input("", "", ""));
        assert_eq!(
            errors,
            vec![
                "El nombre es requerido".to_string(),
                "El correo electrónico es requerido".to_string(),
                "El mensaje es requerido".to_string(),
            ]
        );
    }

    #[test]
    fn minimal_valid_input_passes() {
        assert!(validate(&input("Al", "a@b.co", "1234567890")).is_empty());
    }

    #[test]
    fn second_rule_fires_only_when_field_is_present() {
        let errors = validate(&input("A", "bad", "short"));
        assert_eq!(
            errors,
            vec![
                "El nombre debe tener al menos 2 caracteres".to_string(),
                "El correo electrónico no es válido".to_string(),
                "El mensaje debe tener al menos 10 caracteres".to_string(),
            ]
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let errors = validate(&input("   ", "a@b.co", "1234567890"));
        assert_eq!(errors, vec!["El nombre es requerido".to_string()]);
    }

    #[test]
    fn logged_payload_uses_page_field_names() {
        let payload = serde_json::to_string(&input("Al", "a@b.co", "1234567890")).unwrap();
        assert!(payload.contains("\"nombre\""));
        assert!(payload.contains("\"mensaje\""));
    }
}
