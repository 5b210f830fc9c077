//! Declarative field validation.
//!
//! Request types list their rules per field instead of annotating them:
//!
//! ```
//! use axum_helpers::validation::{validate, FieldRules, Rule, ValidateRules};
//!
//! struct Signup {
//!     email: Option<String>,
//!     nickname: Option<String>,
//! }
//!
//! impl ValidateRules for Signup {
//!     fn field_rules(&self) -> Vec<FieldRules<'_>> {
//!         vec![
//!             FieldRules::new("email", self.email.as_deref(), &[Rule::Required, Rule::Email]),
//!             FieldRules::new("nickname", self.nickname.as_deref(), &[Rule::MaxLength(16)]),
//!         ]
//!     }
//! }
//!
//! let errors = validate(&Signup { email: None, nickname: None }).unwrap_err();
//! assert_eq!(errors["email"], "email is required");
//! ```
//!
//! Fields are checked in order. Only the first failing rule of a field is
//! reported. Rules other than [`Rule::Required`] pass on absent values.

use std::collections::BTreeMap;
use validator::{ValidateEmail, ValidateUrl};

/// Field name to human-readable reason.
pub type FieldViolations = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Present and non-empty
    Required,
    /// At least N characters
    MinLength(u64),
    /// At most N characters
    MaxLength(u64),
    Email,
    Url,
    /// Named predicate, reported as "<field> is invalid"
    Custom {
        tag: &'static str,
        check: fn(&str) -> bool,
    },
}

impl Rule {
    pub fn tag(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::MinLength(_) => "min",
            Rule::MaxLength(_) => "max",
            Rule::Email => "email",
            Rule::Url => "url",
            Rule::Custom { tag, .. } => *tag,
        }
    }

    fn param(&self) -> Option<u64> {
        match self {
            Rule::MinLength(n) | Rule::MaxLength(n) => Some(*n),
            _ => None,
        }
    }

    fn passes(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return !matches!(self, Rule::Required);
        };
        let len = value.chars().count() as u64;
        match self {
            Rule::Required => !value.is_empty(),
            Rule::MinLength(min) => len >= *min,
            Rule::MaxLength(max) => len <= *max,
            Rule::Email => value.validate_email(),
            Rule::Url => value.validate_url(),
            Rule::Custom { check, .. } => check(value),
        }
    }
}

/// The rules for one field together with its current value.
#[derive(Debug, Clone)]
pub struct FieldRules<'a> {
    pub field: &'static str,
    pub value: Option<&'a str>,
    pub rules: &'static [Rule],
}

impl<'a> FieldRules<'a> {
    pub fn new(field: &'static str, value: Option<&'a str>, rules: &'static [Rule]) -> Self {
        Self {
            field,
            value,
            rules,
        }
    }
}

pub trait ValidateRules {
    fn field_rules(&self) -> Vec<FieldRules<'_>>;
}

pub fn validate<T: ValidateRules + ?Sized>(target: &T) -> Result<(), FieldViolations> {
    let mut violations = FieldViolations::new();

    for field in target.field_rules() {
        if let Some(rule) = field.rules.iter().find(|rule| !rule.passes(field.value)) {
            violations.insert(
                field.field.to_string(),
                validation_message(field.field, rule.tag(), rule.param()),
            );
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Reason text for a failed rule.
pub fn validation_message(field: &str, tag: &str, param: Option<u64>) -> String {
    match (tag, param) {
        ("required", _) => format!("{field} is required"),
        ("min", Some(n)) => format!("{field} must be at least {n} characters long"),
        ("min", None) => format!("{field} is too short"),
        ("max", Some(n)) => format!("{field} must be no more than {n} characters long"),
        ("max", None) => format!("{field} is too long"),
        ("email", _) => format!("{field} must be a valid email address"),
        ("url", _) => format!("{field} must be a valid URL"),
        _ => format!("{field} is invalid"),
    }
}
