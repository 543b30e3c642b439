use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::issue::{Issue, IssueKind, ValidationError, ValidationResult};
use crate::record::{Allergen, PastryInput, PastryUpdate};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 20;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 100;

/// Which fields the schema declares and which of them a create must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaProfile {
    /// `name`, `description` and `price` required; `allergens` optional.
    #[default]
    Full,
    /// `name` required; `description` and `allergens` optional; no `price`.
    Light,
}

impl SchemaProfile {
    /// Keys the schema accepts. Anything else is an unrecognized key.
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Full => &["name", "description", "price", "allergens"],
            Self::Light => &["name", "description", "allergens"],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Light => "light",
        }
    }

    const fn requires_description(self) -> bool {
        matches!(self, Self::Full)
    }

    const fn has_price(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl fmt::Display for SchemaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "light" => Ok(Self::Light),
            other => Err(format!(
                "unknown schema profile '{other}' (expected 'full' or 'light')"
            )),
        }
    }
}

/// Create payloads must satisfy the profile's required fields; update
/// payloads may omit any field but must carry at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

struct LengthRule {
    field: &'static str,
    min: usize,
    max: usize,
    missing: &'static str,
    too_short: &'static str,
    too_long: &'static str,
}

const NAME_RULE: LengthRule = LengthRule {
    field: "name",
    min: NAME_MIN,
    max: NAME_MAX,
    missing: "Pastry name is required.",
    too_short: "Pastry name needs to be at least 2 characters long.",
    too_long: "Pastry name can't exceed 20 characters.",
};

const DESCRIPTION_RULE: LengthRule = LengthRule {
    field: "description",
    min: DESCRIPTION_MIN,
    max: DESCRIPTION_MAX,
    missing: "Pastry description is required.",
    too_short: "Pastry description needs to be at least 10 characters long.",
    too_long: "Pastry description can't exceed 100 characters.",
};

/// Fields that passed their own checks. A `None` either was absent or failed.
#[derive(Default)]
struct Checked {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    allergens: Option<Vec<Allergen>>,
}

/// Validates untyped JSON payloads against a [`SchemaProfile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    profile: SchemaProfile,
}

impl Schema {
    pub const fn new(profile: SchemaProfile) -> Self {
        Self { profile }
    }

    pub const fn profile(&self) -> SchemaProfile {
        self.profile
    }

    /// Validates a create payload.
    pub fn validate_create(&self, payload: &Value) -> ValidationResult<PastryInput> {
        let (checked, issues) = self.check(payload, ValidationMode::Create)?;
        match checked.name {
            Some(name) if issues.is_empty() => Ok(PastryInput {
                name,
                description: checked.description,
                price: checked.price,
                allergens: checked.allergens,
            }),
            _ => Err(ValidationError::new(issues)),
        }
    }

    /// Validates a partial update payload.
    pub fn validate_update(&self, payload: &Value) -> ValidationResult<PastryUpdate> {
        let (checked, issues) = self.check(payload, ValidationMode::Update)?;
        if !issues.is_empty() {
            return Err(ValidationError::new(issues));
        }
        Ok(PastryUpdate {
            name: checked.name,
            description: checked.description,
            price: checked.price,
            allergens: checked.allergens,
        })
    }

    fn check(
        &self,
        payload: &Value,
        mode: ValidationMode,
    ) -> ValidationResult<(Checked, Vec<Issue>)> {
        let Some(object) = payload.as_object() else {
            return Err(Issue::invalid_type("", "object", type_name(payload)).into());
        };

        let creating = mode == ValidationMode::Create;
        let mut issues = Vec::new();
        let mut checked = Checked {
            name: string_field(object, &NAME_RULE, creating, &mut issues),
            description: string_field(
                object,
                &DESCRIPTION_RULE,
                creating && self.profile.requires_description(),
                &mut issues,
            ),
            ..Checked::default()
        };
        if self.profile.has_price() {
            checked.price = price_field(object, creating, &mut issues);
        }
        checked.allergens = allergens_field(object, &mut issues);

        let declared = self.profile.fields();
        let unknown: Vec<&str> = object
            .keys()
            .map(String::as_str)
            .filter(|key| !declared.contains(key))
            .collect();
        if !unknown.is_empty() {
            let listed = unknown
                .iter()
                .map(|key| format!("'{key}'"))
                .collect::<Vec<_>>()
                .join(", ");
            issues.push(
                Issue::new(
                    "",
                    IssueKind::UnrecognizedKeys,
                    format!("Unrecognized key(s) in object: {listed}"),
                )
                .with_received(unknown.join(", ")),
            );
        }

        if mode == ValidationMode::Update && !declared.iter().any(|f| object.contains_key(*f)) {
            issues.push(Issue::new(
                "",
                IssueKind::Custom,
                "Update needs to include at least one field.",
            ));
        }

        Ok((checked, issues))
    }
}

fn string_field(
    object: &Map<String, Value>,
    rule: &LengthRule,
    required: bool,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    match object.get(rule.field) {
        None => {
            if required {
                issues.push(
                    Issue::new(rule.field, IssueKind::InvalidType, rule.missing)
                        .with_expected("string"),
                );
            }
            None
        }
        Some(Value::String(s)) => {
            let len = s.chars().count();
            if len < rule.min {
                issues.push(
                    Issue::new(rule.field, IssueKind::TooSmall, rule.too_short)
                        .with_expected(format!("at least {} characters", rule.min))
                        .with_received(format!("{len} characters")),
                );
                None
            } else if len > rule.max {
                issues.push(
                    Issue::new(rule.field, IssueKind::TooBig, rule.too_long)
                        .with_expected(format!("at most {} characters", rule.max))
                        .with_received(format!("{len} characters")),
                );
                None
            } else {
                Some(s.clone())
            }
        }
        Some(other) => {
            issues.push(Issue::invalid_type(rule.field, "string", type_name(other)));
            None
        }
    }
}

fn price_field(
    object: &Map<String, Value>,
    required: bool,
    issues: &mut Vec<Issue>,
) -> Option<f64> {
    match object.get("price") {
        None => {
            if required {
                issues.push(
                    Issue::new("price", IssueKind::InvalidType, "Pastry price is required.")
                        .with_expected("number"),
                );
            }
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(price) if price.is_finite() && price > 0.0 => Some(price),
            _ => {
                issues.push(
                    Issue::new(
                        "price",
                        IssueKind::TooSmall,
                        "Pastry price needs to be a positive number.",
                    )
                    .with_expected("greater than 0")
                    .with_received(n.to_string()),
                );
                None
            }
        },
        Some(other) => {
            issues.push(Issue::invalid_type("price", "number", type_name(other)));
            None
        }
    }
}

fn allergens_field(object: &Map<String, Value>, issues: &mut Vec<Issue>) -> Option<Vec<Allergen>> {
    let values = match object.get("allergens")? {
        Value::Array(values) => values,
        other => {
            issues.push(Issue::invalid_type("allergens", "array", type_name(other)));
            return None;
        }
    };

    let before = issues.len();
    let mut allergens = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        let path = format!("allergens.{i}");
        match value {
            Value::String(s) => match Allergen::parse(s) {
                Some(allergen) => {
                    if !allergens.contains(&allergen) {
                        allergens.push(allergen);
                    }
                }
                None => issues.push(
                    Issue::new(
                        path,
                        IssueKind::InvalidEnumValue,
                        format!("Invalid allergen. Expected {}, received '{s}'", allowed_allergens()),
                    )
                    .with_expected(allowed_allergens())
                    .with_received(format!("'{s}'")),
                ),
            },
            other => issues.push(Issue::invalid_type(path, "string", type_name(other))),
        }
    }

    (issues.len() == before).then_some(allergens)
}

fn allowed_allergens() -> String {
    Allergen::ALL
        .iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
