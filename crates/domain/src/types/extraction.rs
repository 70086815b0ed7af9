//! Structured extraction result returned by the language model
//!
//! The model is asked for a fixed JSON schema but does not always honour it:
//! array elements may arrive as plain strings instead of objects, fields may
//! carry numbers where strings were expected, and whole categories may be
//! missing or `null`. Deserialization here is deliberately lenient so that
//! every shape resolves once into [`CategoryItem`] and no consumer has to
//! re-check it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::participant::Participant;

/// One element of a category array: either the category object or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryItem<T> {
    Structured(T),
    Freeform(String),
}

impl<T: DeserializeOwned> CategoryItem<T> {
    /// Resolve a raw JSON element into a structured or freeform item.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Freeform(text),
            Value::Object(_) => {
                let fallback = value.to_string();
                serde_json::from_value(value).map_or(Self::Freeform(fallback), Self::Structured)
            }
            other => Self::Freeform(other.to_string()),
        }
    }
}

impl<T> CategoryItem<T> {
    pub fn as_structured(&self) -> Option<&T> {
        match self {
            Self::Structured(item) => Some(item),
            Self::Freeform(_) => None,
        }
    }

    pub fn as_structured_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Structured(item) => Some(item),
            Self::Freeform(_) => None,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for CategoryItem<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Task with an assignee, optional deadline and priority
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub assignee_email: Option<String>,
    /// `DD.MM.YYYY` as produced by the model
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub raised_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub asked_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayItem {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub original_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub new_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneItem {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderItem {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// audit | security | compliance | documentation
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// The model's structured output.
///
/// A missing or `null` category is an empty category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default, deserialize_with = "lenient_participants")]
    pub participants: Vec<Participant>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub action_items: Vec<CategoryItem<ActionItem>>,
    #[serde(default, deserialize_with = "lenient_texts")]
    pub decisions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_texts")]
    pub changes: Vec<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub risks: Vec<CategoryItem<RiskItem>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub questions: Vec<CategoryItem<QuestionItem>>,
    #[serde(default, deserialize_with = "lenient_texts")]
    pub agreements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub delays: Vec<CategoryItem<DelayItem>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub milestones: Vec<CategoryItem<MilestoneItem>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub reminders: Vec<CategoryItem<ReminderItem>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub compliance: Vec<CategoryItem<ComplianceItem>>,
}

impl ExtractionResult {
    /// Build a result from a parsed JSON document.
    ///
    /// Returns `None` when the document is not a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Total number of category elements (participants excluded).
    pub fn item_count(&self) -> usize {
        self.action_items.len()
            + self.decisions.len()
            + self.changes.len()
            + self.risks.len()
            + self.questions.len()
            + self.agreements.len()
            + self.delays.len()
            + self.milestones.len()
            + self.reminders.len()
            + self.compliance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// Render any JSON scalar as text; `null` becomes `None`.
fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Value::deserialize(deserializer).map(value_to_text)
}

fn array_elements(value: Value) -> Vec<Value> {
    match value {
        Value::Array(elements) => elements,
        _ => Vec::new(),
    }
}

fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<CategoryItem<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(array_elements(value).into_iter().map(CategoryItem::from_value).collect())
}

fn lenient_texts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(array_elements(value)
        .into_iter()
        .map(|element| match element {
            Value::String(text) => text,
            other => other.to_string(),
        })
        .collect())
}

fn lenient_participants<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Participant>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(array_elements(value)
        .into_iter()
        .filter_map(|element| serde_json::from_value::<Participant>(element).ok())
        .collect())
}
