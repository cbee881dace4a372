//! JSON conversion between task records and their textual interchange form.

use std::sync::Arc;

use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::domain::{
    TaskDescription, TaskDomainError, TaskId, TaskPriority, TaskRecord, TaskRecordData, TaskStatus,
    TaskTitle,
};

/// Result type for interchange conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised while converting between records and JSON payloads.
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    /// The payload is not valid JSON or is missing required fields.
    #[error("malformed task payload: {0}")]
    Payload(Arc<serde_json::Error>),

    /// A field value was rejected by domain validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(Arc::new(err))
    }
}

/// Wire model for one task record.
///
/// Only `title` is required; the remaining fields fall back to the
/// interchange defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonTaskModel {
    #[serde(default)]
    id: u64,
    title: String,
    #[serde(default = "default_description")]
    description: String,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default)]
    priority: TaskPriority,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
}

fn default_description() -> String {
    "No description".to_owned()
}

fn default_kind() -> String {
    "task".to_owned()
}

/// Converts a JSON payload into a task record.
///
/// Missing optional fields take the interchange defaults (`id` 0,
/// description "No description", pending status, medium priority). The
/// record is stamped with the current clock time.
///
/// # Errors
///
/// Returns [`ConversionError::Payload`] for malformed JSON and
/// [`ConversionError::Validation`] when a field value fails domain
/// validation.
pub fn try_record_from_json(json: &str, clock: &impl Clock) -> ConversionResult<TaskRecord> {
    let model: JsonTaskModel = serde_json::from_str(json)?;
    let title = TaskTitle::new(model.title)?;
    let description = TaskDescription::new(model.description)?;
    let timestamp = clock.utc();
    Ok(TaskRecord::from_data(TaskRecordData {
        id: TaskId::new(model.id),
        title,
        description,
        status: model.status,
        priority: model.priority,
        subtasks: Vec::new(),
        created_at: timestamp,
        updated_at: timestamp,
    }))
}

/// Converts a JSON payload into a task record, substituting a fallback
/// record with [`TaskStatus::Error`] when conversion fails.
///
/// The failure is reported through `tracing` and never propagated; callers
/// can detect the sentinel by its [`TaskStatus::Error`] status.
#[must_use]
pub fn record_from_json(json: &str, clock: &impl Clock) -> TaskRecord {
    try_record_from_json(json, clock).unwrap_or_else(|err| {
        tracing::warn!(target: "eisenhower::interchange", %err, "task conversion failed");
        error_record(clock)
    })
}

/// Renders a record into its JSON interchange form.
///
/// The payload additionally carries a `"type": "task"` marker. Subtasks are
/// not part of the interchange form.
///
/// # Errors
///
/// Returns [`ConversionError::Payload`] when serialisation fails.
pub fn record_to_json(record: &TaskRecord) -> ConversionResult<String> {
    let model = JsonTaskModel {
        id: record.id().value(),
        title: record.title().as_str().to_owned(),
        description: record.description().as_str().to_owned(),
        status: record.status(),
        priority: record.priority(),
        kind: default_kind(),
    };
    Ok(serde_json::to_string(&model)?)
}

#[expect(
    clippy::expect_used,
    reason = "sentinel field values are statically valid"
)]
fn error_record(clock: &impl Clock) -> TaskRecord {
    let timestamp = clock.utc();
    TaskRecord::from_data(TaskRecordData {
        id: TaskId::new(0),
        title: TaskTitle::new("Error Task").expect("static sentinel title"),
        description: TaskDescription::new("Failed to parse task data")
            .expect("static sentinel description"),
        status: TaskStatus::Error,
        priority: TaskPriority::High,
        subtasks: Vec::new(),
        created_at: timestamp,
        updated_at: timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::{record_from_json, record_to_json, try_record_from_json, ConversionError};
    use crate::task::domain::{TaskPriority, TaskStatus};
    use mockable::DefaultClock;
    use rstest::rstest;

    #[rstest]
    fn full_payload_converts_every_field() {
        let json = r#"{"id":7,"title":"Review notes","description":"Before standup","status":"COMPLETED","priority":"HIGH"}"#;
        let record =
            try_record_from_json(json, &DefaultClock).expect("full payload should convert");

        assert_eq!(record.id().value(), 7);
        assert_eq!(record.title().as_str(), "Review notes");
        assert_eq!(record.description().as_str(), "Before standup");
        assert_eq!(record.status(), TaskStatus::Completed);
        assert_eq!(record.priority(), TaskPriority::High);
    }

    #[rstest]
    fn title_only_payload_takes_interchange_defaults() {
        let record = try_record_from_json(r#"{"title":"Water plants"}"#, &DefaultClock)
            .expect("minimal payload should convert");

        assert_eq!(record.id().value(), 0);
        assert_eq!(record.description().as_str(), "No description");
        assert_eq!(record.status(), TaskStatus::Pending);
        assert_eq!(record.priority(), TaskPriority::Medium);
    }

    #[rstest]
    #[case::not_json("not json at all")]
    #[case::missing_title(r#"{"id":3}"#)]
    fn malformed_payload_is_a_payload_error(#[case] json: &str) {
        let result = try_record_from_json(json, &DefaultClock);
        assert!(matches!(result, Err(ConversionError::Payload(_))));
    }

    #[rstest]
    fn blank_title_is_a_validation_error() {
        let result = try_record_from_json(r#"{"title":"   "}"#, &DefaultClock);
        assert!(matches!(result, Err(ConversionError::Validation(_))));
    }

    #[rstest]
    fn failed_conversion_substitutes_the_sentinel_record() {
        let record = record_from_json("{broken", &DefaultClock);

        assert_eq!(record.id().value(), 0);
        assert_eq!(record.title().as_str(), "Error Task");
        assert_eq!(record.status(), TaskStatus::Error);
        assert_eq!(record.priority(), TaskPriority::High);
    }

    #[rstest]
    fn rendered_record_carries_the_type_marker() {
        let record = try_record_from_json(r#"{"id":2,"title":"Pack bags"}"#, &DefaultClock)
            .expect("payload should convert");
        let json = record_to_json(&record).expect("record should render");

        assert!(json.contains(r#""type":"task""#));
        assert!(json.contains(r#""title":"Pack bags""#));
        assert!(json.contains(r#""status":"PENDING""#));
    }

    #[rstest]
    fn round_trip_preserves_field_values() {
        let original = try_record_from_json(
            r#"{"id":9,"title":"Ship release","description":"Tag and publish","priority":"LOW"}"#,
            &DefaultClock,
        )
        .expect("payload should convert");
        let json = record_to_json(&original).expect("record should render");
        let reparsed = try_record_from_json(&json, &DefaultClock).expect("rendered payload parses");

        assert_eq!(reparsed.id(), original.id());
        assert_eq!(reparsed.title(), original.title());
        assert_eq!(reparsed.description(), original.description());
        assert_eq!(reparsed.priority(), original.priority());
    }
}
