//! Story points and generic custom-field updates.

use serde_json::{json, Value};

use super::assign::split_trailing;
use super::{KeyFeed, Runner};
use crate::bulk::{self, ReportPhrases};
use crate::config::CustomFieldConfig;
use crate::errors::BulkError;
use crate::remote::Remote;

const STORY_POINT_KEYWORDS: &[&str] = &["story point", "storypoint", "story-point"];

impl<R: Remote> Runner<'_, R> {
    /// Set the story-points custom field on every target.
    ///
    /// The field is chosen by `--field` (matched case-insensitively against
    /// the configured names) or autodetected by story-point keywords.
    pub fn story_points(
        &self,
        args: &[String],
        field_override: Option<&str>,
        configured: &[CustomFieldConfig],
    ) -> Result<(), BulkError> {
        let (keys, points_str) = split_trailing(args, "story points value required")?;
        let points: f64 = points_str.parse().map_err(|_| {
            BulkError::usage(format!(
                "invalid story points value: {:?} (must be a number)",
                points_str
            ))
        })?;

        let field = find_story_points_field(configured, field_override)?;
        let targets = self.resolve_targets(keys, KeyFeed::Args)?;

        self.out.info(format!(
            "Setting story points to {} for {} issues...",
            points_str,
            targets.len()
        ));

        let fields = [(field.key.clone(), json!(points))];
        let result = bulk::execute(&targets, |key| {
            self.remote.set_fields(key.as_str(), &fields)
        });

        bulk::report(
            self.out,
            &result,
            &ReportPhrases {
                success: format!(
                    "Successfully set story points to {} for {} issues",
                    points_str,
                    result.succeeded.len()
                ),
                partial: format!(
                    "Updated {} issues successfully, {} failed",
                    result.succeeded.len(),
                    result.failed.len()
                ),
                all_failed: "failed to update all issues".to_string(),
            },
        )
    }

    /// Set arbitrary configured custom fields (`FIELD=VALUE` pairs) on every
    /// target. All pairs are applied in a single call per issue.
    pub fn custom_fields(
        &self,
        args: &[String],
        configured: &[CustomFieldConfig],
    ) -> Result<(), BulkError> {
        let (keys, pairs): (Vec<String>, Vec<String>) =
            args.iter().cloned().partition(|a| !a.contains('='));
        if pairs.is_empty() {
            return Err(BulkError::usage("no FIELD=VALUE pairs provided"));
        }

        let mut fields = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            let (name, raw_value) = pair
                .split_once('=')
                .filter(|(n, v)| !n.is_empty() && !v.is_empty())
                .ok_or_else(|| {
                    BulkError::usage(format!("invalid FIELD=VALUE pair: {:?}", pair))
                })?;
            let field = find_field(configured, name).ok_or_else(|| {
                BulkError::resolution(format!(
                    "custom field {:?} not found in configuration",
                    name
                ))
            })?;
            fields.push((field.key.clone(), coerce_value(field, raw_value)?));
        }

        let targets = self.resolve_targets(&keys, KeyFeed::Args)?;

        self.out.info(format!(
            "Updating custom fields for {} issues...",
            targets.len()
        ));

        let result = bulk::execute(&targets, |key| {
            self.remote.set_fields(key.as_str(), &fields)
        });

        bulk::report(
            self.out,
            &result,
            &ReportPhrases {
                success: format!(
                    "Successfully updated custom fields for {} issues",
                    result.succeeded.len()
                ),
                partial: format!(
                    "Updated {} issues successfully, {} failed",
                    result.succeeded.len(),
                    result.failed.len()
                ),
                all_failed: "failed to update all issues".to_string(),
            },
        )
    }
}

/// Match a configured field by display name or wire key, case-insensitively.
fn find_field<'a>(
    configured: &'a [CustomFieldConfig],
    name: &str,
) -> Option<&'a CustomFieldConfig> {
    configured
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name) || f.key.eq_ignore_ascii_case(name))
}

fn find_story_points_field<'a>(
    configured: &'a [CustomFieldConfig],
    field_override: Option<&str>,
) -> Result<&'a CustomFieldConfig, BulkError> {
    if let Some(name) = field_override {
        return find_field(configured, name).ok_or_else(|| {
            BulkError::resolution(format!(
                "custom field {:?} not found in configuration",
                name
            ))
        });
    }
    configured
        .iter()
        .find(|f| {
            let name = f.name.to_lowercase();
            STORY_POINT_KEYWORDS.iter().any(|k| name.contains(k))
        })
        .ok_or_else(|| {
            BulkError::resolution(
                "story points field not found. Configure it under [[fields.custom]] or use --field"
                    .to_string(),
            )
        })
}

/// Coerce a raw value to the field's declared datatype.
fn coerce_value(field: &CustomFieldConfig, raw: &str) -> Result<Value, BulkError> {
    match field.schema.as_deref() {
        Some("number") => {
            let n: f64 = raw.parse().map_err(|_| {
                BulkError::usage(format!(
                    "invalid value {:?} for number field {:?}",
                    raw, field.name
                ))
            })?;
            Ok(json!(n))
        }
        _ => Ok(Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, key: &str, schema: Option<&str>) -> CustomFieldConfig {
        CustomFieldConfig {
            name: name.to_string(),
            key: key.to_string(),
            schema: schema.map(String::from),
        }
    }

    #[test]
    fn story_points_field_autodetected_by_keyword() {
        let configured = vec![
            field("Severity", "customfield_1", None),
            field("Story point estimate", "customfield_2", Some("number")),
        ];
        let found = find_story_points_field(&configured, None).unwrap();
        assert_eq!(found.key, "customfield_2");
    }

    #[test]
    fn field_override_matches_case_insensitively() {
        let configured = vec![field("Story Points", "customfield_9", Some("number"))];
        let found = find_story_points_field(&configured, Some("story points")).unwrap();
        assert_eq!(found.key, "customfield_9");
    }

    #[test]
    fn missing_story_points_field_is_a_resolution_error() {
        let err = find_story_points_field(&[], None).unwrap_err();
        assert!(err.to_string().contains("story points field not found"));
    }

    #[test]
    fn number_values_are_coerced() {
        let f = field("Story Points", "customfield_9", Some("number"));
        assert_eq!(coerce_value(&f, "5").unwrap(), json!(5.0));
        assert!(coerce_value(&f, "five").is_err());
    }

    #[test]
    fn string_fields_stay_strings() {
        let f = field("Team", "customfield_3", None);
        assert_eq!(coerce_value(&f, "platform").unwrap(), json!("platform"));
    }
}
