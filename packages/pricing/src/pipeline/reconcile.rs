//! Fill-only reconciliation of scraped details into table rows.
//!
//! This is the heart of the pipeline: a pure in-memory transform that
//! takes the ordered row set, a stable-ordered batch of scraped
//! details, and a matching strategy, and fills empty fields. Populated
//! fields are never overwritten and nothing is fabricated, so running
//! the same batch twice is a no-op the second time.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::traits::matcher::NameMatcher;
use crate::types::detail::DetailRecord;
use crate::types::record::{Field, Record};

/// Result of one reconciliation pass.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// The full row set, matched and unmatched, in original order.
    pub records: Vec<Record>,

    /// Rows where at least one field changed.
    pub records_changed: usize,

    /// Total fields filled or notes appended across all rows.
    pub fields_filled: usize,
}

/// Merge a batch of detail records into an ordered row set.
///
/// For each row, the first detail whose name matches the row's model
/// under `matcher` is applied — first match in `details` order wins,
/// not best match, so ties resolve deterministically by batch order.
/// Only empty row fields take non-empty detail values; annotations
/// append to billing notes with a duplicate guard. "Last Updated" is
/// set to `today` only on rows where something actually changed.
///
/// Unmatched rows pass through untouched; that is informational, not
/// an error.
pub fn reconcile(
    records: Vec<Record>,
    details: &[DetailRecord],
    matcher: &dyn NameMatcher,
    today: NaiveDate,
) -> ReconcileOutcome {
    let mut records_changed = 0;
    let mut fields_filled = 0;
    let today = today.format("%Y-%m-%d").to_string();

    let records = records
        .into_iter()
        .map(|mut record| {
            let model = record.model().to_string();
            let Some(detail) = details.iter().find(|d| matcher.matches(&model, &d.name)) else {
                debug!(model = %model, "no matching detail record");
                return record;
            };

            let filled = apply_detail(&mut record, detail);
            if filled > 0 {
                record.set(Field::LastUpdated, &today);
                records_changed += 1;
                fields_filled += filled;
                debug!(model = %model, detail = %detail.name, filled, "row updated");
            }
            record
        })
        .collect::<Vec<_>>();

    info!(
        rows = records.len(),
        changed = records_changed,
        filled = fields_filled,
        "reconciliation pass complete"
    );

    ReconcileOutcome {
        records,
        records_changed,
        fields_filled,
    }
}

/// Apply one detail record to one row; returns the number of changes.
fn apply_detail(record: &mut Record, detail: &DetailRecord) -> usize {
    let mut filled = 0;

    // Detail fields that map straight onto row fields, fill-only.
    let direct = [
        (detail.context_window.as_deref(), Field::ContextWindow),
        (detail.max_output_tokens.as_deref(), Field::MaxTokens),
        (detail.input_cost.as_deref(), Field::InputCost),
        (detail.output_cost.as_deref(), Field::OutputCost),
        (detail.documentation_url.as_deref(), Field::DocumentationUrl),
    ];
    for (value, field) in direct {
        if let Some(value) = value {
            if record.fill(field, value) {
                filled += 1;
            }
        }
    }

    for annotation in detail.annotations() {
        if record.append_note(&annotation) {
            filled += 1;
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::ContainmentMatcher;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    fn opus_row() -> Record {
        Record::for_model("Anthropic", "Claude Opus 4.5")
    }

    fn opus_detail() -> DetailRecord {
        DetailRecord::new("Claude Opus 4.5")
            .with_context_window("200000")
            .with_knowledge_cutoff("Mar 2025")
    }

    #[test]
    fn test_worked_example() {
        let outcome = reconcile(
            vec![opus_row()],
            &[opus_detail()],
            &ContainmentMatcher::new(),
            today(),
        );

        assert_eq!(outcome.records_changed, 1);
        let row = &outcome.records[0];
        assert_eq!(row.get(Field::ContextWindow), "200000");
        assert_eq!(row.get(Field::BillingNotes), "Knowledge cutoff: Mar 2025");
        assert_eq!(row.get(Field::LastUpdated), "2026-08-29");
    }

    #[test]
    fn test_second_pass_is_noop() {
        let matcher = ContainmentMatcher::new();
        let first = reconcile(vec![opus_row()], &[opus_detail()], &matcher, today());
        assert_eq!(first.records_changed, 1);

        let later = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let second = reconcile(first.records.clone(), &[opus_detail()], &matcher, later);

        assert_eq!(second.records_changed, 0);
        assert_eq!(second.fields_filled, 0);
        assert_eq!(second.records, first.records);
        // Last Updated keeps the first run's date: nothing changed.
        assert_eq!(second.records[0].get(Field::LastUpdated), "2026-08-29");
    }

    #[test]
    fn test_populated_field_never_overwritten() {
        let row = opus_row().with(Field::ContextWindow, "100000");
        let outcome = reconcile(
            vec![row],
            &[opus_detail()],
            &ContainmentMatcher::new(),
            today(),
        );

        assert_eq!(outcome.records[0].get(Field::ContextWindow), "100000");
        // The notes annotation still lands, so the row counts as changed.
        assert_eq!(outcome.records_changed, 1);
    }

    #[test]
    fn test_first_match_wins_in_batch_order() {
        let details = [
            DetailRecord::new("gpt-4").with_context_window("8192"),
            DetailRecord::new("gpt-4-turbo").with_context_window("128000"),
        ];
        let row = Record::for_model("OpenAI", "gpt-4-turbo");

        // Both details match under containment; batch order decides.
        let outcome = reconcile(vec![row], &details, &ContainmentMatcher::new(), today());
        assert_eq!(outcome.records[0].get(Field::ContextWindow), "8192");
    }

    #[test]
    fn test_unmatched_rows_pass_through_in_order() {
        let rows = vec![
            Record::for_model("Google", "gemini-2.5-pro"),
            opus_row(),
            Record::for_model("OpenAI", "gpt-4o"),
        ];
        let outcome = reconcile(
            rows,
            &[opus_detail()],
            &ContainmentMatcher::new(),
            today(),
        );

        assert_eq!(outcome.records.len(), 3);
        assert_eq!(outcome.records[0].model(), "gemini-2.5-pro");
        assert_eq!(outcome.records[1].model(), "Claude Opus 4.5");
        assert_eq!(outcome.records[2].model(), "gpt-4o");
        assert_eq!(outcome.records_changed, 1);
        assert_eq!(outcome.records[0].get(Field::LastUpdated), "");
    }

    #[test]
    fn test_bare_detail_record_is_tolerated() {
        let outcome = reconcile(
            vec![opus_row()],
            &[DetailRecord::new("Claude Opus 4.5")],
            &ContainmentMatcher::new(),
            today(),
        );

        assert_eq!(outcome.records_changed, 0);
        assert_eq!(outcome.records[0].get(Field::LastUpdated), "");
    }

    #[test]
    fn test_empty_detail_value_does_not_fill() {
        let detail = DetailRecord::new("Claude Opus 4.5").with_context_window("  ");
        let outcome = reconcile(
            vec![opus_row()],
            &[detail],
            &ContainmentMatcher::new(),
            today(),
        );

        assert_eq!(outcome.records_changed, 0);
        assert!(!outcome.records[0].is_filled(Field::ContextWindow));
    }
}
