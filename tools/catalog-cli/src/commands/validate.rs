//! Validate a dataset file record by record.

use std::collections::HashMap;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use serde_json::Value;
use storefront_catalog::catalog::validate_record;
use storefront_catalog::{CatalogError, ErrorBody};

use super::ValidateArgs;
use crate::context::Context;

/// One problem found in a dataset.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Problem {
    /// Index of the offending record.
    pub index: usize,
    #[serde(flatten)]
    pub error: ErrorBody,
}

/// Run the validate command.
pub async fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let path = match args.file {
        Some(file) => ctx.cwd.join(file),
        None => ctx.data_path(),
    };
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    let records: Vec<Value> =
        serde_json::from_str(&content).context("Dataset must be a JSON array")?;

    let problems = check_records(&records);

    if ctx.output.is_json() {
        ctx.output.json(&problems);
    } else {
        ctx.output.header(&format!("Validating {}", path.display()));
        for p in &problems {
            let field = p.error.field.as_deref().unwrap_or("-");
            ctx.output
                .list_item(&format!("record {} [{}]: {}", p.index, field, p.error.message));
        }
    }

    if !problems.is_empty() {
        bail!("{} of {} record(s) failed validation", problems.len(), records.len());
    }
    ctx.output
        .success(&format!("{} record(s) valid, ids and slugs unique", records.len()));
    Ok(())
}

/// Validate every record, then check id and slug uniqueness among the valid ones.
pub fn check_records(records: &[Value]) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut ids: HashMap<String, usize> = HashMap::new();
    let mut slugs: HashMap<String, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let category = match validate_record(record) {
            Ok(c) => c,
            Err(e) => {
                problems.push(Problem {
                    index,
                    error: ErrorBody::from(CatalogError::from(e)),
                });
                continue;
            }
        };

        if let Some(first) = ids.insert(category.id.to_string(), index) {
            problems.push(Problem {
                index,
                error: ErrorBody::from(CatalogError::validation(
                    "id",
                    format!("'{}' already used by record {}", category.id, first),
                )),
            });
        }
        if let Some(first) = slugs.insert(category.slug.clone(), index) {
            let err = CatalogError::DuplicateSlug {
                slug: category.slug,
            };
            problems.push(Problem {
                index,
                error: ErrorBody {
                    message: format!("{} (record {})", err, first),
                    field: err.field().map(str::to_string),
                },
            });
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_catalog::seed::seed_categories;

    fn seed_records() -> Vec<Value> {
        seed_categories()
            .iter()
            .map(|c| serde_json::to_value(c).unwrap())
            .collect()
    }

    #[test]
    fn test_seed_has_no_problems() {
        assert!(check_records(&seed_records()).is_empty());
    }

    #[test]
    fn test_reports_invalid_and_duplicates() {
        let mut records = seed_records();
        records[1]["isActive"] = json!("true");
        records[2]["slug"] = json!("tops");
        records[3]["id"] = json!("1");

        let problems = check_records(&records);
        assert_eq!(problems.len(), 3);
        assert_eq!(problems[0].index, 1);
        assert_eq!(problems[0].error.field.as_deref(), Some("isActive"));
        assert_eq!(problems[1].index, 2);
        assert_eq!(problems[1].error.field.as_deref(), Some("slug"));
        assert!(problems[1].error.message.contains("record 0"));
        assert_eq!(problems[2].index, 3);
        assert_eq!(problems[2].error.field.as_deref(), Some("id"));
    }
}
