//! Field Extractor — normalizes the parsing provider's employment history into
//! `Position` records. Pure transform: all fallback resolution happens here.

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::position::{Highlight, Position};
use crate::parser_client::{DateField, EmploymentHistory};
use crate::resume::highlights::clean_description;

/// Fallback when the provider has no normalized job title for a position.
const NO_TITLE_FALLBACK: &str = "No Job Title Found";
/// Fallback when the provider has no normalized employer name.
const NO_EMPLOYER_FALLBACK: &str = "Unknown Employer";
/// End-date rendering for positions the provider marks as ongoing.
const CURRENT_POSITION: &str = "Current";

/// Extracts one `Position` per employment entry that carries a description.
///
/// Entries without a description contribute nothing, not even an empty
/// record. Input order is preserved; no sorting or dedup.
pub fn extract_positions(history: &EmploymentHistory) -> Result<Vec<Position>, AppError> {
    let mut positions = Vec::new();

    for entry in &history.positions {
        let description = match &entry.description {
            Some(description) => description,
            None => continue,
        };

        let title = entry
            .job_title
            .as_ref()
            .and_then(|t| t.normalized.clone())
            .unwrap_or_else(|| NO_TITLE_FALLBACK.to_string());

        let employer_name = entry
            .employer
            .as_ref()
            .and_then(|e| e.name.as_ref())
            .and_then(|n| n.normalized.clone())
            .unwrap_or_else(|| NO_EMPLOYER_FALLBACK.to_string());

        let start_date = format_month_year(entry.start_date.as_ref(), "start date")?;

        let end_date = if entry.is_current {
            CURRENT_POSITION.to_string()
        } else {
            format_month_year(entry.end_date.as_ref(), "end date")?
        };

        let highlights = clean_description(description)
            .into_iter()
            .map(Highlight::new)
            .collect();

        positions.push(Position {
            title,
            employer_name,
            start_date,
            end_date,
            highlights,
        });
    }

    Ok(positions)
}

/// Reformats a provider `YYYY-MM-DD` date as a full month name and year,
/// e.g. `"2022-03-15"` → `"March 2022"`.
fn format_month_year(field: Option<&DateField>, which: &str) -> Result<String, AppError> {
    let raw = field
        .and_then(|f| f.date.as_deref())
        .ok_or_else(|| AppError::DateFormat(format!("Position is missing its {which}")))?;

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AppError::DateFormat(format!("Unparseable {which} '{raw}': {e}")))?;

    Ok(date.format("%B %Y").to_string())
}
