use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::core::error::AppError;
use crate::features::mentees::dto::{ListMenteesQuery, MenteeFilter, MenteeSummaryDto};

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    HouseRole,
    ResponseCount,
    /// Any other value; results keep the store's order.
    Unrecognized,
}

impl SortKey {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("name") => Self::Name,
            Some("house_role") => Self::HouseRole,
            Some("response_count") => Self::ResponseCount,
            Some(_) => Self::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only `desc` flips the order.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenteeListOptions {
    pub filter: MenteeFilter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl Default for MenteeListOptions {
    fn default() -> Self {
        Self {
            filter: MenteeFilter::default(),
            sort_key: SortKey::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

impl From<ListMenteesQuery> for MenteeListOptions {
    fn from(query: ListMenteesQuery) -> Self {
        Self {
            filter: MenteeFilter {
                house: query.house.filter(|house| !house.is_empty()),
                search: normalise_search(query.search.as_deref()),
            },
            sort_key: SortKey::parse(query.sort_by.as_deref()),
            sort_order: SortOrder::parse(query.sort_order.as_deref()),
        }
    }
}

pub fn normalise_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
}

/// Stable sort; equal keys keep their relative order in both directions.
pub fn sort_mentees(mentees: &mut [MenteeSummaryDto], key: SortKey, order: SortOrder) {
    let compare: fn(&MenteeSummaryDto, &MenteeSummaryDto) -> Ordering = match key {
        SortKey::Name => compare_names,
        SortKey::HouseRole => compare_houses,
        SortKey::ResponseCount => compare_counts,
        SortKey::Unrecognized => return,
    };

    match order {
        SortOrder::Asc => mentees.sort_by(compare),
        SortOrder::Desc => mentees.sort_by(|a, b| compare(b, a)),
    }
}

fn compare_names(a: &MenteeSummaryDto, b: &MenteeSummaryDto) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn compare_houses(a: &MenteeSummaryDto, b: &MenteeSummaryDto) -> Ordering {
    house_sort_key(a).cmp(&house_sort_key(b))
}

fn compare_counts(a: &MenteeSummaryDto, b: &MenteeSummaryDto) -> Ordering {
    a.response_count.cmp(&b.response_count)
}

fn house_sort_key(mentee: &MenteeSummaryDto) -> String {
    mentee
        .house_role
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
}

pub fn collapse_house_roles<I>(roles: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    roles
        .into_iter()
        .flatten()
        .filter(|role| !role.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Parses a stored timestamp. Values without an offset are taken as UTC.
pub fn parse_created_at(raw: &str) -> Result<DateTime<FixedOffset>, AppError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed);
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| AppError::internal(format!("invalid created_at timestamp: {raw}")))
}

/// `created_at` for the wire; missing values become the current time.
pub fn resolve_created_at(raw: Option<&str>) -> Result<DateTime<FixedOffset>, AppError> {
    match raw.filter(|value| !value.is_empty()) {
        Some(value) => parse_created_at(value),
        None => Ok(Utc::now().fixed_offset()),
    }
}
