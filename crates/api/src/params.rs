// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query-string validation.
//!
//! Empty parameters are treated as absent. Every failure names the
//! offending camelCase parameter.

use std::str::FromStr;

use staffing_domain::{
    DEFAULT_LIMIT, DEFAULT_PAGE, DateRange, FilterOptions, PageRequest, ProfileStage, Purpose,
    parse_date,
};
use time::Date;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::AvailabilityQuery;

/// Returns the parameter's text unless it is missing or blank.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Splits a comma-separated list, dropping blank items.
fn split_list(value: Option<&String>) -> Vec<&str> {
    present(value)
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn parse_number<T: FromStr>(field: &str, value: &str) -> Result<T, ApiError> {
    value.parse::<T>().map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("{field} must be a whole number, got '{value}'"),
    })
}

fn parse_optional_number<T: FromStr>(
    field: &str,
    value: Option<&String>,
) -> Result<Option<T>, ApiError> {
    present(value)
        .map(|text| parse_number(field, text))
        .transpose()
}

/// Parses an enumerated parameter through its wire representation.
fn parse_choice<T>(value: Option<&String>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = staffing_domain::DomainError>,
{
    present(value)
        .map(|text| text.parse::<T>().map_err(translate_domain_error))
        .transpose()
}

/// Parses one calendar date. Timestamps are cut to their date part.
fn parse_calendar_date(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: String::from("Invalid date format. Use ISO 8601 format (YYYY-MM-DD)"),
    })
}

/// Validates the required `startDate`/`endDate` pair.
///
/// # Errors
///
/// Returns `InvalidInput` if either date is missing or unparsable, or if
/// the start falls after the end.
pub fn parse_window(start: Option<&String>, end: Option<&String>) -> Result<DateRange, ApiError> {
    let (Some(start), Some(end)) = (present(start), present(end)) else {
        return Err(ApiError::InvalidInput {
            field: String::from("startDate"),
            message: String::from("startDate and endDate are required"),
        });
    };

    let start: Date = parse_calendar_date("startDate", start)?;
    let end: Date = parse_calendar_date("endDate", end)?;

    DateRange::new(start, end).map_err(translate_domain_error)
}

/// Parses an optional project or batch id.
///
/// # Errors
///
/// Returns `InvalidInput` if the value is not an integer.
pub fn parse_optional_id(field: &str, value: Option<&String>) -> Result<Option<i64>, ApiError> {
    parse_optional_number(field, value)
}

/// Parses the purpose, defaulting to `all`.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown purpose.
pub fn parse_purpose(query: &AvailabilityQuery) -> Result<Purpose, ApiError> {
    Ok(parse_choice(query.purpose.as_ref())?.unwrap_or_default())
}

/// Parses a boolean flag, accepting `true`/`false` and `1`/`0`.
///
/// # Errors
///
/// Returns `InvalidInput` for any other value.
pub fn parse_flag(field: &str, value: Option<&String>, default: bool) -> Result<bool, ApiError> {
    match present(value) {
        None => Ok(default),
        Some("true" | "1") => Ok(true),
        Some("false" | "0") => Ok(false),
        Some(other) => Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} must be true or false, got '{other}'"),
        }),
    }
}

/// Builds the demographic, geographic, sort and page options.
///
/// `page` defaults to 1 and `limit` to 20; limits above 100 are clamped.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed number, an unknown enumerated
/// value, or a zero page or limit. An inverted age range is only detected
/// when the filter is built.
pub fn parse_filter_options(query: &AvailabilityQuery) -> Result<FilterOptions, ApiError> {
    let skill_category_ids: Vec<i64> = split_list(query.skill_category_ids.as_ref())
        .into_iter()
        .map(|id| parse_number("skillCategoryIds", id))
        .collect::<Result<_, _>>()?;

    let stages: Vec<ProfileStage> = split_list(query.stages.as_ref())
        .into_iter()
        .map(|stage| stage.parse::<ProfileStage>().map_err(translate_domain_error))
        .collect::<Result<_, _>>()?;

    let page: u32 = parse_optional_number("page", query.page.as_ref())?.unwrap_or(DEFAULT_PAGE);
    let limit: u32 =
        parse_optional_number("limit", query.limit.as_ref())?.unwrap_or(DEFAULT_LIMIT);

    Ok(FilterOptions {
        availability_status: parse_choice(query.availability_status.as_ref())?
            .unwrap_or_default(),
        skill_category_ids,
        gender: present(query.gender.as_ref()).map(String::from),
        min_age: parse_optional_number("minAge", query.min_age.as_ref())?,
        max_age: parse_optional_number("maxAge", query.max_age.as_ref())?,
        stages,
        districts: split_list(query.districts.as_ref())
            .into_iter()
            .map(String::from)
            .collect(),
        states: split_list(query.states.as_ref())
            .into_iter()
            .map(String::from)
            .collect(),
        search: present(query.search.as_ref()).map(String::from),
        sort_by: parse_choice(query.sort_by.as_ref())?.unwrap_or_default(),
        sort_order: parse_choice(query.sort_order.as_ref())?.unwrap_or_default(),
        page: PageRequest::new(page, limit).map_err(translate_domain_error)?,
    })
}
