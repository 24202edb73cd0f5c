//! Record parsing for ingredients and customers.
//!
//! Two input formats are supported:
//!
//! - **Line format**, one record per line with comma-separated fields and
//!   semicolon-separated lists:
//!   - ingredients: `id,name,Tag;Tag,Category;Category`
//!   - customers: `id,name,description,Size,Like;Like,Dislike;Dislike`
//! - **JSON**, an array of serialized [`Ingredient`] or [`Customer`] values.
//!
//! In the line format, blank lines and lines starting with `#` are ignored,
//! and lines with the wrong number of fields are skipped with a warning. A tag
//! list of `None` (or an empty field) means no tags. Unknown tag, category or
//! size names are errors.
//!
//! Customer lines carry a size but no hungriness; hungriness is rolled from the
//! size with the caller's rng (see [`roll_hungriness`]).

use std::collections::HashSet;
use std::str::FromStr;

use rand::Rng;

use crate::customer::{roll_hungriness, Customer};
use crate::error::LoadError;
use crate::ingredient::Ingredient;
use crate::tags::{Category, Size, Tag};

const INGREDIENT_FIELDS: usize = 4;
const CUSTOMER_FIELDS: usize = 6;

/// Split a `;`-separated list, dropping blanks and the `None` placeholder.
fn list_items(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("none"))
}

fn parse_list<T: FromStr + Eq + std::hash::Hash>(
    field: &str,
    on_unknown: impl Fn(String) -> LoadError,
) -> Result<HashSet<T>, LoadError> {
    list_items(field)
        .map(|item| item.parse::<T>().map_err(|_| on_unknown(item.to_string())))
        .collect()
}

/// Split one record into fields, or `None` if the line is blank, a comment,
/// spans several lines, or has a field count other than `expected`.
fn split_record(line_no: usize, line: &str, expected: usize) -> Option<Vec<&str>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if line.contains('\n') {
        log::warn!("Skipping line {}: record spans several lines", line_no);
        return None;
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != expected {
        log::warn!(
            "Skipping line {}: expected {} fields, found {}",
            line_no,
            expected,
            fields.len()
        );
        return None;
    }
    Some(fields)
}

/// Iterate `(line_number, fields)` over the well-formed records in `text`.
fn records(text: &str, expected: usize) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(move |(idx, line)| {
        split_record(idx + 1, line, expected).map(|fields| (idx + 1, fields))
    })
}

/// Parse one ingredient line.
///
/// Returns `Ok(None)` when the line is blank, a comment, spans several lines,
/// or has the wrong number of fields.
pub fn parse_ingredient_line(line_no: usize, line: &str) -> Result<Option<Ingredient>, LoadError> {
    match split_record(line_no, line, INGREDIENT_FIELDS) {
        Some(fields) => ingredient_from_fields(line_no, &fields).map(Some),
        None => Ok(None),
    }
}

fn ingredient_from_fields(line: usize, fields: &[&str]) -> Result<Ingredient, LoadError> {
    let id = fields[0].to_string();
    let tags = parse_list::<Tag>(fields[2], |name| LoadError::UnknownTag { line, name })?;
    let categories =
        parse_list::<Category>(fields[3], |name| LoadError::UnknownCategory { line, name })?;
    if categories.is_empty() {
        return Err(LoadError::MissingCategory { line, id });
    }

    Ok(Ingredient {
        id,
        name: fields[1].to_string(),
        tags,
        categories,
    })
}

/// Parse all ingredient records from line-format text.
pub fn parse_ingredients(text: &str) -> Result<Vec<Ingredient>, LoadError> {
    records(text, INGREDIENT_FIELDS)
        .map(|(line, fields)| ingredient_from_fields(line, &fields))
        .collect()
}

/// Parse one customer line, rolling hungriness from the size.
///
/// Returns `Ok(None)` when the line is blank, a comment, spans several lines,
/// or has the wrong number of fields.
pub fn parse_customer_line(
    line_no: usize,
    line: &str,
    rng: &mut impl Rng,
) -> Result<Option<Customer>, LoadError> {
    match split_record(line_no, line, CUSTOMER_FIELDS) {
        Some(fields) => customer_from_fields(line_no, &fields, rng).map(Some),
        None => Ok(None),
    }
}

fn customer_from_fields(
    line: usize,
    fields: &[&str],
    rng: &mut impl Rng,
) -> Result<Customer, LoadError> {
    let size = Size::from_str(fields[3]).map_err(|_| LoadError::UnknownSize {
        line,
        name: fields[3].to_string(),
    })?;
    let likes = parse_list::<Tag>(fields[4], |name| LoadError::UnknownTag { line, name })?;
    let dislikes = parse_list::<Tag>(fields[5], |name| LoadError::UnknownTag { line, name })?;

    Ok(Customer::new(fields[0], fields[1])
        .with_description(fields[2])
        .with_size(size)
        .with_likes(likes)
        .with_dislikes(dislikes)
        .with_hungriness(roll_hungriness(size, rng)))
}

/// Parse all customer records from line-format text.
pub fn parse_customers(text: &str, rng: &mut impl Rng) -> Result<Vec<Customer>, LoadError> {
    let mut customers = Vec::new();
    for (line, fields) in records(text, CUSTOMER_FIELDS) {
        customers.push(customer_from_fields(line, &fields, rng)?);
    }
    Ok(customers)
}

/// Parse a JSON array of ingredients.
pub fn ingredients_from_json(json: &str) -> Result<Vec<Ingredient>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of customers. Hungriness is taken as given, either as a
/// level (`0`–`3`) or a name (`"Famished"`).
pub fn customers_from_json(json: &str) -> Result<Vec<Customer>, LoadError> {
    Ok(serde_json::from_str(json)?)
}
