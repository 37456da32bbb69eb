// src/seed/parse.rs

use tracing::{debug, instrument, trace, warn};

use super::role::Role;
use super::types::RoleAssignmentRow;

/// Minimum columns a tuple needs: id, user_id, organization_id, role_id, is_active.
pub const MIN_FIELDS: usize = 5;

/// Tuples of a VALUES payload, split into rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRows {
    pub rows: Vec<RoleAssignmentRow>,
    /// Tuples seen, including the malformed ones.
    pub total: usize,
    pub malformed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteState {
    Outside,
    Inside,
}

/// Split the VALUES payload into one string per tuple. A tuple starts on a
/// line beginning with `(`; continuation lines are joined with a space.
pub fn split_tuples(values: &str) -> Vec<String> {
    let mut tuples = Vec::new();
    let mut current = String::new();

    for line in values.trim().split('\n') {
        let line = line.trim();
        if line.starts_with('(') {
            if !current.is_empty() {
                tuples.push(std::mem::take(&mut current));
            }
            current.push_str(line);
        } else {
            current.push(' ');
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        tuples.push(current);
    }
    tuples
}

/// Strip the separating comma and the outer parentheses of a tuple.
pub fn tuple_body(tuple: &str) -> &str {
    let mut body = tuple.trim();
    if let Some(stripped) = body.strip_suffix(',') {
        body = stripped;
    }
    if body.len() >= 2 && body.starts_with('(') && body.ends_with(')') {
        body = &body[1..body.len() - 1];
    }
    body
}

/// Split a tuple body on commas that sit outside single-quoted literals.
/// Fields come back whitespace-trimmed; an empty trailing field is dropped.
pub fn split_fields(body: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Outside;

    for ch in body.chars() {
        match (state, ch) {
            (QuoteState::Outside, '\'') => {
                state = QuoteState::Inside;
                current.push(ch);
            }
            (QuoteState::Inside, '\'') => {
                state = QuoteState::Outside;
                current.push(ch);
            }
            (QuoteState::Outside, ',') => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        fields.push(current.trim().to_string());
    }
    fields
}

fn unquote(field: &str) -> &str {
    field.trim().trim_matches('\'')
}

/// Parse one tuple; `None` when it has fewer than [`MIN_FIELDS`] columns.
pub fn parse_tuple(tuple: &str, position: usize) -> Option<RoleAssignmentRow> {
    let body = tuple_body(tuple);
    let mut fields = split_fields(body);
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let extra = fields.split_off(MIN_FIELDS);
    let role_id = unquote(&fields[3]).to_string();
    Some(RoleAssignmentRow {
        id: unquote(&fields[0]).to_string(),
        user_id: unquote(&fields[1]).to_string(),
        organization_id: unquote(&fields[2]).to_string(),
        role: Role::from_id(&role_id),
        role_id,
        is_active: unquote(&fields[4]).eq_ignore_ascii_case("true"),
        extra,
        original: body.to_string(),
        position,
    })
}

/// Parse every tuple of a VALUES payload, dropping malformed ones.
#[instrument(level = "debug", skip(values), fields(values_len = values.len()))]
pub fn parse_rows(values: &str) -> ParsedRows {
    let tuples = split_tuples(values);
    let mut parsed = ParsedRows {
        total: tuples.len(),
        ..ParsedRows::default()
    };

    for (position, tuple) in tuples.iter().enumerate() {
        match parse_tuple(tuple, position) {
            Some(row) => {
                trace!(id = %row.id, role = row.role.as_str(), active = row.is_active, "parsed row");
                parsed.rows.push(row);
            }
            None => {
                warn!(position, tuple = %tuple, "dropping tuple with fewer than {} fields", MIN_FIELDS);
                parsed.malformed += 1;
            }
        }
    }

    debug!(
        total = parsed.total,
        malformed = parsed.malformed,
        "parsed VALUES payload"
    );
    parsed
}
