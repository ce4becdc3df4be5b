//! Structural validation of query notation.
//!
//! Runs before any transformation and never looks at dialects. A query
//! either passes completely or fails with the first violated rule.

use serde::Deserialize;
use serde_json::Value;

use crate::cqn::{Delete, Insert, Query, STATEMENT_KEYS, Select, Source, Statement, Update, Upsert};
use crate::error::ValidationError;

/// Check the shape of an already-decoded query.
pub fn validate(query: &Query) -> Result<(), ValidationError> {
    let keys = query.keys();
    if keys.len() != 1 {
        return Err(ValidationError::KeyCount);
    }
    if let Some(key) = query.other.keys().next() {
        return Err(ValidationError::UnknownStatement(key.clone()));
    }

    match query.statement() {
        Some(Statement::Select(select)) => validate_select(select),
        Some(Statement::Insert(insert)) => validate_insert(insert),
        Some(Statement::Update(update)) => validate_update(update),
        Some(Statement::Delete(delete)) => validate_delete(delete),
        Some(Statement::Upsert(upsert)) => validate_upsert(upsert),
        None => Err(ValidationError::KeyCount),
    }
}

/// Check raw JSON, decode it, then run [`validate`] on the result.
///
/// Top-level rules are checked on the raw value first so that a query with
/// the wrong key set is reported as such, not as a decode failure.
pub fn validate_value(value: &Value) -> Result<Query, ValidationError> {
    let object = value.as_object().ok_or(ValidationError::NotAnObject)?;
    if object.len() != 1 {
        return Err(ValidationError::KeyCount);
    }
    if let Some((key, body)) = object.iter().next() {
        if !STATEMENT_KEYS.contains(&key.as_str()) {
            return Err(ValidationError::UnknownStatement(key.clone()));
        }
        if !body.is_object() {
            return Err(ValidationError::Malformed(format!("{key} must be an object")));
        }
    }

    let query = Query::deserialize(value).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    validate(&query)?;
    Ok(query)
}

fn validate_select(select: &Select) -> Result<(), ValidationError> {
    let from = select.from.as_ref().ok_or(ValidationError::MissingClause {
        statement: "SELECT",
        clause: "from",
    })?;
    validate_source(from)
}

fn validate_insert(insert: &Insert) -> Result<(), ValidationError> {
    if insert.into.is_none() {
        return Err(ValidationError::MissingClause {
            statement: "INSERT",
            clause: "into",
        });
    }
    if insert.payload.is_empty() {
        return Err(ValidationError::EmptyPayload("INSERT"));
    }
    Ok(())
}

fn validate_update(update: &Update) -> Result<(), ValidationError> {
    if update.update.is_none() {
        return Err(ValidationError::MissingClause {
            statement: "UPDATE",
            clause: "update",
        });
    }
    if update.set.as_ref().is_none_or(|set| set.is_empty()) {
        return Err(ValidationError::MissingClause {
            statement: "UPDATE",
            clause: "set",
        });
    }
    Ok(())
}

fn validate_delete(delete: &Delete) -> Result<(), ValidationError> {
    if delete.delete.is_none() {
        return Err(ValidationError::MissingClause {
            statement: "DELETE",
            clause: "delete",
        });
    }
    Ok(())
}

fn validate_upsert(upsert: &Upsert) -> Result<(), ValidationError> {
    if upsert.target().is_none() {
        return Err(ValidationError::MissingUpsertTarget);
    }
    if upsert.payload.is_empty() {
        return Err(ValidationError::EmptyPayload("UPSERT"));
    }
    Ok(())
}

fn validate_source(source: &Source) -> Result<(), ValidationError> {
    match source {
        Source::Ref(_) | Source::Select(_) => Ok(()),
        Source::Join(join) => {
            if join.args.len() != 2 {
                return Err(ValidationError::JoinArity(join.args.len()));
            }
            join.args.iter().try_for_each(validate_source)
        }
        Source::Other(_) => Err(ValidationError::InvalidSource),
    }
}
