// src/process/build.rs

use crate::error::ArityError;
use crate::schema::Record;

/// Build one record from a line's tokens.
///
/// Tokens beyond `R::ELEMENT_COUNT` are dropped; fewer than that is an
/// [`ArityError`]. Each remaining token is converted per its column kind.
pub fn build<R: Record>(mut fields: Vec<&str>) -> Result<R, ArityError> {
    fields.truncate(R::ELEMENT_COUNT);
    if fields.len() != R::ELEMENT_COUNT {
        return Err(ArityError {
            expected: R::ELEMENT_COUNT,
            found: fields.len(),
        });
    }
    Ok(R::from_fields(&fields))
}
