//! Pure plan updates. Each function takes the current plan by reference and
//! returns a new one; the input is left untouched.

use crate::error::CoreError;
use crate::model::Plan;

/// Append `text` to the list at `at`.
///
/// `None` and `Some("")` stand for cancelled input and return an equal plan.
pub fn add_item<P: Plan>(plan: &P, at: P::Location, text: Option<&str>) -> P {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        tracing::debug!(location = %at, "No item text, nothing added");
        return plan.clone();
    };
    let mut next = plan.clone();
    next.items_mut(at).push(text.to_string());
    next
}

/// Remove the item at position `index` of the list at `at`.
///
/// A negative or too large index leaves the plan unchanged.
pub fn delete_item<P: Plan>(plan: &P, at: P::Location, index: i64) -> P {
    match try_delete_item(plan, at, index) {
        Ok(next) => next,
        Err(e) => {
            tracing::debug!("{e}, nothing removed");
            plan.clone()
        }
    }
}

/// Like [`delete_item`], but reports a bad index as
/// [`CoreError::IndexOutOfRange`].
pub fn try_delete_item<P: Plan>(plan: &P, at: P::Location, index: i64) -> Result<P, CoreError> {
    let len = plan.items(at).len();
    let position = usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| CoreError::IndexOutOfRange {
            location: at.to_string(),
            index,
            len,
        })?;
    let mut next = plan.clone();
    next.items_mut(at).remove(position);
    Ok(next)
}
