//! Zero-padding variants of a single date component.

use crate::error::{PassmithError, Result};
use crate::variant::VariantSet;

/// Maximum number of digits in a date component.
pub const MAX_COMPONENT_DIGITS: usize = 2;

/// Check that a component is empty or 1 to 2 ASCII digits.
pub fn validate_component(component: &str) -> Result<()> {
    if component.is_empty() {
        return Ok(());
    }
    if !component.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(PassmithError::invalid_date_component(
            component,
            "must be numeric",
        ));
    }
    if component.len() > MAX_COMPONENT_DIGITS {
        return Err(PassmithError::invalid_date_component(
            component,
            "must be 1 or 2 digits",
        ));
    }
    Ok(())
}

/// Expands a day, month or year component into its written forms.
///
/// - `""` → `{}` (component not supplied)
/// - `"5"` → `{"5", "05"}`
/// - `"05"` / `"12"` → unchanged, two-digit values have no alternate form
/// - anything else → [`PassmithError::InvalidDateComponent`]
#[derive(Clone, Debug, Default)]
pub struct DateComponentExpander;

impl DateComponentExpander {
    pub fn new() -> Self {
        DateComponentExpander
    }

    pub fn expand(&self, component: &str) -> Result<VariantSet> {
        validate_component(component)?;

        let mut variants = VariantSet::with_capacity(2);
        match component.len() {
            0 => {}
            1 => {
                variants.insert(component);
                variants.insert(format!("0{component}"));
            }
            _ => {
                variants.insert(component);
            }
        }
        Ok(variants)
    }
}
