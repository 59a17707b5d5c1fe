//! Special character augmentation.
//!
//! Each special character is applied on its own, never combined with another
//! special character in the same string. For every variant `v` and every
//! character `c` the augmenter adds `cv`, `vc` and `cvc`, keeping `v` itself.
//! Output size grows by a factor of at most `1 + 3 * chars.len()`.
//!
//! The augmenter enforces no limit on the number of characters; callers that
//! want one apply it when building [`crate::seed::SpecialChars`].

use crate::error::Result;
use crate::expand::{Expander, fan_out};
use crate::variant::VariantSet;

/// Expander adding special characters as prefix, suffix, or both.
#[derive(Clone, Debug, Default)]
pub struct SpecialCharAugmenter {
    chars: Vec<char>,
    parallel: bool,
}

impl SpecialCharAugmenter {
    pub fn new(chars: Vec<char>) -> Self {
        SpecialCharAugmenter {
            chars,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    fn augment(&self, variant: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(1 + 3 * self.chars.len());
        out.push(variant.to_string());
        for &ch in &self.chars {
            out.push(format!("{ch}{variant}"));
            out.push(format!("{variant}{ch}"));
            out.push(format!("{ch}{variant}{ch}"));
        }
        out
    }
}

impl Expander for SpecialCharAugmenter {
    fn expand(&self, variants: VariantSet) -> Result<VariantSet> {
        if self.chars.is_empty() {
            return Ok(variants);
        }
        Ok(fan_out(&variants, self.parallel, |variant| self.augment(variant)))
    }

    fn name(&self) -> &'static str {
        "special_chars"
    }
}
