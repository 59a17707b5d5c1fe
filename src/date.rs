//! Date-derived tokens.
//!
//! A seed word may carry a [`hint::DateHint`] of up to three numeric
//! components (day, month, year). Each component is expanded into its
//! zero-padding variants, the composer concatenates every ordering of every
//! non-empty subset of the supplied components, and the merger glues the
//! resulting date tokens before and after each word variant.
//!
//! ```text
//! DateHint → DateComponentExpander (x3) → DateVariantComposer → DateMerger
//! ```
//!
//! # Examples
//!
//! ```
//! use passmith::date::composer::DateVariantComposer;
//! use passmith::date::hint::DateHint;
//!
//! let hint = DateHint::new("1", "2", "").unwrap();
//! let dates = DateVariantComposer::new().compose(&hint).unwrap();
//!
//! assert!(dates.contains("0102"));
//! assert!(dates.contains("201"));
//! ```

pub mod component;
pub mod composer;
pub mod hint;
pub mod merge;
