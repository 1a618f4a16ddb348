// Copyright 2025 Cowboy AI, LLC.

use std::fmt::Display;
use std::hash::Hash;

/// Capabilities required of a category element.
///
/// Equality and hashing must be stable for the lifetime of any category the
/// element is stored in. The display form is only used for export labels.
pub trait Element: Eq + Hash + Clone + Display {}

impl<T> Element for T where T: Eq + Hash + Clone + Display {}
