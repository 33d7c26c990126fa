// Copyright (c) The imd Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An atomic event symbol.
///
/// `Activity` is a cheap-to-clone interned string: cloning a cluster of
/// activities through the recursive mining driver should not re-allocate the
/// underlying text.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Activity(Arc<str>);

impl Activity {
    /// Creates a new activity from anything convertible to a string slice.
    pub fn new(name: impl AsRef<str>) -> Self {
        Activity(Arc::from(name.as_ref()))
    }

    /// Returns the activity's name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for Activity {
    fn from(s: &str) -> Self {
        Activity::new(s)
    }
}

impl From<String> for Activity {
    fn from(s: String) -> Self {
        Activity(Arc::from(s.as_str()))
    }
}

impl AsRef<str> for Activity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
