//! Dot-notation path types for nested value access.
//!
//! Paths address locations inside nested [`Map`](crate::value::Map) and
//! [`Value`](crate::value::Value) structures using `.`-separated segments,
//! e.g. `"products.desk.price"`. The [`Path`]/[`PathBuf`] pair follows the
//! same borrowed/owned pattern as `std::path::Path`/`PathBuf`.
//!
//! Construction is infallible: input strings are normalized by dropping
//! empty segments, so `".user..name."` and `"user.name"` address the same
//! location.
//!
//! ```
//! use dotnest::value::PathBuf;
//! use std::str::FromStr;
//!
//! let path = PathBuf::from_str("user.profile.name")?;
//! assert_eq!(path.segments().collect::<Vec<_>>(), ["user", "profile", "name"]);
//!
//! let built = PathBuf::new().push("user").push("profile.name");
//! assert_eq!(built.as_str(), "user.profile.name");
//! # Ok::<(), std::convert::Infallible>(())
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Normalizes a path string by dropping empty segments.
///
/// - `""` stays empty (addresses the whole container)
/// - `".user"` / `"user."` become `"user"`
/// - `"user..profile"` becomes `"user.profile"`
/// - `"..."` collapses to the empty path
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// An owned dot-notation path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed dot-notation path.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a path by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        Self {
            inner: normalize(path),
        }
    }

    /// Appends a path fragment, normalizing it first.
    ///
    /// Accepts both plain segments and dotted fragments:
    ///
    /// ```
    /// # use dotnest::value::PathBuf;
    /// let path = PathBuf::new().push("user").push("profile.name");
    /// assert_eq!(path.as_str(), "user.profile.name");
    /// ```
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let normalized = normalize(fragment.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Returns the parent path, or `None` if this path has at most one segment.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind('.').map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }
}

impl Path {
    /// Creates a `Path` directly from a string slice.
    ///
    /// The string is taken as-is; callers that may hold un-normalized input
    /// should go through [`PathBuf::normalize`] instead. Empty segments in a
    /// raw path are still skipped during traversal because [`segments`]
    /// filters them.
    ///
    /// [`segments`]: Path::segments
    pub fn from_str_ref(s: &str) -> &Path {
        // SAFETY: Path is a repr-transparent wrapper around str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the last segment, or `None` if the path is empty.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments().next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::from_str_ref(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::from_str_ref(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::from_str_ref(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a path from literal or runtime fragments.
///
/// - `path!()` - empty `PathBuf`
/// - `path!("user.profile.name")` - single literal, borrowed `&Path`
/// - `path!("user", "profile", base)` - joined fragments, `PathBuf`
#[macro_export]
macro_rules! path {
    () => {
        $crate::value::PathBuf::new()
    };

    ($single:literal) => {
        $crate::value::Path::from_str_ref($single)
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::value::PathBuf::new().push($first);
        $(
            let path = path.push($rest);
        )*
        path
    }};
}
