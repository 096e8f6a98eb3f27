/// Maximum number of segments in a resource [`Path`]
pub const MAX_SEGMENTS: usize = 3;

/// Path of a resource, as a fixed sequence of segments.
///
/// Two paths are equal when they have the same number of segments
/// and every segment is equal (case-sensitive).
///
/// ```
/// use toad_node::server::path::Path;
///
/// const DEWPOINT: Path = Path::new(&["humidity", "dewpoint"]);
///
/// assert!(DEWPOINT.matches(&["humidity", "dewpoint"]));
/// assert!(!DEWPOINT.matches(&["humidity"]));
/// assert!(!DEWPOINT.matches(&["humidity", "DewPoint"]));
/// assert_eq!(DEWPOINT.to_string(), "/humidity/dewpoint");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Path(&'static [&'static str]);

impl Path {
  /// Declare a path.
  ///
  /// Panics (at compile time, in a `const`) if given more than
  /// [`MAX_SEGMENTS`] segments.
  pub const fn new(segments: &'static [&'static str]) -> Self {
    assert!(segments.len() <= MAX_SEGMENTS,
            "resource paths have at most MAX_SEGMENTS segments");
    Path(segments)
  }

  /// The segments of this path
  pub fn segments(&self) -> &'static [&'static str] {
    self.0
  }

  /// Does this path equal a request's Uri-Path segments?
  ///
  /// Paths of different lengths are rejected without looking at segments.
  pub fn matches<S: AsRef<str>>(&self, segments: &[S]) -> bool {
    self.0.len() == segments.len()
    && self.0
           .iter()
           .zip(segments)
           .all(|(a, b)| *a == b.as_ref())
  }
}

impl core::fmt::Display for Path {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if self.0.is_empty() {
      return write!(f, "/");
    }

    self.0.iter().try_for_each(|seg| write!(f, "/{}", seg))
  }
}
