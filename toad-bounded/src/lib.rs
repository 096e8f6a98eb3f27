//! This microcrate provides [`Bounded`], a stack-allocated UTF-8 buffer
//! implementing [`core::fmt::Write`] that truncates instead of overrunning
//! its capacity.

// docs
#![doc(html_root_url = "https://docs.rs/toad-bounded/0.0.0")]
#![cfg_attr(any(docsrs, feature = "docs"), feature(doc_cfg))]
// -
// style
#![allow(clippy::unused_unit)]
// -
// deny
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(missing_copy_implementations)]
#![cfg_attr(not(test), deny(unsafe_code))]
// -
// warnings
#![cfg_attr(not(test), warn(unreachable_pub))]
// -
// features
#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt::Display;
use core::ops::Deref;

use tinyvec::ArrayVec;

/// What happened to a string written to a [`Bounded`] buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Written {
  /// The whole string was written
  All,
  /// Only the first `n` bytes of the string were written,
  /// and the buffer will refuse any further writes.
  Truncated(usize),
}

impl Written {
  /// Was any part of the string dropped?
  pub fn is_truncated(&self) -> bool {
    matches!(self, Written::Truncated(_))
  }
}

/// Stack-allocated UTF-8 buffer with a fixed capacity of `N` bytes.
///
/// Writes never go past `N`. A write that does not fit is cut at the last
/// UTF-8 character boundary that does, and from then on the buffer is
/// exhausted: [`Bounded::remaining`] is zero and every later write is
/// refused, so the contents are always a prefix of what was written.
///
/// ```
/// use core::fmt::Write;
///
/// use toad_bounded::{Bounded, Written};
///
/// let mut buf = Bounded::<8>::new();
///
/// write!(buf, "{}.{:02}", 21, 34).ok();
/// assert_eq!(buf.as_str(), "21.34");
/// assert_eq!(buf.remaining(), 3);
///
/// assert_eq!(buf.push_str(" Pa!!"), Written::Truncated(3));
/// assert_eq!(buf.as_str(), "21.34 Pa");
/// assert_eq!(buf.push_str("x"), Written::Truncated(0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounded<const N: usize> {
  buf: ArrayVec<[u8; N]>,
  truncated: bool,
}

impl<const N: usize> Bounded<N> {
  /// Create an empty buffer
  pub fn new() -> Self {
    Default::default()
  }

  /// Create a buffer from the output of [`format_args`], truncating if necessary
  ///
  /// ```
  /// use toad_bounded::Bounded;
  ///
  /// assert_eq!(Bounded::<4>::fmt(format_args!("{}%", 100)), "100%");
  /// assert_eq!(Bounded::<3>::fmt(format_args!("{}%", 100)), "100");
  /// ```
  pub fn fmt(args: core::fmt::Arguments) -> Self {
    let mut b = Self::new();
    core::fmt::Write::write_fmt(&mut b, args).ok();
    b
  }

  /// This buffer's capacity, in bytes
  pub fn capacity(&self) -> usize {
    N
  }

  /// Number of bytes that can still be written.
  ///
  /// Clamped at zero, and zero once a write has been truncated.
  pub fn remaining(&self) -> usize {
    if self.truncated {
      0
    } else {
      N.saturating_sub(self.buf.len())
    }
  }

  /// Has any write to this buffer been truncated?
  pub fn is_truncated(&self) -> bool {
    self.truncated
  }

  /// Write as much of `s` as fits
  pub fn push_str(&mut self, s: &str) -> Written {
    let room = self.remaining();

    if s.len() <= room {
      self.buf.extend_from_slice(s.as_bytes());
      return Written::All;
    }

    let mut n = room;
    while !s.is_char_boundary(n) {
      n -= 1;
    }

    self.buf.extend_from_slice(&s.as_bytes()[..n]);
    self.truncated = true;
    Written::Truncated(n)
  }

  /// Write a single character if it fits
  pub fn push(&mut self, c: char) -> Written {
    self.push_str(c.encode_utf8(&mut [0u8; 4]))
  }

  /// Empty the buffer, making its whole capacity writable again
  pub fn clear(&mut self) {
    self.buf.clear();
    self.truncated = false;
  }

  /// The buffer contents as a string slice
  pub fn as_str(&self) -> &str {
    core::str::from_utf8(&self.buf).unwrap_or_default()
  }

  /// The buffer contents as bytes
  pub fn as_bytes(&self) -> &[u8] {
    &self.buf
  }
}

impl<const N: usize> core::fmt::Write for Bounded<N> {
  fn write_str(&mut self, s: &str) -> core::fmt::Result {
    self.push_str(s);
    Ok(())
  }
}

impl<const N: usize> Display for Bounded<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl<const N: usize> Deref for Bounded<N> {
  type Target = [u8];

  fn deref(&self) -> &[u8] {
    &self.buf
  }
}

impl<const N: usize> AsRef<str> for Bounded<N> {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl<const N: usize> AsRef<[u8]> for Bounded<N> {
  fn as_ref(&self) -> &[u8] {
    &self.buf
  }
}

impl<'a, const N: usize> From<&'a str> for Bounded<N> {
  fn from(s: &'a str) -> Self {
    let mut b = Self::new();
    b.push_str(s);
    b
  }
}

impl<'a, const N: usize> PartialEq<&'a str> for Bounded<N> {
  fn eq(&self, other: &&'a str) -> bool {
    self.as_str() == *other
  }
}

impl<const N: usize> PartialEq<str> for Bounded<N> {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

#[cfg(test)]
mod tests {
  use core::fmt::Write;

  use super::*;

  #[test]
  fn fits() {
    let mut b = Bounded::<16>::new();
    assert_eq!(b.push_str("hello"), Written::All);
    assert_eq!(b.push(','), Written::All);
    assert_eq!(b, "hello,");
    assert_eq!(b.remaining(), 10);
    assert!(!b.is_truncated());
  }

  #[test]
  fn exactly_full_is_not_truncated() {
    let mut b = Bounded::<5>::new();
    assert_eq!(b.push_str("hello"), Written::All);
    assert_eq!(b.remaining(), 0);
    assert!(!b.is_truncated());
    assert_eq!(b.push_str(""), Written::All);
  }

  #[test]
  fn truncates_on_char_boundary() {
    // "12.34" + U+00B0 is 7 bytes; only the first byte of the degree sign fits
    let mut b = Bounded::<6>::new();
    write!(b, "12.34\u{b0}C").unwrap();
    assert_eq!(b.as_str(), "12.34");
    assert_eq!(b.len(), 5);
    assert!(b.is_truncated());
  }

  #[test]
  fn refuses_writes_once_exhausted() {
    let mut b = Bounded::<4>::new();
    assert_eq!(b.push_str("abc\u{b0}"), Written::Truncated(3));
    assert_eq!(b.remaining(), 0);
    assert_eq!(b.push_str("d"), Written::Truncated(0));
    assert_eq!(b.push('e'), Written::Truncated(0));
    assert_eq!(b, "abc");
  }

  #[test]
  fn zero_capacity() {
    let mut b = Bounded::<0>::new();
    assert_eq!(b.push_str("a"), Written::Truncated(0));
    assert_eq!(b.as_str(), "");
    assert_eq!(b.remaining(), 0);
  }

  #[test]
  fn clear_resets_truncation() {
    let mut b = Bounded::<2>::from("abc");
    assert!(b.is_truncated());
    b.clear();
    assert!(!b.is_truncated());
    assert_eq!(b.remaining(), 2);
    assert_eq!(b.push_str("ok"), Written::All);
  }

  #[test]
  fn display() {
    let b = Bounded::<8>::fmt(format_args!("{}-{}", 1, 2));
    assert_eq!(format!("{}", b), "1-2");
  }
}
