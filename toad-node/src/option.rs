/// Content-Format
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFormat {
  /// `text/plain; charset=utf-8`
  Text,
  /// `application/link-format`
  LinkFormat,
  /// Another content format
  Other(u16),
}

impl ContentFormat {
  /// Convert this content format to the value of a Content-Format option.
  ///
  /// Option values are unsigned integers encoded in as few bytes as possible,
  /// so `text/plain` (0) is the empty value.
  ///
  /// ```
  /// use toad_node::ContentFormat;
  ///
  /// assert!(ContentFormat::Text.bytes().is_empty());
  /// assert_eq!(ContentFormat::LinkFormat.bytes().as_slice(), &[40][..]);
  /// assert_eq!(ContentFormat::Other(1000).bytes().as_slice(), &[0x03, 0xE8][..]);
  /// ```
  pub fn bytes(&self) -> tinyvec::ArrayVec<[u8; 2]> {
    let n = u16::from(self);
    n.to_be_bytes()
     .into_iter()
     .skip_while(|b| *b == 0)
     .collect()
  }
}

impl<'a> From<&'a ContentFormat> for u16 {
  fn from(f: &'a ContentFormat) -> Self {
    use ContentFormat::*;
    match *f {
      | Text => 0,
      | LinkFormat => 40,
      | Other(n) => n,
    }
  }
}

impl From<u16> for ContentFormat {
  fn from(n: u16) -> Self {
    match n {
      | 0 => ContentFormat::Text,
      | 40 => ContentFormat::LinkFormat,
      | n => ContentFormat::Other(n),
    }
  }
}
