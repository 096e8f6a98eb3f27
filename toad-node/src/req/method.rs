use toad_msg::Code;

use crate::code;

/// Request method
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Method(pub(crate) Code);

impl Method {
  code!(rfc7252("4.1")   EMPTY  = Method(0*00));
  code!(rfc7252("5.8.1") GET    = Method(0*01));
  code!(rfc7252("5.8.2") POST   = Method(0*02));
  code!(rfc7252("5.8.3") PUT    = Method(0*03));
  code!(rfc7252("5.8.4") DELETE = Method(0*04));

  /// Get the message code of this method
  pub fn code(&self) -> Code {
    self.0
  }
}

impl From<Code> for Method {
  fn from(c: Code) -> Self {
    Method(c)
  }
}

impl core::fmt::Display for Method {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.0 {
      | Code { class: 0, detail: 0 } => write!(f, "EMPTY"),
      | Code { class: 0, detail: 1 } => write!(f, "GET"),
      | Code { class: 0, detail: 2 } => write!(f, "POST"),
      | Code { class: 0, detail: 3 } => write!(f, "PUT"),
      | Code { class: 0, detail: 4 } => write!(f, "DELETE"),
      | Code { class, detail } => write!(f, "{}.{:02}", class, detail),
    }
  }
}
