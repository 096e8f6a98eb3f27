pub use toad_msg::Code;

use crate::code;

// 2.xx
code!(rfc7252("5.9.1.4") CHANGED = 2*04);
code!(rfc7252("5.9.1.5") CONTENT = 2*05);

// 4.xx
code!(rfc7252("5.9.2.1") BAD_REQUEST = 4*00);
code!(rfc7252("5.9.2.5") NOT_FOUND   = 4*04);

/// Short human-readable name of a response code, for logging
pub(crate) fn to_human(code: Code) -> &'static str {
  match (code.class, code.detail) {
    | (2, 4) => "2.04 Changed",
    | (2, 5) => "2.05 Content",
    | (4, 0) => "4.00 Bad Request",
    | (4, 4) => "4.04 Not Found",
    | (2, _) => "2.xx",
    | (4, _) => "4.xx",
    | (5, _) => "5.xx",
    | _ => "?.??",
  }
}
