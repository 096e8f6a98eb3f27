use core::fmt::Write;

use toad_bounded::Bounded;

use crate::req::Request;
use crate::resp::{code, Response};

pub(crate) type Summary = Bounded<64>;

pub(crate) fn req_summary(req: &Request) -> Summary {
  let mut buf = Summary::new();
  write!(buf, "{:?} {} /", req.ty, req.method).ok();

  req.path().enumerate().for_each(|(ix, seg)| {
                           if ix > 0 {
                             buf.push('/');
                           }
                           buf.push_str(seg);
                         });

  write!(buf, " with {} byte payload", req.payload.len()).ok();
  buf
}

pub(crate) fn resp_summary(rep: &Response<'_>) -> Summary {
  let mut buf = Summary::new();
  write!(buf,
         "{:?} {} with {} byte payload",
         rep.ty,
         code::to_human(rep.code),
         rep.payload.len()).ok();
  buf
}
