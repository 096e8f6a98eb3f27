use toad_msg::{Code, Id, Token, Type};

use crate::req::Request;
use crate::ContentFormat;

/// Response codes
pub mod code;

/// What a resource produced for a request: a code, an optional
/// Content-Format and a body.
///
/// The body usually borrows the dispatcher's scratch buffer,
/// so a `Reply` never outlives the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reply<'a> {
  /// Response code
  pub code: Code,
  /// Content-Format option, if any
  pub content_format: Option<ContentFormat>,
  /// Response body
  pub payload: &'a [u8],
}

impl<'a> Reply<'a> {
  /// 2.05 CONTENT
  pub fn content(content_format: ContentFormat, payload: &'a [u8]) -> Self {
    Self { code: code::CONTENT,
           content_format: Some(content_format),
           payload }
  }

  /// 2.04 CHANGED with a `text/plain` body
  pub fn changed(payload: &'a [u8]) -> Self {
    Self { code: code::CHANGED,
           content_format: Some(ContentFormat::Text),
           payload }
  }

  /// A reply with no body and no Content-Format
  pub fn empty(code: Code) -> Self {
    Self { code,
           content_format: None,
           payload: &[] }
  }
}

/// A response ready to be handed to a [`Codec`](crate::codec::Codec)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response<'a> {
  /// see [`Type`]
  pub ty: Type,
  /// see [`Id`]
  pub id: Id,
  /// see [`Token`]
  pub token: Token,
  /// Response code
  pub code: Code,
  /// Content-Format option, if any
  pub content_format: Option<ContentFormat>,
  /// Response body
  pub payload: &'a [u8],
}

impl<'a> Response<'a> {
  /// Piggy-back `reply` on the acknowledgement of `req`.
  ///
  /// Confirmable requests are answered with an `ACK`,
  /// everything else with a `NON`. The message id and token
  /// are always copied from the request.
  ///
  /// ```
  /// use toad_msg::Type;
  /// use toad_node::req::Request;
  /// use toad_node::resp::{code, Reply, Response};
  ///
  /// let req = Request::get("light");
  /// let rep = Response::for_request(&req, Reply::empty(code::NOT_FOUND));
  ///
  /// assert_eq!(rep.ty, Type::Ack);
  /// assert_eq!(rep.id, req.id);
  /// assert_eq!(rep.code, code::NOT_FOUND);
  /// ```
  pub fn for_request(req: &Request, reply: Reply<'a>) -> Self {
    let ty = match req.ty {
      | Type::Con => Type::Ack,
      | _ => Type::Non,
    };

    Self { ty,
           id: req.id,
           token: req.token,
           code: reply.code,
           content_format: reply.content_format,
           payload: reply.payload }
  }
}
