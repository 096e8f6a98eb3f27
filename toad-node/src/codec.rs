use std_alloc::collections::BTreeMap;
use std_alloc::string::String;
use std_alloc::vec::Vec;
use toad_msg::alloc::Message;
use toad_msg::{MessageParseError, OptNumber, OptValue, Payload, TryFromBytes, TryIntoBytes};

use crate::req::{Method, Request};
use crate::resp::Response;

/// Uri-Path option number
const URI_PATH: OptNumber = OptNumber(11);

/// Content-Format option number
const CONTENT_FORMAT: OptNumber = OptNumber(12);

const PAYLOAD_MARKER: u8 = 0xFF;

/// Converts between datagrams and [`Request`]s / [`Response`]s
pub trait Codec {
  /// Error yielded when a datagram is not a valid request
  type ParseError: core::fmt::Debug;

  /// Error yielded when a response cannot be encoded
  type BuildError: core::fmt::Debug;

  /// Decode an inbound datagram
  fn parse(&self, dgram: &[u8]) -> Result<Request, Self::ParseError>;

  /// Encode `rep` into `out`, returning the number of bytes written
  fn build(&self, rep: &Response<'_>, out: &mut [u8]) -> Result<usize, Self::BuildError>;
}

/// [`Codec`] backed by [`toad_msg`]
///
/// ```
/// use toad_node::codec::{Codec, MsgCodec};
/// use toad_node::req::Request;
/// use toad_node::resp::{Reply, Response};
/// use toad_node::ContentFormat;
///
/// let req = Request::get("humidity");
/// let rep = Response::for_request(&req, Reply::content(ContentFormat::Text, b"48%"));
///
/// let mut out = [0u8; 32];
/// let n = MsgCodec.build(&rep, &mut out).unwrap();
///
/// // header (4) + Content-Format option with an empty value (1)
/// // + payload marker (1) + payload (3)
/// assert_eq!(n, 9);
/// assert_eq!(&out[n - 3..n], b"48%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MsgCodec;

/// Errors encounterable decoding a request with [`MsgCodec`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseError {
  /// The datagram is not a CoAP message
  Message(MessageParseError),
  /// A Uri-Path segment is not UTF-8
  PathNotUtf8(core::str::Utf8Error),
}

/// Errors encounterable encoding a response with [`MsgCodec`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildError {
  /// The message could not be serialized
  Message(<Message as TryIntoBytes>::Error),
  /// The serialized message is larger than the output buffer
  BufferTooSmall {
    /// Size of the output buffer
    capacity: usize,
    /// Size of the serialized message
    size: usize,
  },
}

impl Codec for MsgCodec {
  type ParseError = ParseError;
  type BuildError = BuildError;

  fn parse(&self, dgram: &[u8]) -> Result<Request, ParseError> {
    let msg = Message::try_from_bytes(dgram).map_err(ParseError::Message)?;

    // the decoded option map keeps one value per number
    let path = uri_path(dgram)?;

    Ok(Request { ty: msg.ty,
                 id: msg.id,
                 token: msg.token,
                 method: Method::from(msg.code),
                 path,
                 payload: msg.payload.0 })
  }

  fn build(&self, rep: &Response<'_>, out: &mut [u8]) -> Result<usize, BuildError> {
    let mut opts = BTreeMap::new();
    if let Some(format) = rep.content_format {
      opts.insert(CONTENT_FORMAT, std_alloc::vec![OptValue(format.bytes().to_vec())]);
    }

    let msg = Message { id: rep.id,
                        ty: rep.ty,
                        ver: Default::default(),
                        token: rep.token,
                        code: rep.code,
                        opts,
                        payload: Payload(rep.payload.to_vec()) };

    let bytes: Vec<u8> = msg.try_into_bytes().map_err(BuildError::Message)?;

    let size = bytes.len();
    let capacity = out.len();
    let dst = out.get_mut(..size)
                 .ok_or(BuildError::BufferTooSmall { capacity, size })?;
    dst.copy_from_slice(&bytes);

    Ok(size)
  }
}

/// Uri-Path segments of a datagram that already decoded as a message,
/// in the order they appear on the wire.
fn uri_path(dgram: &[u8]) -> Result<Vec<String>, ParseError> {
  let eof = || ParseError::Message(MessageParseError::eof());

  let tkl = usize::from(dgram.first().ok_or_else(eof)? & 0b1111);
  let mut bytes = dgram.get(4 + tkl..).ok_or_else(eof)?.iter().copied();

  let mut number = 0u32;
  let mut path = Vec::new();

  while let Some(head) = bytes.next() {
    if head == PAYLOAD_MARKER {
      break;
    }

    let delta = extended(head >> 4, &mut bytes).ok_or_else(eof)?;
    let len = extended(head & 0b1111, &mut bytes).ok_or_else(eof)? as usize;
    number = number.saturating_add(delta);

    let value = bytes.by_ref().take(len).collect::<Vec<u8>>();
    if value.len() != len {
      return Err(eof());
    }

    if number == URI_PATH.0 {
      let seg = String::from_utf8(value).map_err(|e| ParseError::PathNotUtf8(e.utf8_error()))?;
      path.push(seg);
    }
  }

  Ok(path)
}

/// Option delta / length nibble, with its extended bytes (RFC7252 3.1)
fn extended(nibble: u8, bytes: &mut impl Iterator<Item = u8>) -> Option<u32> {
  match nibble {
    | 13 => bytes.next().map(|b| u32::from(b) + 13),
    | 14 => {
      let hi = bytes.next()?;
      let lo = bytes.next()?;
      Some(u32::from(u16::from_be_bytes([hi, lo])) + 269)
    },
    | 15 => None,
    | n => Some(u32::from(n)),
  }
}
