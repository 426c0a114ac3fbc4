use crate::constants::MESSAGE_TERMINATOR;
use std::fmt;

/// The kind of a server response, carried on the wire as a one character prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    None,
    Success,
    Error,
    LoggedIn,
}

impl ResponseKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ResponseKind::None => "",
            ResponseKind::Success => "+",
            ResponseKind::Error => "-",
            ResponseKind::LoggedIn => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub kind: ResponseKind,
    pub body: String,
}

impl Response {
    pub fn new(kind: ResponseKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }

    pub fn none(body: impl Into<String>) -> Self {
        Self::new(ResponseKind::None, body)
    }

    pub fn success(body: impl Into<String>) -> Self {
        Self::new(ResponseKind::Success, body)
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self::new(ResponseKind::Error, body)
    }

    pub fn logged_in(body: impl Into<String>) -> Self {
        Self::new(ResponseKind::LoggedIn, body)
    }

    /// Prefix and body, without the terminator. Used when one response is
    /// embedded in another, e.g. a deferred CDIR replayed after login.
    pub fn prefixed(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.body)
    }

    /// Wire framing: prefix, body, then a single NUL.
    pub fn encode(&self) -> Vec<u8> {
        let mut framed = self.prefixed();
        framed.push(MESSAGE_TERMINATOR);
        framed.into_bytes()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefixed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_prefixes() {
        assert_eq!(Response::success("ok").encode(), b"+ok\0".to_vec());
        assert_eq!(Response::error("no").encode(), b"-no\0".to_vec());
        assert_eq!(Response::logged_in("in").encode(), b"!in\0".to_vec());
        assert_eq!(Response::none("raw").encode(), b"raw\0".to_vec());
    }

    #[test]
    fn test_embedded_newlines_survive_framing() {
        let response = Response::logged_in("Logged in\n!Changed working dir to user3/folder1");
        assert_eq!(
            response.encode(),
            b"!Logged in\n!Changed working dir to user3/folder1\0".to_vec()
        );
    }
}
