//! HTTP response type for the theme client.

/// A raw response from the theme API.
///
/// The body is kept as bytes; interpreting it is the job of
/// [`crate::rest::decode`]. A body of `None` means the status line arrived but
/// the body could not be read to the end.
///
/// # Example
///
/// ```rust
/// use theme_client::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, br#"{"themes":[]}"#.to_vec());
/// assert!(response.is_ok());
/// assert_eq!(response.body(), Some(&br#"{"themes":[]}"#[..]));
///
/// let broken = HttpResponse::unreadable(200);
/// assert!(broken.body().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    code: u16,
    body: Option<Vec<u8>>,
}

impl HttpResponse {
    /// Creates a response with a fully read body.
    #[must_use]
    pub fn new(code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            body: Some(body.into()),
        }
    }

    /// Creates a response whose body failed to read.
    #[must_use]
    pub const fn unreadable(code: u16) -> Self {
        Self { code, body: None }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns the body bytes, or `None` if the body could not be read.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        assert!(HttpResponse::new(200, "").is_ok());
        assert!(HttpResponse::new(201, "").is_ok());
        assert!(HttpResponse::new(299, "").is_ok());
    }

    #[test]
    fn test_is_not_ok_for_other_codes() {
        assert!(!HttpResponse::new(404, "").is_ok());
        assert!(!HttpResponse::new(422, "").is_ok());
        assert!(!HttpResponse::unreadable(500).is_ok());
    }
}
