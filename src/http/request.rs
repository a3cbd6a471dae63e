use std::collections::HashMap;

/// Registered HTTP request methods.
///
/// The grammar accepts any token as a method; mapping a token to one of
/// these names is a semantic layer above the grammar, via
/// [`Method::from_token`] or [`HttpRequest::known_method`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    TRACE,
    CONNECT,
    PATCH,
}

impl Method {
    /// Maps a method token to a registered method, case-sensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use graze::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_token("get"), None);
    /// assert_eq!(Method::from_token("BREW"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "TRACE" => Some(Method::TRACE),
            "CONNECT" => Some(Method::CONNECT),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed HTTP request, borrowed from the input buffer.
///
/// Every field is a view into the caller's buffer; nothing is copied. The
/// record only exists for requests that matched completely, so all fields
/// hold the exact bytes the grammar consumed.
///
/// Header names are stored byte-exactly (case-sensitive) and duplicate
/// names resolve last-wins; both policies are deliberate and tested.
#[derive(Debug, Clone)]
pub struct HttpRequest<'a> {
    /// The method token from the request-line (e.g. `GET`)
    pub method: &'a str,
    /// The request-target (`*`, absolute URI, absolute path, or authority)
    pub target: &'a str,
    /// The version literal (e.g. `HTTP/1.1`)
    pub version: &'a str,
    /// Value of the `Host` header, if one was present with a value
    pub host: Option<&'a str>,
    /// All headers, keyed by name; a header without a value maps to `""`
    pub headers: HashMap<&'a str, &'a str>,
}

impl<'a> HttpRequest<'a> {
    /// Retrieves a header value by byte-exact name.
    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.headers.get(name).copied()
    }

    /// The registered method this request uses, if its token is one.
    pub fn known_method(&self) -> Option<Method> {
        Method::from_token(self.method)
    }

    /// Whether the connection should stay open after this request.
    ///
    /// HTTP/1.1 defaults to keep-alive; an explicit `Connection` header
    /// overrides (value compared case-insensitively).
    pub fn keep_alive(&self) -> bool {
        self.header("Connection")
            .map(|v| v.eq_ignore_ascii_case("keep-alive"))
            .unwrap_or(true)
    }
}
