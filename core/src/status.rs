//! Closed enumeration of HTTP status codes.
//!
//! Any code outside the registered set maps to `HttpStatusCode::Invalid`,
//! which is also what non-server errors report.

use std::fmt;

macro_rules! status_codes {
    ($( ($code:literal, $variant:ident, $reason:literal); )+) => {
        /// A registered HTTP status code, or `Invalid` when none applies.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HttpStatusCode {
            $( $variant, )+
            Invalid,
        }

        impl HttpStatusCode {
            pub fn from_code(code: u16) -> Self {
                match code {
                    $( $code => HttpStatusCode::$variant, )+
                    _ => HttpStatusCode::Invalid,
                }
            }

            /// Numeric code, `None` for `Invalid`.
            pub fn code(&self) -> Option<u16> {
                match self {
                    $( HttpStatusCode::$variant => Some($code), )+
                    HttpStatusCode::Invalid => None,
                }
            }

            pub fn reason(&self) -> &'static str {
                match self {
                    $( HttpStatusCode::$variant => $reason, )+
                    HttpStatusCode::Invalid => "Invalid Status Code",
                }
            }
        }
    };
}

status_codes! {
    (100, Continue, "Continue");
    (101, SwitchingProtocols, "Switching Protocols");
    (102, Processing, "Processing");
    (103, EarlyHints, "Early Hints");
    (200, Ok, "OK");
    (201, Created, "Created");
    (202, Accepted, "Accepted");
    (203, NonAuthoritativeInformation, "Non-Authoritative Information");
    (204, NoContent, "No Content");
    (205, ResetContent, "Reset Content");
    (206, PartialContent, "Partial Content");
    (207, MultiStatus, "Multi-Status");
    (208, AlreadyReported, "Already Reported");
    (226, ImUsed, "IM Used");
    (300, MultipleChoices, "Multiple Choices");
    (301, MovedPermanently, "Moved Permanently");
    (302, Found, "Found");
    (303, SeeOther, "See Other");
    (304, NotModified, "Not Modified");
    (305, UseProxy, "Use Proxy");
    (307, TemporaryRedirect, "Temporary Redirect");
    (308, PermanentRedirect, "Permanent Redirect");
    (400, BadRequest, "Bad Request");
    (401, Unauthorized, "Unauthorized");
    (402, PaymentRequired, "Payment Required");
    (403, Forbidden, "Forbidden");
    (404, NotFound, "Not Found");
    (405, MethodNotAllowed, "Method Not Allowed");
    (406, NotAcceptable, "Not Acceptable");
    (407, ProxyAuthenticationRequired, "Proxy Authentication Required");
    (408, RequestTimeout, "Request Timeout");
    (409, Conflict, "Conflict");
    (410, Gone, "Gone");
    (411, LengthRequired, "Length Required");
    (412, PreconditionFailed, "Precondition Failed");
    (413, PayloadTooLarge, "Payload Too Large");
    (414, UriTooLong, "URI Too Long");
    (415, UnsupportedMediaType, "Unsupported Media Type");
    (416, RangeNotSatisfiable, "Range Not Satisfiable");
    (417, ExpectationFailed, "Expectation Failed");
    (418, ImATeapot, "I'm a teapot");
    (421, MisdirectedRequest, "Misdirected Request");
    (422, UnprocessableEntity, "Unprocessable Entity");
    (423, Locked, "Locked");
    (424, FailedDependency, "Failed Dependency");
    (425, TooEarly, "Too Early");
    (426, UpgradeRequired, "Upgrade Required");
    (428, PreconditionRequired, "Precondition Required");
    (429, TooManyRequests, "Too Many Requests");
    (431, RequestHeaderFieldsTooLarge, "Request Header Fields Too Large");
    (451, UnavailableForLegalReasons, "Unavailable For Legal Reasons");
    (500, InternalServerError, "Internal Server Error");
    (501, NotImplemented, "Not Implemented");
    (502, BadGateway, "Bad Gateway");
    (503, ServiceUnavailable, "Service Unavailable");
    (504, GatewayTimeout, "Gateway Timeout");
    (505, HttpVersionNotSupported, "HTTP Version Not Supported");
    (506, VariantAlsoNegotiates, "Variant Also Negotiates");
    (507, InsufficientStorage, "Insufficient Storage");
    (508, LoopDetected, "Loop Detected");
    (510, NotExtended, "Not Extended");
    (511, NetworkAuthenticationRequired, "Network Authentication Required");
}

impl HttpStatusCode {
    /// Only 200 counts as success for this client.
    pub fn is_ok(&self) -> bool {
        *self == HttpStatusCode::Ok
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode::from_code(code)
    }
}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{code} {}", self.reason()),
            None => f.write_str(self.reason()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_both_ways() {
        assert_eq!(HttpStatusCode::from_code(404), HttpStatusCode::NotFound);
        assert_eq!(HttpStatusCode::NotFound.code(), Some(404));
        assert_eq!(HttpStatusCode::from_code(511).code(), Some(511));
    }

    #[test]
    fn unknown_codes_are_invalid() {
        assert_eq!(HttpStatusCode::from_code(0), HttpStatusCode::Invalid);
        assert_eq!(HttpStatusCode::from_code(299), HttpStatusCode::Invalid);
        assert_eq!(HttpStatusCode::from_code(999), HttpStatusCode::Invalid);
        assert_eq!(HttpStatusCode::Invalid.code(), None);
    }

    #[test]
    fn only_200_is_ok() {
        assert!(HttpStatusCode::Ok.is_ok());
        assert!(!HttpStatusCode::Created.is_ok());
        assert!(!HttpStatusCode::NoContent.is_ok());
        assert!(!HttpStatusCode::Invalid.is_ok());
    }

    #[test]
    fn display_includes_code_and_reason() {
        assert_eq!(HttpStatusCode::NotFound.to_string(), "404 Not Found");
        assert_eq!(HttpStatusCode::Invalid.to_string(), "Invalid Status Code");
    }
}
