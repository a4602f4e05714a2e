/// Body of the 404 answer for symbols outside the supported set
pub const UNSUPPORTED_SYMBOL_BODY: &str = "Symbol not supported";

/// Header carrying the per request id, set when absent and echoed on the response
pub const REQUEST_ID_HEADER: &str = "x-request-id";
