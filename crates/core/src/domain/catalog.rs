//! Fixed fortune and recommendation text.

pub const FORTUNES: [&str; 10] = [
    "The API returns 200 but the data is null. Classic.",
    "Unexpected field 'foo' appears! It will vanish in next version.",
    "Rate limit exceeded. Please wait 5... 4... 3... just kidding, 429 forever.",
    "Authentication works on Postman but not in code. It's a you problem.",
    "The response schema changed. Documentation? We don't do that here.",
    "Everything works! (This fortune appears 0.1% of the time)",
    "CORS error from the API gateway. The frontend devs are crying.",
    "Pagination works until page 3, then returns cats. Just cats.",
    "The 'status' field contains Shakespeare quotes. For reasons.",
    "Deprecated endpoint still works but mocks you in response headers.",
];

pub const RECOMMENDATIONS: [&str; 5] = [
    "Add more try-catch blocks. All the blocks.",
    "Blame the backend team, then apologize tomorrow.",
    "Implement exponential backoff and hope.",
    "Check Stack Overflow for someone with same problem (2018).",
    "Write a strongly worded comment in the code.",
];

pub const NOT_JSON_FORTUNE: &str = "Not JSON. Is this even an API or just a sad text file?";
pub const NOT_JSON_RECOMMENDATION: &str = "Check if API is actually returning HTML error page";
pub const NOT_JSON_CONFIDENCE: u8 = 95;

pub const ADMITS_ERROR_FORTUNE: &str = "API admits error! This is progress.";
pub const OVERSIZED_FORTUNE: &str = "Response so large, parsing will timeout. Good luck!";
pub const EMPTY_FORTUNE: &str = "Empty response. Either genius or laziness.";

/// Inclusive bounds for randomized confidence. Never 100.
pub const CONFIDENCE_MIN: u8 = 42;
pub const CONFIDENCE_MAX: u8 = 99;

/// Substituted when stdin is empty or whitespace-only.
pub const LAZY_USER_FALLBACK: &str = r#"{"error": "User too lazy to paste response"}"#;
