/// Status code for a default error description.
///
/// Unrecognized descriptions resolve to 500.
pub fn status_from_description(description: &str) -> u16 {
    match description {
        "Bad Request" => 400,
        "Unauthorized" => 401,
        "Forbidden" => 403,
        "Not Found" => 404,
        "Method Not Allowed" => 405,
        "Request Timeout" => 408,
        "Conflict" => 409,
        "Gone" => 410,
        "Precondition Failed" => 412,
        "Payload Too Large" => 413,
        "Unsupported Media Type" => 415,
        "Unprocessable Entity" => 422,
        "Internal Server Error" => 500,
        "Not Implemented" => 501,
        "Service Unavailable" => 503,
        "Gateway Timeout" => 504,
        "HTTP Version Not Supported" => 505,
        _ => 500,
    }
}
