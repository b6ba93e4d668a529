//! Local HTTP server over the pulpit API.
//!
//! Requests are handled one at a time on the calling thread. Every request
//! gets a response; transport failures are logged and the loop continues.

use std::io::Read;

use pulpit::api::Method;
use pulpit::{Api, ApiRequest, ApiResponse};

/// Bind `addr` and serve requests until the process is stopped.
pub fn serve(api: &Api, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let server =
        tiny_http::Server::http(addr).map_err(|e| format!("failed to bind {}: {}", addr, e))?;
    log::info!("listening on http://{}", addr);
    run(&server, api, None);
    Ok(())
}

/// Answer requests from `server`, stopping after `limit` requests if set.
pub fn run(server: &tiny_http::Server, api: &Api, limit: Option<usize>) {
    let mut handled = 0usize;
    for mut request in server.incoming_requests() {
        let response = match read_request(&mut request) {
            Ok(api_request) => api.handle(&api_request),
            Err(e) => {
                log::warn!("failed to read request body: {}", e);
                ApiResponse::error(400, "Invalid request body")
            }
        };

        log::info!(
            "{} {} {}",
            request.method(),
            request.url(),
            response.status
        );
        if let Err(e) = request.respond(to_http(response)) {
            log::warn!("failed to send response: {}", e);
        }

        handled += 1;
        if limit.is_some_and(|limit| handled >= limit) {
            break;
        }
    }
}

fn read_request(request: &mut tiny_http::Request) -> std::io::Result<ApiRequest> {
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body)?;
    let method = Method::parse(request.method().as_str());
    Ok(ApiRequest::new(method, request.url(), body))
}

fn to_http(response: ApiResponse) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let mut http = tiny_http::Response::from_string(response.body).with_status_code(response.status);
    if let Ok(header) = tiny_http::Header::from_bytes("Content-Type", response.content_type) {
        http = http.with_header(header);
    }
    http
}
