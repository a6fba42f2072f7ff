use actix_web::HttpResponse;

pub const INDEX_BODY: &str = "yay!";

/// Placeholder page served for every path and method on the web listener.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(INDEX_BODY)
}
