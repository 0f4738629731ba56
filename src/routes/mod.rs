use actix_web::HttpResponse;
use actix_web::http::header::{CACHE_CONTROL, ContentType};
use tera::{Context, Tera};

pub mod main;
pub mod products;

/// Render a Tera template into a fresh, uncacheable HTML response.
///
/// Catalog content changes out-of-band in the authoring tool, so every
/// storefront response carries `Cache-Control: no-store`; serving a stale
/// page is a correctness failure, not a performance trade-off.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    let body = tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    });
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .insert_header((CACHE_CONTROL, "no-store"))
        .body(body)
}

/// Render the not-found page with a 404 status.
pub fn render_not_found(tera: &Tera, context: &Context) -> HttpResponse {
    let body = tera
        .render("products/not_found.html", context)
        .unwrap_or_else(|e| {
            log::error!("Failed to render template 'products/not_found.html': {e}");
            String::new()
        });
    HttpResponse::NotFound()
        .insert_header(ContentType::html())
        .insert_header((CACHE_CONTROL, "no-store"))
        .body(body)
}

pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    fn test_tera() -> Tera {
        let mut tera = Tera::default();
        tera.add_raw_template("main/index.html", "<p>{{ current_page }}</p>")
            .unwrap();
        tera.add_raw_template("products/not_found.html", "<p>not found</p>")
            .unwrap();
        tera
    }

    #[test]
    fn rendered_pages_are_never_cacheable() {
        let tera = test_tera();

        let response = render_template(&tera, "main/index.html", &base_context("index"));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CACHE_CONTROL).unwrap(),
            "no-store"
        );
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn not_found_page_is_a_404_and_never_cacheable() {
        let tera = test_tera();

        let response = render_not_found(&tera, &base_context("product"));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }
}
