//! `/books/{title}/page/{page}` on a `/books` sub-router.

use crate::request::Request;
use crate::router::Router;

pub async fn page(req: Request) -> String {
    let title = req.param("title").unwrap_or_default();
    let page = req.param("page").unwrap_or_default();
    format!("you've reqeusted the book: {title} on page {page}\n")
}

pub fn router() -> Router {
    let books = Router::new().any("/{title}/page/{page}", page);
    Router::new().nest("/books", books)
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;
    use crate::request::tests::request;

    async fn get(uri: &str) -> crate::Response {
        router().handle(request("GET", uri, None, "")).await
    }

    #[tokio::test]
    async fn interpolates_title_and_page() {
        let cases = [
            ("/books/dune/page/1", "dune", "1"),
            ("/books/Go-Programming/page/xiv", "Go-Programming", "xiv"),
            ("/books/a.b_c~d/page/-0", "a.b_c~d", "-0"),
            ("/books/%E2%9C%93/page/two%20words", "✓", "two words"),
        ];
        for (uri, title, page) in cases {
            let res = get(uri).await;
            assert_eq!(res.status_code(), StatusCode::OK, "{uri}");
            assert_eq!(
                String::from_utf8_lossy(res.body()),
                format!("you've reqeusted the book: {title} on page {page}\n"),
            );
        }
    }

    #[tokio::test]
    async fn incomplete_paths_are_not_found() {
        for uri in ["/books", "/books/dune", "/books/dune/page", "/books/dune/page/1/2", "/dune/page/1"] {
            assert_eq!(get(uri).await.status_code(), StatusCode::NOT_FOUND, "{uri}");
        }
    }
}
