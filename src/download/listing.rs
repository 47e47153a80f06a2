//! Offset pagination over a creator's post listing.

use crate::api::{ArchiveClient, Post, ProfileRef, PAGE_SIZE};
use crate::download::pacing::Pacer;
use crate::error::Result;

/// Fetch every post of a profile, page by page, in server order.
///
/// The offset advances by [`PAGE_SIZE`] after every request no matter how many
/// posts came back; the walk ends at the first empty page. Posts are not
/// deduplicated. A failed page aborts the whole listing.
pub async fn list_all_posts(
    client: &ArchiveClient,
    listing_base: &str,
    profile: &ProfileRef,
    pacer: Pacer,
) -> Result<Vec<Post>> {
    tracing::info!(
        "Listing posts for {}/{}...",
        profile.service,
        profile.user_id
    );

    let mut posts = Vec::new();
    let mut offset = 0;
    let mut page = 0;

    loop {
        let batch = client.get_posts(listing_base, profile, offset).await?;
        offset += PAGE_SIZE;

        if batch.is_empty() {
            break;
        }

        page += 1;
        tracing::info!("Fetched page {} ({} posts)", page, batch.len());
        posts.extend(batch);

        pacer.pause().await;
    }

    tracing::info!("Listing complete: {} posts in total", posts.len());

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::test_support::test_client;
    use crate::error::Error;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LISTING_PATH: &str = "/api/v1/patreon/user/58531325";

    fn profile() -> ProfileRef {
        ProfileRef {
            service: "patreon".into(),
            user_id: "58531325".into(),
        }
    }

    fn page(start: u64, len: u64) -> Value {
        let posts: Vec<Value> = (start..start + len)
            .map(|n| {
                json!({
                    "id": format!("p{}", n),
                    "title": format!("Post {}", n),
                    "content": "",
                    "file": {},
                    "attachments": []
                })
            })
            .collect();
        Value::Array(posts)
    }

    async fn mount_page(server: &MockServer, offset: u64, body: Value) {
        Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .and(query_param("o", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_walks_until_empty_page() {
        let server = MockServer::start().await;
        mount_page(&server, 0, page(0, 50)).await;
        mount_page(&server, 50, page(50, 50)).await;
        mount_page(&server, 100, page(100, 23)).await;
        mount_page(&server, 150, json!([])).await;

        let listing_base = format!("{}/api/v1", server.uri());
        let posts = list_all_posts(&test_client(), &listing_base, &profile(), Pacer::none())
            .await
            .unwrap();

        assert_eq!(posts.len(), 123);
        assert_eq!(posts[0].id, "p0");
        assert_eq!(posts[122].id, "p122");

        let offsets: Vec<String> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "o")
                    .map(|(_, v)| v.into_owned())
                    .unwrap()
            })
            .collect();
        assert_eq!(offsets, vec!["0", "50", "100", "150"]);
    }

    #[tokio::test]
    async fn test_offset_advances_by_page_size_on_short_pages() {
        let server = MockServer::start().await;
        mount_page(&server, 0, page(0, 10)).await;
        mount_page(&server, 50, page(10, 5)).await;
        mount_page(&server, 100, json!([])).await;

        let listing_base = format!("{}/api/v1", server.uri());
        let posts = list_all_posts(&test_client(), &listing_base, &profile(), Pacer::none())
            .await
            .unwrap();

        assert_eq!(posts.len(), 15);
    }

    #[tokio::test]
    async fn test_server_error_is_fatal() {
        let server = MockServer::start().await;
        mount_page(&server, 0, page(0, 50)).await;
        Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .and(query_param("o", "50"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let listing_base = format!("{}/api/v1", server.uri());
        let err = list_all_posts(&test_client(), &listing_base, &profile(), Pacer::none())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(_)));
    }

    #[tokio::test]
    async fn test_malformed_page_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
            .mount(&server)
            .await;

        let listing_base = format!("{}/api/v1", server.uri());
        let err = list_all_posts(&test_client(), &listing_base, &profile(), Pacer::none())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(msg) if msg.contains("Failed to parse listing")));
    }
}
