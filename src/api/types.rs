//! Listing API type definitions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Creator profile a listing is fetched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRef {
    pub service: String,
    pub user_id: String,
}

/// A post from the listing endpoint.
///
/// Fields the archiver does not use are kept in `extra` so a post can be
/// written back out exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    #[serde(
        default,
        deserialize_with = "empty_object_as_none",
        serialize_with = "none_as_empty_object"
    )]
    pub file: Option<MediaRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<MediaRef>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A downloadable file referenced by a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Destination file name.
    pub name: String,
    /// Server-relative path, e.g. `/ab/cd/abcd....jpg`.
    pub path: String,
}

impl Post {
    /// Number of media references (primary file plus attachments).
    pub fn media_count(&self) -> usize {
        self.file.iter().count() + self.attachments.len()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The listing sends `"file": {}` for posts without a primary file.
fn empty_object_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<MediaRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(other) => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn none_as_empty_object<S>(
    file: &Option<MediaRef>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match file {
        Some(media) => media.serialize(serializer),
        None => Map::new().serialize(serializer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_with_empty_file_object() {
        let raw = json!({
            "id": "1001",
            "title": "Sketches",
            "content": "",
            "file": {},
            "attachments": [{"name": "a.png", "path": "/aa/bb/a.png"}],
            "published": "2024-05-01T10:00:00"
        });

        let post: Post = serde_json::from_value(raw).unwrap();
        assert_eq!(post.id, "1001");
        assert!(post.file.is_none());
        assert_eq!(post.attachments.len(), 1);
        assert_eq!(post.media_count(), 1);
        assert_eq!(post.extra["published"], "2024-05-01T10:00:00");
    }

    #[test]
    fn test_post_null_fields_default() {
        let raw = json!({
            "id": "7",
            "title": null,
            "content": null,
            "file": null,
            "attachments": null
        });

        let post: Post = serde_json::from_value(raw).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert!(post.file.is_none());
        assert!(post.attachments.is_empty());
    }

    #[test]
    fn test_post_preserves_unknown_fields_on_write() {
        let raw = json!({
            "id": "55",
            "user": "123",
            "service": "patreon",
            "title": "Title",
            "content": "<p>hi</p>",
            "file": {"name": "cover.jpg", "path": "/c/o/cover.jpg"},
            "attachments": [],
            "shared_file": false
        });

        let post: Post = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            post.file,
            Some(MediaRef {
                name: "cover.jpg".into(),
                path: "/c/o/cover.jpg".into()
            })
        );
        assert_eq!(serde_json::to_value(&post).unwrap(), raw);
    }

    #[test]
    fn test_file_without_path_is_rejected() {
        let raw = json!({"id": "1", "file": {"name": "x"}});
        assert!(serde_json::from_value::<Post>(raw).is_err());
    }

    #[test]
    fn test_absent_file_written_as_empty_object() {
        let post: Post = serde_json::from_value(json!({"id": "9"})).unwrap();
        let written = serde_json::to_value(&post).unwrap();
        assert_eq!(written["file"], json!({}));
    }
}
