//! Blog operations over the key-value and blob stores.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::post::{BlogPost, sort_newest_first};
use crate::store::{BlobEntry, BlobStore, KvStore, Result, StoreError, validate_blob_path};

/// Key prefix of stored posts, followed by the slug.
pub const POST_PREFIX: &str = "blog:post:";

/// Key of the ordered slug list.
pub const POSTS_LIST_KEY: &str = "blog:posts:list";

/// Blob path prefix of media uploaded for a post.
pub fn media_prefix(slug: &str) -> String {
    format!("blog/{}/", slug)
}

fn post_key(slug: &str) -> String {
    format!("{}{}", POST_PREFIX, slug)
}

/// Blog backed by injected storage capabilities.
#[derive(Debug)]
pub struct Blog<K, B> {
    kv: K,
    blobs: B,
}

impl<K: KvStore, B: BlobStore> Blog<K, B> {
    pub fn new(kv: K, blobs: B) -> Self {
        Self { kv, blobs }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.kv.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Ordered list of known slugs.
    pub fn slugs(&self) -> Result<Vec<String>> {
        Ok(self.read(POSTS_LIST_KEY)?.unwrap_or_default())
    }

    /// Reads one post.
    pub fn post(&self, slug: &str) -> Result<Option<BlogPost>> {
        self.read(&post_key(slug))
    }

    /// Stores a post and registers its slug.
    ///
    /// Saving an existing slug replaces the post and keeps its list position.
    pub fn save_post(&mut self, post: &BlogPost) -> Result<()> {
        self.kv
            .set(&post_key(&post.slug), serde_json::to_value(post)?)?;

        let mut slugs = self.slugs()?;
        if !slugs.iter().any(|s| s == &post.slug) {
            slugs.push(post.slug.clone());
            self.kv.set(POSTS_LIST_KEY, serde_json::to_value(&slugs)?)?;
        }

        debug!(slug = %post.slug, "Saved post");
        Ok(())
    }

    /// Removes a post and its slug. Uploaded media is left in place.
    pub fn delete_post(&mut self, slug: &str) -> Result<()> {
        self.kv.del(&post_key(slug))?;

        let mut slugs = self.slugs()?;
        let before = slugs.len();
        slugs.retain(|s| s != slug);
        if slugs.len() != before {
            self.kv.set(POSTS_LIST_KEY, serde_json::to_value(&slugs)?)?;
        }

        info!(slug, "Deleted post");
        Ok(())
    }

    /// All posts, newest first.
    ///
    /// Slugs listed without a stored post are skipped with a warning.
    pub fn sorted_posts(&self) -> Result<Vec<BlogPost>> {
        let mut posts = Vec::new();
        for slug in self.slugs()? {
            match self.post(&slug)? {
                Some(post) => posts.push(post),
                None => warn!(slug = %slug, "Listed slug has no stored post"),
            }
        }

        sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Records a unique visitor and returns the view count.
    ///
    /// Returns `None` when the post does not exist. A repeat visitor leaves
    /// the post untouched.
    pub fn track_view(&mut self, slug: &str, visitor: &str) -> Result<Option<usize>> {
        let Some(mut post) = self.post(slug)? else {
            return Ok(None);
        };

        if post.record_view(visitor) {
            self.kv
                .set(&post_key(slug), serde_json::to_value(&post)?)?;
        }

        Ok(Some(post.view_count()))
    }

    /// View count of a post, `None` when it does not exist.
    pub fn view_count(&self, slug: &str) -> Result<Option<usize>> {
        Ok(self.post(slug)?.map(|post| post.view_count()))
    }

    /// Uploads media for a post and returns its URL.
    ///
    /// The file name must be a single path component.
    pub fn upload_media(&mut self, slug: &str, file_name: &str, bytes: &[u8]) -> Result<String> {
        if file_name.contains('/') {
            return Err(StoreError::InvalidPath(file_name.to_string()));
        }
        let path = format!("{}{}", media_prefix(slug), file_name);
        validate_blob_path(&path)?;

        let url = self.blobs.put(&path, bytes)?;
        info!(slug, file = file_name, %url, "Uploaded media");
        Ok(url)
    }

    /// Media uploaded for a post.
    pub fn list_media(&self, slug: &str) -> Result<Vec<BlobEntry>> {
        self.blobs.list(&media_prefix(slug))
    }

    /// Deletes media by URL.
    pub fn delete_media(&mut self, url: &str) -> Result<()> {
        self.blobs.del(url)?;
        info!(%url, "Deleted media");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryBlobs, MemoryKv};

    fn post(slug: &str, date: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            title: format!("Post {}", slug),
            date: date.to_string(),
            cover_image: None,
            excerpt: "excerpt".to_string(),
            author: None,
            categories: Vec::new(),
            content: "content".to_string(),
            views: Vec::new(),
        }
    }

    fn blog() -> Blog<MemoryKv, MemoryBlobs> {
        Blog::new(MemoryKv::new(), MemoryBlobs::new())
    }

    #[test]
    fn test_save_and_get_post() {
        // Arrange
        let mut blog = blog();
        let p = post("a", "2025-01-01");

        // Act
        blog.save_post(&p).expect("save");

        // Assert
        assert_eq!(blog.post("a").expect("get"), Some(p));
        assert_eq!(blog.slugs().expect("slugs"), vec!["a".to_string()]);
        assert!(blog.kv().get("blog:post:a").expect("raw").is_some());
    }

    #[test]
    fn test_save_twice_keeps_single_slug() {
        // Arrange
        let mut blog = blog();
        let mut p = post("a", "2025-01-01");
        blog.save_post(&p).expect("save");

        // Act
        p.title = "Changed".to_string();
        blog.save_post(&p).expect("save again");

        // Assert
        assert_eq!(blog.slugs().expect("slugs").len(), 1);
        assert_eq!(blog.post("a").expect("get").map(|p| p.title), Some("Changed".to_string()));
    }

    #[test]
    fn test_delete_post() {
        // Arrange
        let mut blog = blog();
        blog.save_post(&post("a", "2025-01-01")).expect("save");
        blog.save_post(&post("b", "2025-01-02")).expect("save");

        // Act
        blog.delete_post("a").expect("delete");

        // Assert
        assert_eq!(blog.post("a").expect("get"), None);
        assert_eq!(blog.slugs().expect("slugs"), vec!["b".to_string()]);
    }

    #[test]
    fn test_sorted_posts_newest_first() {
        // Arrange
        let mut blog = blog();
        blog.save_post(&post("old", "2023-05-01")).expect("save");
        blog.save_post(&post("new", "2025-05-01")).expect("save");
        blog.save_post(&post("mid", "2024-05-01")).expect("save");

        // Act
        let slugs: Vec<String> = blog
            .sorted_posts()
            .expect("sorted")
            .into_iter()
            .map(|p| p.slug)
            .collect();

        // Assert
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sorted_posts_skips_dangling_slug() {
        // Arrange
        let mut blog = blog();
        blog.save_post(&post("a", "2025-01-01")).expect("save");
        blog.kv
            .set(POSTS_LIST_KEY, serde_json::json!(["a", "ghost"]))
            .expect("set list");

        // Act
        let posts = blog.sorted_posts().expect("sorted");

        // Assert
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_track_view_counts_unique_visitors() {
        // Arrange
        let mut blog = blog();
        blog.save_post(&post("a", "2025-01-01")).expect("save");

        // Act
        let first = blog.track_view("a", "10.0.0.1").expect("track");
        let repeat = blog.track_view("a", "10.0.0.1").expect("track");
        let second = blog.track_view("a", "10.0.0.2").expect("track");

        // Assert
        assert_eq!(first, Some(1));
        assert_eq!(repeat, Some(1));
        assert_eq!(second, Some(2));
        assert_eq!(blog.view_count("a").expect("count"), Some(2));
    }

    #[test]
    fn test_track_view_missing_post() {
        // Arrange
        let mut blog = blog();

        // Act
        let result = blog.track_view("missing", "ip").expect("track");

        // Assert
        assert_eq!(result, None);
        assert_eq!(blog.view_count("missing").expect("count"), None);
    }

    #[test]
    fn test_media_upload_and_list() {
        // Arrange
        let mut blog = blog();

        // Act
        let url = blog
            .upload_media("a", "cover.png", b"img")
            .expect("upload");
        let listed = blog.list_media("a").expect("list");

        // Assert
        assert_eq!(url, "/media/blog/a/cover.png");
        assert_eq!(listed.len(), 1);

        // Act
        blog.delete_media(&url).expect("delete");

        // Assert
        assert!(blog.list_media("a").expect("list").is_empty());
    }

    #[test]
    fn test_media_rejects_nested_file_name() {
        // Arrange
        let mut blog = blog();

        // Act
        let result = blog.upload_media("a", "../../x.png", b"img");

        // Assert
        assert!(matches!(result, Err(StoreError::InvalidPath(_))));
    }

    #[test]
    fn test_delete_post_keeps_media() {
        // Arrange
        let mut blog = blog();
        blog.save_post(&post("a", "2025-01-01")).expect("save");
        blog.upload_media("a", "x.png", b"1").expect("upload");

        // Act
        blog.delete_post("a").expect("delete");

        // Assert
        assert_eq!(blog.list_media("a").expect("list").len(), 1);
    }
}
