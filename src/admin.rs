//! Admin-only blog operations.

use thiserror::Error;
use tracing::info;

use crate::auth::Authorizer;
use crate::blog::Blog;
use crate::post::{BlogPost, PostError};
use crate::store::{BlobStore, KvStore, StoreError};

/// Failures of admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Not authorized; log in with the admin password first")]
    Unauthorized,

    #[error("A post with slug '{0}' already exists")]
    SlugTaken(String),

    #[error("No post with slug '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Invalid(#[from] PostError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Blog handle whose mutating operations require authorization.
pub struct Admin<'a, K, B> {
    blog: &'a mut Blog<K, B>,
    authorizer: &'a dyn Authorizer,
}

impl<'a, K: KvStore, B: BlobStore> Admin<'a, K, B> {
    pub fn new(blog: &'a mut Blog<K, B>, authorizer: &'a dyn Authorizer) -> Self {
        Self { blog, authorizer }
    }

    fn check(&self) -> Result<(), AdminError> {
        if self.authorizer.is_authorized() {
            Ok(())
        } else {
            Err(AdminError::Unauthorized)
        }
    }

    /// Creates a new post.
    ///
    /// # Errors
    ///
    /// Fails when unauthorized, when the post is invalid or when the slug is
    /// already in use.
    pub fn create(&mut self, post: &BlogPost) -> Result<(), AdminError> {
        self.check()?;
        post.validate()?;
        if self.blog.post(&post.slug)?.is_some() {
            return Err(AdminError::SlugTaken(post.slug.clone()));
        }

        self.blog.save_post(post)?;
        info!(slug = %post.slug, "Created post");
        Ok(())
    }

    /// Replaces an existing post, keeping its recorded views.
    ///
    /// # Errors
    ///
    /// Fails when unauthorized, when the post is invalid or missing.
    pub fn update(&mut self, post: &BlogPost) -> Result<(), AdminError> {
        self.check()?;
        post.validate()?;
        let Some(existing) = self.blog.post(&post.slug)? else {
            return Err(AdminError::NotFound(post.slug.clone()));
        };

        let mut updated = post.clone();
        for visitor in &existing.views {
            updated.record_view(visitor);
        }

        self.blog.save_post(&updated)?;
        info!(slug = %post.slug, "Updated post");
        Ok(())
    }

    /// Deletes a post.
    pub fn delete(&mut self, slug: &str) -> Result<(), AdminError> {
        self.check()?;
        if self.blog.post(slug)?.is_none() {
            return Err(AdminError::NotFound(slug.to_string()));
        }
        self.blog.delete_post(slug)?;
        Ok(())
    }

    /// Uploads media for a post and returns its URL.
    pub fn upload_media(
        &mut self,
        slug: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, AdminError> {
        self.check()?;
        Ok(self.blog.upload_media(slug, file_name, bytes)?)
    }

    /// Deletes media by URL.
    pub fn delete_media(&mut self, url: &str) -> Result<(), AdminError> {
        self.check()?;
        Ok(self.blog.delete_media(url)?)
    }
}
