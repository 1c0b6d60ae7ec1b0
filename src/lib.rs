//! Static site generator for a terminal-themed portfolio and blog.

pub mod admin;
mod assets;
pub mod auth;
pub mod blog;
pub mod components;
pub mod config;
pub mod content;
mod generators;
mod highlight;
pub mod pages;
pub mod post;
pub mod site;
pub mod store;
mod util;

pub use admin::{Admin, AdminError};
pub use assets::write_css_assets;
pub use auth::{
    AdminGate, Allowed, AuthError, Authorizer, Denied, Password, SessionFile, SessionToken,
    session_secret,
};
pub use blog::Blog;
pub use config::Config;
pub use content::{Block, ContentRenderer, Inline, excerpt, render};
pub use generators::{BuildOptions, BuildReport, build_site, write_site};
pub use highlight::Highlighter;
pub use post::{BlogPost, PostDate, PostError, slugify};
pub use site::SiteProfile;
pub use store::{
    BlobEntry, BlobStore, DataDir, FileKv, FsBlobStore, KvStore, MemoryBlobs, MemoryKv,
    StoreError,
};
