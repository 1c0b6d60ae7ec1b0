//! Page generation modules
//!
//! Each page module exposes a `generate` function returning complete HTML
//! markup. Output locations are fixed site paths; links between pages are
//! made relative to the depth of the page being generated.

pub mod about;
pub mod blog;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod post;
pub mod projects;

/// Stylesheet shared by every page.
pub const SITE_CSS: &str = "assets/site.css";

/// Stylesheet for rendered post content and highlighted code.
pub const POST_CSS: &str = "assets/post.css";

pub const HOME_PATH: &str = "index.html";
pub const ABOUT_PATH: &str = "about/index.html";
pub const PROJECTS_PATH: &str = "projects/index.html";
pub const CONTACT_PATH: &str = "contact/index.html";
pub const BLOG_PATH: &str = "blog/index.html";
pub const POSTS_PATH: &str = "blog/posts/index.html";
pub const NOT_FOUND_PATH: &str = "404.html";

pub use crate::components::cards::post_path;
