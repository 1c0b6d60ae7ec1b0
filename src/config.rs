//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::store::DataDir;

/// Command line configuration for termfolio.
#[derive(Debug, Clone, Parser)]
#[command(name = "termfolio", version, about, long_about = None)]
pub struct Config {
    /// Data directory holding posts, media and the session token
    #[arg(long, global = true, env = "TERMFOLIO_DATA", default_value = "data")]
    pub data: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Admin password for one-shot admin commands and `login`
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Admin key the password is checked against
    #[arg(long, env = "TERMFOLIO_ADMIN_KEY", hide_env_values = true, hide = true)]
    pub admin_key: Option<String>,

    /// Secret signing session tokens; defaults to the admin key
    #[arg(long, env = "TERMFOLIO_SESSION_SECRET", hide_env_values = true, hide = true)]
    pub session_secret: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top level commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Build the static site
    Build(BuildArgs),

    /// Render a post body file to an HTML fragment on stdout
    Render {
        /// File containing post content
        file: PathBuf,
    },

    /// Start an admin session
    Login,

    /// End the admin session
    Logout,

    /// Manage blog posts
    #[command(subcommand)]
    Post(PostCommand),

    /// Manage uploaded media
    #[command(subcommand)]
    Media(MediaCommand),

    /// Record or show post views
    #[command(subcommand)]
    Views(ViewsCommand),
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site profile JSON; defaults to `<data>/site.json` when present
    #[arg(long)]
    pub site: Option<PathBuf>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PostCommand {
    /// List posts, newest first
    List,

    /// Show one post as JSON
    Show { slug: String },

    /// Create a post
    New(NewPost),

    /// Edit an existing post
    Edit(EditPost),

    /// Delete a post
    Delete { slug: String },
}

#[derive(Debug, Clone, Args)]
pub struct NewPost {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub excerpt: String,

    /// File containing the post body
    #[arg(long)]
    pub content_file: PathBuf,

    /// URL slug; derived from the title when omitted
    #[arg(long)]
    pub slug: Option<String>,

    /// Publication date `YYYY-MM-DD`; defaults to today
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    /// Category, may be repeated
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Cover image: a local file to upload or a URL
    #[arg(long)]
    pub cover: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct EditPost {
    pub slug: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub excerpt: Option<String>,

    #[arg(long)]
    pub content_file: Option<PathBuf>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    /// Category to add, may be repeated
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Category to remove, may be repeated
    #[arg(long = "remove-category")]
    pub remove_categories: Vec<String>,

    /// Cover image: a local file to upload or a URL
    #[arg(long)]
    pub cover: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum MediaCommand {
    /// Upload a file for a post and print its URL
    Upload { slug: String, file: PathBuf },

    /// List media uploaded for a post
    List { slug: String },

    /// Delete media by URL
    Delete { url: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ViewsCommand {
    /// Record a view by a visitor
    Track {
        slug: String,
        #[arg(long)]
        visitor: String,
    },

    /// Show the view count of a post
    Show { slug: String },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input file named on the command line does not
    /// exist, or if `login` is missing a password.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Build(args) => {
                if let Some(site) = &args.site {
                    require_file(site, "Site profile")?;
                }
            }
            Command::Render { file } => require_file(file, "Content file")?,
            Command::Login => {
                if self.password.is_none() {
                    bail!("login requires --password");
                }
            }
            Command::Post(PostCommand::New(post)) => {
                require_file(&post.content_file, "Content file")?;
            }
            Command::Post(PostCommand::Edit(post)) => {
                if let Some(file) = &post.content_file {
                    require_file(file, "Content file")?;
                }
            }
            Command::Media(MediaCommand::Upload { file, .. }) => {
                require_file(file, "Media file")?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Data directory layout.
    pub fn data_dir(&self) -> DataDir {
        DataDir::new(&self.data)
    }

    /// Log filter level for the subscriber.
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    if !path.is_file() {
        bail!("{} does not exist: {}", what, path.display());
    }
    Ok(())
}
