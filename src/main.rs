use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::Path;
use termfolio::config::{
    BuildArgs, Command, EditPost, MediaCommand, NewPost, PostCommand, ViewsCommand,
};
use termfolio::{
    Admin, AdminGate, Authorizer, Blog, BlogPost, BuildOptions, Config, ContentRenderer, Denied,
    FileKv, FsBlobStore, Password, SessionFile, SiteProfile, build_site, session_secret,
};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

type LocalBlog = Blog<FileKv, FsBlobStore>;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config);
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Build(args) => build(&config, args),
        Command::Render { file } => render(file),
        Command::Login => login(&config),
        Command::Logout => logout(&config),
        Command::Post(command) => post(&config, command),
        Command::Media(command) => media(&config, command),
        Command::Views(command) => views(&config, command),
    }
}

fn init_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(config.log_level()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn open_blog(config: &Config) -> LocalBlog {
    let data = config.data_dir();
    Blog::new(data.kv(), data.blobs())
}

fn gate(config: &Config) -> AdminGate {
    AdminGate::new(config.admin_key.clone())
}

fn session(config: &Config) -> Option<SessionFile> {
    session_secret(config.session_secret.as_deref(), config.admin_key.as_deref())
        .map(|secret| SessionFile::new(config.data_dir().session_file(), secret))
}

/// Runs `f` with the authorizer for this invocation.
///
/// A `--password` is checked directly; otherwise the stored session token
/// decides. Without any configured secret every admin command is refused.
fn with_authorizer<T>(config: &Config, f: impl FnOnce(&dyn Authorizer) -> T) -> T {
    let gate = gate(config);
    if let Some(password) = config.password.as_deref() {
        return f(&Password::new(&gate, password));
    }
    match session(config) {
        Some(session) => f(&session),
        None => f(&Denied),
    }
}

fn build(config: &Config, args: &BuildArgs) -> Result<()> {
    let data = config.data_dir();
    let profile = match &args.site {
        Some(path) => SiteProfile::load(path)?,
        None if data.site_file().is_file() => SiteProfile::load(data.site_file())?,
        None => SiteProfile::default(),
    };

    let report = build_site(&BuildOptions {
        data,
        output: args.output.clone(),
        profile,
    })
    .context("Failed to build site")?;

    for page in &report.pages {
        println!("Generated: {}", page.display());
    }
    for slug in &report.skipped {
        println!("Skipped: {}", slug);
    }
    println!(
        "Generated {} pages ({} posts), copied {} media files",
        report.pages.len(),
        report.posts,
        report.media_files
    );

    if !args.no_open {
        let index = args.output.join("index.html");
        if let Err(e) = open::that(&index) {
            warn!(error = %e, path = %index.display(), "Failed to open site in browser");
        }
    }

    Ok(())
}

fn render(file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read content file: {}", file.display()))?;
    println!("{}", ContentRenderer::new().render(&content).into_string());
    Ok(())
}

fn login(config: &Config) -> Result<()> {
    let password = config
        .password
        .as_deref()
        .context("login requires --password")?;
    let session = session(config)
        .context("Admin key is not configured (set TERMFOLIO_ADMIN_KEY)")?;

    session.login(&gate(config), password)?;
    println!("Logged in; session saved to {}", session.path().display());
    Ok(())
}

fn logout(config: &Config) -> Result<()> {
    // Removing the token needs no signing secret.
    let session = SessionFile::new(config.data_dir().session_file(), String::new());
    if session.logout()? {
        println!("Logged out");
    } else {
        println!("No active session");
    }
    Ok(())
}

fn post(config: &Config, command: &PostCommand) -> Result<()> {
    let mut blog = open_blog(config);

    match command {
        PostCommand::List => {
            let posts = blog.sorted_posts()?;
            if posts.is_empty() {
                println!("No posts");
            }
            for post in posts {
                println!(
                    "{}  {:<32}  {}  ({} views)",
                    post.date,
                    post.slug,
                    post.title,
                    post.view_count()
                );
            }
        }
        PostCommand::Show { slug } => {
            let post = blog
                .post(slug)?
                .ok_or_else(|| anyhow!("No post with slug '{}'", slug))?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        PostCommand::New(args) => {
            with_authorizer(config, |auth| new_post(&mut blog, auth, args))?;
        }
        PostCommand::Edit(args) => {
            with_authorizer(config, |auth| edit_post(&mut blog, auth, args))?;
        }
        PostCommand::Delete { slug } => {
            with_authorizer(config, |auth| Admin::new(&mut blog, auth).delete(slug))?;
            println!("Deleted post '{}'", slug);
        }
    }

    Ok(())
}

fn new_post(blog: &mut LocalBlog, auth: &dyn Authorizer, args: &NewPost) -> Result<()> {
    let content = fs::read_to_string(&args.content_file).with_context(|| {
        format!("Failed to read content file: {}", args.content_file.display())
    })?;

    let mut post = BlogPost::new(&args.title, &args.excerpt, content);
    if let Some(slug) = &args.slug {
        post.slug = slug.clone();
    }
    if let Some(date) = &args.date {
        post.date = date.clone();
    }
    post.author = args.author.clone();
    for category in &args.categories {
        post.add_category(category);
    }
    post.validate()?;
    if blog.post(&post.slug)?.is_some() {
        bail!("A post with slug '{}' already exists", post.slug);
    }

    let mut admin = Admin::new(blog, auth);
    if let Some(cover) = &args.cover {
        post.cover_image = Some(resolve_cover(&mut admin, &post.slug, cover)?);
    }
    admin.create(&post)?;

    println!("Created post '{}'", post.slug);
    Ok(())
}

fn edit_post(blog: &mut LocalBlog, auth: &dyn Authorizer, args: &EditPost) -> Result<()> {
    let mut post = blog
        .post(&args.slug)?
        .ok_or_else(|| anyhow!("No post with slug '{}'", args.slug))?;

    if let Some(title) = &args.title {
        post.title = title.clone();
    }
    if let Some(excerpt) = &args.excerpt {
        post.excerpt = excerpt.clone();
    }
    if let Some(file) = &args.content_file {
        post.content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read content file: {}", file.display()))?;
    }
    if let Some(date) = &args.date {
        post.date = date.clone();
    }
    if let Some(author) = &args.author {
        post.author = Some(author.clone());
    }
    for category in &args.remove_categories {
        post.remove_category(category);
    }
    for category in &args.categories {
        post.add_category(category);
    }

    let mut admin = Admin::new(blog, auth);
    if let Some(cover) = &args.cover {
        post.cover_image = Some(resolve_cover(&mut admin, &post.slug, cover)?);
    }
    admin.update(&post)?;

    println!("Updated post '{}'", post.slug);
    Ok(())
}

/// Uploads a local cover file, or passes a URL through unchanged.
fn resolve_cover(
    admin: &mut Admin<'_, FileKv, FsBlobStore>,
    slug: &str,
    cover: &str,
) -> Result<String> {
    let path = Path::new(cover);
    if !path.is_file() {
        return Ok(cover.to_string());
    }

    let name = file_name(path)?;
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read cover: {}", path.display()))?;
    Ok(admin.upload_media(slug, name, &bytes)?)
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Cannot extract file name from path: {}", path.display()))
}

fn media(config: &Config, command: &MediaCommand) -> Result<()> {
    let mut blog = open_blog(config);

    match command {
        MediaCommand::Upload { slug, file } => {
            let name = file_name(file)?;
            let bytes = fs::read(file)
                .with_context(|| format!("Failed to read media file: {}", file.display()))?;
            let url = with_authorizer(config, |auth| {
                Admin::new(&mut blog, auth).upload_media(slug, name, &bytes)
            })?;
            println!("{}", url);
        }
        MediaCommand::List { slug } => {
            let entries = blog.list_media(slug)?;
            if entries.is_empty() {
                println!("No media for '{}'", slug);
            }
            for entry in entries {
                println!("{:>10}  {}", entry.size, entry.url);
            }
        }
        MediaCommand::Delete { url } => {
            with_authorizer(config, |auth| Admin::new(&mut blog, auth).delete_media(url))?;
            println!("Deleted {}", url);
        }
    }

    Ok(())
}

fn views(config: &Config, command: &ViewsCommand) -> Result<()> {
    let mut blog = open_blog(config);

    match command {
        ViewsCommand::Track { slug, visitor } => match blog.track_view(slug, visitor)? {
            Some(count) => {
                info!(slug = %slug, count, "Recorded view");
                println!("{}", count);
            }
            None => bail!("No post with slug '{}'", slug),
        },
        ViewsCommand::Show { slug } => match blog.view_count(slug)? {
            Some(count) => println!("{}", count),
            None => bail!("No post with slug '{}'", slug),
        },
    }

    Ok(())
}
