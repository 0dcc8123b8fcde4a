//! CLI entry point for jdm-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jdm_blog::editor::PostForm;

#[derive(Parser)]
#[command(name = "jdm-blog")]
#[command(version)]
#[command(about = "A tiny blog with a key-value post store and simulated metrics", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default _config.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List posts in feed order
    #[command(alias = "ls")]
    List,

    /// Print a single post
    Show {
        /// Post identifier
        id: String,
    },

    /// Publish a new post
    New {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        #[arg(short, long, default_value = "")]
        excerpt: String,

        #[arg(short, long, default_value = "")]
        publisher: String,

        /// Cover image URL
        #[arg(short, long, default_value = "")]
        image: String,
    },

    /// Add one like
    Like,

    /// Show visitor and like counters
    Metrics,

    /// Start the local page server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Remove stored posts and metrics
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "jdm_blog=debug,info"
    } else {
        "jdm_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            jdm_blog::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::List => {
            let blog = jdm_blog::Blog::new(&base_dir)?;
            jdm_blog::commands::list::run(&blog)?;
        }

        Commands::Show { id } => {
            let blog = jdm_blog::Blog::new(&base_dir)?;
            jdm_blog::commands::show::run(&blog, &id)?;
        }

        Commands::New {
            title,
            content,
            excerpt,
            publisher,
            image,
        } => {
            let blog = jdm_blog::Blog::new(&base_dir)?;
            let form = PostForm {
                title,
                excerpt,
                content,
                publisher,
                image,
            };
            jdm_blog::commands::new::create_post(&blog, form)?;
        }

        Commands::Like => {
            let blog = jdm_blog::Blog::new(&base_dir)?;
            jdm_blog::commands::metrics::like(&blog)?;
        }

        Commands::Metrics => {
            let blog = jdm_blog::Blog::new(&base_dir)?;
            jdm_blog::commands::metrics::show(&blog)?;
        }

        Commands::Server { port, ip, open } => {
            let blog = jdm_blog::Blog::new(&base_dir)?;
            let port = port.unwrap_or(blog.config.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            jdm_blog::server::start(&blog, &ip, port, open).await?;
        }

        Commands::Clean => {
            let blog = jdm_blog::Blog::new(&base_dir)?;
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("jdm-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
