//! Command-line driver for the GameZone core.
//!
//! # Responsibility
//! - Render any route over a local SQLite file as JSON.
//! - Provide seeding and admin maintenance commands.

use clap::{Args, Parser, Subcommand};
use gamezone_core::config::{DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
use gamezone_core::seed::seed_articles;
use gamezone_core::service::admin_service::{DeleteOutcome, Saved};
use gamezone_core::{
    init_logging, open_db, AdminAccess, App, AppConfig, ArticleFilter, ArticleForm, LocalAuthClient,
    LogNotifier, Profile, ProfileRepository, SqliteArticleRepository, SqliteProfileRepository,
};
use log::info;
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use uuid::Uuid;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "gamezone")]
#[command(version, about = "GameZone news site core")]
struct Cli {
    /// SQLite database file.
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = LOG_DIR_ENV)]
    log_dir: Option<PathBuf>,

    #[arg(long, global = true, env = LOG_LEVEL_ENV)]
    log_level: Option<String>,

    /// Act as this signed-in user.
    #[arg(long, global = true)]
    as_user: Option<Uuid>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check core linkage
    Ping,
    /// Render the page for a route path as JSON
    Open {
        path: String,
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short, long, default_value = gamezone_core::ALL_CATEGORIES)]
        category: String,
    },
    /// Insert the sample articles
    Seed,
    /// Give a user the admin role
    GrantAdmin { user_id: Uuid },
    /// Manage articles as the `--as-user` admin
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    Create(ArticleArgs),
    Update {
        id: Uuid,
        #[command(flatten)]
        article: ArticleArgs,
    },
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Form fields to set. Anything omitted keeps its current form value.
#[derive(Args)]
struct ArticleArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    excerpt: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Comma-separated tags.
    #[arg(long)]
    tags: Option<String>,
    #[arg(long, value_name = "BOOL")]
    featured: Option<bool>,
    #[arg(long, value_name = "BOOL")]
    published: Option<bool>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut config = AppConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(dir) = cli.log_dir {
        config.log_dir = Some(dir);
    }
    if let Some(dir) = &config.log_dir {
        init_logging(&config.log_level, dir)?;
    }

    if let Commands::Ping = cli.command {
        println!("gamezone_core ping={}", gamezone_core::ping());
        println!("gamezone_core version={}", gamezone_core::core_version());
        return Ok(());
    }

    let conn = open_db(&config.db_path)?;
    let auth = LocalAuthClient::new();
    if let Some(user_id) = cli.as_user {
        auth.sign_in(user_id);
    }
    let app = App::new(&conn, &auth, Arc::new(LogNotifier));

    match cli.command {
        Commands::Ping => {}
        Commands::Open {
            path,
            query,
            category,
        } => {
            let page = app.open(&path, ArticleFilter::new(query, category));
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Seed => {
            let author = cli.as_user.unwrap_or_else(Uuid::new_v4);
            let ids = seed_articles(&SqliteArticleRepository::new(&conn), author)?;
            println!("seeded {} articles", ids.len());
        }
        Commands::GrantAdmin { user_id } => {
            SqliteProfileRepository::new(&conn).upsert_profile(&Profile::admin(user_id))?;
            info!("event=grant_admin module=cli status=ok user_id={user_id}");
            println!("granted admin to {user_id}");
        }
        Commands::Admin { command } => run_admin(&app, command)?,
    }
    Ok(())
}

fn run_admin(app: &App<'_>, command: AdminCommands) -> CliResult<()> {
    let mut panel = match app.admin_panel() {
        Ok(panel) => panel,
        Err(AdminAccess::SignInRequired(_)) => return Err("sign in with --as-user".into()),
        Err(AdminAccess::Denied(denied)) => return Err(denied.description.into()),
        Err(AdminAccess::Granted(_)) => return Err("admin gate returned no panel".into()),
    };
    let notifier = LogNotifier;

    match command {
        AdminCommands::Create(article) => {
            article.fill(panel.form_mut());
            if let Saved::Created(id) = panel.submit(&notifier)? {
                println!("created {id}");
            }
        }
        AdminCommands::Update { id, article } => {
            panel.edit(id)?;
            article.fill(panel.form_mut());
            if let Saved::Updated(id) = panel.submit(&notifier)? {
                println!("updated {id}");
            }
        }
        AdminCommands::Delete { id, yes } => {
            let confirm = |prompt: &str| yes || ask(prompt);
            match panel.delete(id, &confirm, &notifier)? {
                DeleteOutcome::Deleted => println!("deleted {id}"),
                DeleteOutcome::Cancelled => println!("cancelled"),
            }
        }
    }
    Ok(())
}

impl ArticleArgs {
    fn fill(self, form: &mut ArticleForm) {
        let texts = [
            (self.title, &mut form.title),
            (self.content, &mut form.content),
            (self.excerpt, &mut form.excerpt),
            (self.image_url, &mut form.image_url),
            (self.category, &mut form.category),
            (self.tags, &mut form.tags),
        ];
        for (value, field) in texts {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(featured) = self.featured {
            form.featured = featured;
        }
        if let Some(published) = self.published {
            form.published = published;
        }
    }
}

fn ask(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}
