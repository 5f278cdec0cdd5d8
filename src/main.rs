use std::path::PathBuf;
use std::sync::Arc;

use bulletin::config::{ClientConfig, ConfigError};
use bulletin::net::types::{BoardType, CommentRequest, SearchCondition, SignupRequest};
use bulletin::routes::RouteError;
use bulletin::services;
use bulletin::ui::ConsoleNotifier;
use bulletin::{ApiError, App, AuthState};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Route(#[from] RouteError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "bulletin", about = "Bulletin-board API client and route checker")]
struct Cli {
    /// API root; overrides BOARD_API_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds; overrides BOARD_API_TIMEOUT_SECS.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Access token to act as a logged-in member.
    #[arg(long, env = "BOARD_ACCESS_TOKEN")]
    token: Option<String>,

    /// Member id recorded alongside --token.
    #[arg(long, env = "BOARD_MEMBER_ID", default_value = "cli")]
    member_id: String,

    /// Display name recorded alongside --token; defaults to the member id.
    #[arg(long, env = "BOARD_MEMBER_NAME")]
    member_name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the issued token.
    Login {
        #[arg(long)]
        member_id: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new member.
    Signup {
        #[arg(long)]
        member_id: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        member_name: String,
    },
    /// Check whether a member id is already taken.
    CheckId { member_id: String },
    /// Show the member behind --token.
    Me,
    Board(BoardCommand),
    Categories,
    Comment(CommentCommand),
    /// Download an attachment into a directory.
    Download {
        file_id: i64,
        file_name: String,
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Resolve a page path and run the auth guard on it.
    Navigate { path: String },
}

#[derive(Args, Debug)]
struct BoardCommand {
    #[command(subcommand)]
    command: BoardSubcommand,
}

#[derive(Subcommand, Debug)]
enum BoardSubcommand {
    List {
        board: BoardType,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<i32>,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
        /// Inquiry board only: show only my inquiries.
        #[arg(long)]
        my: bool,
    },
    /// Read a post, counting a view first like the detail page does.
    Show { board: BoardType, id: i64 },
    Delete { board: BoardType, id: i64 },
    IsAuthor { board: BoardType, id: i64 },
}

#[derive(Args, Debug)]
struct CommentCommand {
    #[command(subcommand)]
    command: CommentSubcommand,
}

#[derive(Subcommand, Debug)]
enum CommentSubcommand {
    List { board: BoardType, board_id: i64 },
    Add { board: BoardType, board_id: i64, content: String },
    Delete { comment_id: i64 },
}

#[derive(Serialize)]
struct NavigationReport<'a> {
    requested: String,
    landed: String,
    route: &'a str,
    redirected: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let overrides = [
        ("BOARD_API_BASE_URL", cli.base_url.clone()),
        ("BOARD_API_TIMEOUT_SECS", cli.timeout_secs.map(|secs| secs.to_string())),
    ];
    let config = ClientConfig::from_lookup(|key| {
        overrides
            .iter()
            .find(|(name, _)| *name == key)
            .and_then(|(_, value)| value.clone())
            .or_else(|| std::env::var(key).ok())
    })?;

    let app = App::new(&config, Arc::new(ConsoleNotifier))?;
    tracing::debug!(base_url = app.api.base_url(), timeout = ?config.request_timeout, "client configured");
    seed_session(&app.auth, &cli);

    run(&app, cli.command).await
}

/// Act as a logged-in member when `--token` is given.
fn seed_session(auth: &AuthState, cli: &Cli) {
    if let Some(token) = &cli.token {
        let member_name = cli.member_name.as_deref().unwrap_or(&cli.member_id);
        auth.set_session(token.as_str(), cli.member_id.as_str(), member_name);
    }
}

async fn run(app: &App, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { member_id, password } => print_json(&app.login(&member_id, &password).await?),
        Command::Signup { member_id, password, member_name } => {
            let request = SignupRequest { member_id, password, member_name };
            services::auth::signup(&app.api, &request).await?;
            println!("ok");
            Ok(())
        }
        Command::CheckId { member_id } => {
            let exists = services::auth::check_duplicate(&app.api, &member_id).await?;
            print_json(&serde_json::json!({ "memberId": member_id, "exists": exists }))
        }
        Command::Me => print_json(&services::auth::current_member(&app.api).await?),
        Command::Board(board) => run_board(app, board).await,
        Command::Categories => print_json(&services::category::all(&app.api).await?),
        Command::Comment(comment) => run_comment(app, comment).await,
        Command::Download { file_id, file_name, dir } => {
            let path = services::file::download(&app.api, file_id, &file_name, &dir).await?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Navigate { path } => {
            let navigation = app.navigate(&path)?;
            print_json(&NavigationReport {
                requested: navigation.requested.path(),
                landed: navigation.landed.path(),
                route: navigation.landed.name().as_str(),
                redirected: navigation.was_redirected(),
            })
        }
    }
}

async fn run_board(app: &App, board: BoardCommand) -> Result<(), CliError> {
    match board.command {
        BoardSubcommand::List { board, search, category, page, size, my } => {
            let condition = SearchCondition {
                search_text: search,
                category,
                page_num: page,
                page_size: size,
                my: my.then_some(true),
                ..SearchCondition::default()
            };
            print_json(&services::board::list(&app.api, board, &condition).await?)
        }
        BoardSubcommand::Show { board, id } => {
            services::board::increase_view(&app.api, board, id).await?;
            print_json(&services::board::detail(&app.api, board, id).await?)
        }
        BoardSubcommand::Delete { board, id } => {
            services::board::delete(&app.api, board, id).await?;
            println!("ok");
            Ok(())
        }
        BoardSubcommand::IsAuthor { board, id } => {
            let is_author = services::board::check_author(&app.api, board, id).await?;
            print_json(&serde_json::json!({ "isAuthor": is_author }))
        }
    }
}

async fn run_comment(app: &App, comment: CommentCommand) -> Result<(), CliError> {
    match comment.command {
        CommentSubcommand::List { board, board_id } => {
            print_json(&services::comment::list(&app.api, board, board_id).await?)
        }
        CommentSubcommand::Add { board, board_id, content } => {
            let request = CommentRequest { board_type: board, board_id, content };
            services::comment::create(&app.api, &request).await?;
            println!("ok");
            Ok(())
        }
        CommentSubcommand::Delete { comment_id } => {
            services::comment::delete(&app.api, comment_id).await?;
            println!("ok");
            Ok(())
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
