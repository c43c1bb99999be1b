//! senadb - interactive guild-management shell
//!
//! Signs in against a SenaDBs backend and exposes the guild features one
//! command per line.

#![allow(missing_docs)]

use anyhow::Context;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use parking_lot::Mutex;
use senadb_client::auth::ManagementAction;
use senadb_client::core::guild::{Confirmer, DispatchOutcome, GuildMember};
use senadb_client::sdk::client::Navigator;
use senadb_client::utils::logging::init_logging;
use senadb_client::{ClientConfig, ClientError, SenaClient, SessionState};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Parser, Debug)]
#[command(name = "senadb", version, about = "Interactive SenaDBs guild client")]
struct Cli {
    /// YAML configuration file; environment variables are used without one
    #[arg(short, long, env = "SENADB_CONFIG")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    api_url: Option<String>,
}

/// One shell line
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Show your account profile
    Profile,
    /// Sign in with a test account
    Login { nickname: String, password: String },
    /// Finish signup with a nickname
    Register { nickname: String },
    /// Sign out
    Logout,
    /// Show your guild
    Guild,
    /// List guild members
    Members,
    /// Actions you may perform on a member
    Actions { user_id: String },
    /// Perform a management action, e.g. `manage kick u-42`
    Manage {
        action: ManagementAction,
        user_id: String,
    },
    /// Defense decks picked by your guild
    Picks,
    /// Show the session state
    Whoami,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Tracks the shell's current page and announces forced sign-outs
struct ShellNavigator {
    current: Mutex<String>,
    announced: AtomicBool,
}

impl ShellNavigator {
    fn new(start: &str) -> Self {
        Self {
            current: Mutex::new(start.to_string()),
            announced: AtomicBool::new(false),
        }
    }

    fn visit(&self, path: &str) {
        *self.current.lock() = path.to_string();
    }

    /// Whether a forced sign-out was announced since the last call
    fn take_announcement(&self) -> bool {
        self.announced.swap(false, Ordering::AcqRel)
    }
}

impl Navigator for ShellNavigator {
    fn current_path(&self) -> String {
        self.current.lock().clone()
    }

    fn navigate(&self, path: &str) {
        println!("{}", ClientError::SessionExpired.user_message());
        self.announced.store(true, Ordering::Release);
        self.visit(path);
    }
}

/// Asks on stdin
struct StdinConfirmer;

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, action: ManagementAction, target: &GuildMember) -> bool {
        let prompt = format!("{} {}? [y/N] ", action.label(), target.display_name());
        match read_line(&prompt).await {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

/// Read one line from stdin without blocking the runtime; `None` on EOF
async fn read_line(prompt: &str) -> std::io::Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        Ok(if read == 0 { None } else { Some(line) })
    })
    .await
    .map_err(std::io::Error::other)?
}

async fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path).await?,
        None => ClientConfig::from_env()?,
    };
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    Ok(config)
}

struct Shell {
    client: SenaClient,
    navigator: Arc<ShellNavigator>,
}

impl Shell {
    async fn member(&self, user_id: &str) -> senadb_client::Result<Option<GuildMember>> {
        self.client.members().find(user_id).await
    }

    /// Run one command; `false` ends the shell
    async fn run(&self, command: ShellCommand) -> senadb_client::Result<bool> {
        match command {
            ShellCommand::Profile => {
                self.navigator.visit("/user/profile");
                match self.client.users().profile().await? {
                    Some(profile) => println!(
                        "{}#{} <{}>",
                        profile.nickname,
                        profile.tag,
                        profile.email.as_deref().unwrap_or("-")
                    ),
                    None => println!("Not signed in."),
                }
            }
            ShellCommand::Login { nickname, password } => {
                self.navigator.visit("/");
                let identity = self.client.auth().login(&nickname, &password).await?;
                println!("Signed in as {}.", identity.user_id);
            }
            ShellCommand::Register { nickname } => {
                self.navigator.visit("/register");
                let identity = self.client.auth().register(&nickname).await?;
                println!("Welcome, {} ({}).", nickname, identity.user_id);
            }
            ShellCommand::Logout => {
                let result = self.client.auth().logout().await;
                self.client.members().invalidate().await;
                self.navigator.visit("/");
                result?;
                println!("Signed out.");
            }
            ShellCommand::Guild => {
                self.navigator.visit("/guild");
                match self.client.guild().info().await? {
                    Some(info) => {
                        println!("{}", info.full_name.or(info.name).unwrap_or_default());
                        if let Some(notice) = info.notice {
                            println!("Notice: {}", notice);
                        }
                    }
                    None => println!("You are not in a guild."),
                }
            }
            ShellCommand::Members => {
                self.navigator.visit("/guild");
                for member in self.client.members().list().await?.iter() {
                    println!(
                        "{:<12} {:<10} {}",
                        member.user_id,
                        member.role,
                        member.display_name()
                    );
                }
            }
            ShellCommand::Actions { user_id } => match self.member(&user_id).await? {
                Some(member) => {
                    let actions = self
                        .client
                        .dispatcher(Arc::new(StdinConfirmer))
                        .available_actions(&member);
                    if actions.is_empty() {
                        println!("No actions available.");
                    }
                    for action in actions {
                        println!("- {}", action);
                    }
                }
                None => println!("No member {}.", user_id),
            },
            ShellCommand::Manage { action, user_id } => match self.member(&user_id).await? {
                Some(member) => {
                    let outcome = self
                        .client
                        .dispatcher(Arc::new(StdinConfirmer))
                        .dispatch(action, &member)
                        .await?;
                    match outcome {
                        DispatchOutcome::Completed { identity_refreshed } => {
                            println!("Done.");
                            if identity_refreshed {
                                println!("Your role is now {}.", self.role_label());
                            }
                        }
                        DispatchOutcome::Declined => println!("Cancelled."),
                        DispatchOutcome::Refused(reason) => println!("{}", reason),
                        DispatchOutcome::SessionExpired => {
                            if !self.navigator.take_announcement() {
                                println!("{}", ClientError::SessionExpired.user_message());
                            }
                        }
                    }
                }
                None => println!("No member {}.", user_id),
            },
            ShellCommand::Picks => {
                self.navigator.visit("/archives");
                for defense in self.client.archive().picked_decks().await? {
                    println!("[{}] {}", defense.id, defense.deck.heroes.join(", "));
                    for attack in defense.picked_attacks() {
                        println!(
                            "    {:?} by {}: {}",
                            attack.score, attack.author_name, attack.description
                        );
                    }
                }
            }
            ShellCommand::Whoami => match self.client.session().snapshot() {
                SessionState::Authenticated(identity) => println!(
                    "{} guild={} role={}",
                    identity.user_id,
                    identity.guild_id.as_deref().unwrap_or("-"),
                    self.role_label()
                ),
                SessionState::Loading => println!("Checking session..."),
                SessionState::Unauthenticated => println!("Not signed in."),
            },
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn role_label(&self) -> String {
        self.client
            .session()
            .role()
            .map(|role| role.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli).await?;
    init_logging(&config.logging)?;

    let navigator = Arc::new(ShellNavigator::new(&config.entry_path));
    let client = SenaClient::new(config, navigator.clone()).context("failed to create client")?;

    match client.auth().bootstrap().await {
        SessionState::Authenticated(identity) => println!("Signed in as {}.", identity.user_id),
        _ => println!("Not signed in. Use `login <nickname> <password>`."),
    }

    let shell = Shell { client, navigator };
    while let Some(line) = read_line("senadb> ").await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };
        let result = shell.run(command).await;
        let announced = shell.navigator.take_announcement();
        match result {
            Ok(true) => {}
            Ok(false) => break,
            Err(ClientError::SessionExpired) if announced => {}
            Err(e) => println!("{}", e.user_message()),
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line config errors readable
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
