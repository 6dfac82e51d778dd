//! CLI commands

use anyhow::{Result, bail};
use clap::{Args, Subcommand, ValueEnum};
use sayhi_frontend::Session;
use sayhi_frontend::router::{CONFIG_PATH, HOME_PATH, LOGIN_PATH};
use sayhi_http::types::{
    Credentials, Encoding, GenerateMode, PositionConfig, PositionValueRequest,
    SpeechGroupRequest, SpeechGroupUpdateRequest, TemplateRequest,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the session
    Login(CredentialArgs),

    /// Create an account
    Register(CredentialArgs),

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Generate messages from a template
    Generate(GenerateArgs),

    /// Position value configuration
    Positions {
        #[command(subcommand)]
        command: PositionCommands,
    },

    /// Speech group configuration
    Speech {
        #[command(subcommand)]
        command: SpeechCommands,
    },

    /// Check that the backend is up
    Health,
}

#[derive(Args)]
pub struct CredentialArgs {
    username: String,

    /// Password (prefer the environment variable over the command line)
    #[arg(long, env = "SAYHI_PASSWORD", hide_env_values = true)]
    password: String,
}

impl From<CredentialArgs> for Credentials {
    fn from(args: CredentialArgs) -> Self {
        Self::new(args.username, args.password)
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Read the whole request from a JSON file; other flags are ignored
    #[arg(long, conflicts_with_all = ["template", "a", "b", "c", "d"])]
    request: Option<PathBuf>,

    /// Template text, e.g. "{A}{B}{C}{D}"
    #[arg(long)]
    template: Option<String>,

    #[arg(long, value_enum, default_value = "sequential")]
    mode: ModeArg,

    /// Encoding used to count message length
    #[arg(long, value_enum)]
    encoding: Option<EncodingArg>,

    /// Values for position A (repeatable)
    #[arg(short = 'a', long = "a")]
    a: Vec<String>,

    /// Values for position B (repeatable)
    #[arg(short = 'b', long = "b")]
    b: Vec<String>,

    /// Values for position C (repeatable)
    #[arg(short = 'c', long = "c")]
    c: Vec<String>,

    /// Values for position D (repeatable)
    #[arg(short = 'd', long = "d")]
    d: Vec<String>,

    /// Positions to combine (repeatable, all when omitted)
    #[arg(long = "select")]
    selected: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Sequential,
    Random,
}

impl From<ModeArg> for GenerateMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => Self::Sequential,
            ModeArg::Random => Self::Random,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EncodingArg {
    Ascii,
    Zawgyi,
    Unicode,
    Other,
}

impl From<EncodingArg> for Encoding {
    fn from(encoding: EncodingArg) -> Self {
        match encoding {
            EncodingArg::Ascii => Self::Ascii,
            EncodingArg::Zawgyi => Self::Zawgyi,
            EncodingArg::Unicode => Self::Unicode,
            EncodingArg::Other => Self::Other,
        }
    }
}

impl GenerateArgs {
    fn into_request(self) -> Result<TemplateRequest> {
        if let Some(path) = self.request {
            let content = std::fs::read_to_string(&path)?;
            return Ok(serde_json::from_str(&content)?);
        }

        Ok(TemplateRequest {
            template: self.template,
            encoding: self.encoding.map(Into::into),
            encodings: BTreeMap::new(),
            generate_mode: self.mode.into(),
            positions: PositionConfig {
                a: self.a,
                b: self.b,
                c: self.c,
                d: self.d,
            },
            speech_groups: BTreeMap::new(),
            selected_positions: self.selected,
        })
    }
}

#[derive(Subcommand)]
pub enum PositionCommands {
    /// List the values of every position
    List,

    /// Show the values of one position
    Get { position: String },

    /// Add a value to a position
    Add { position: String, value: String },

    /// Replace every value of a position
    Set {
        position: String,
        values: Vec<String>,
    },

    /// Remove a value from a position
    Delete { position: String, value: String },
}

#[derive(Subcommand)]
pub enum SpeechCommands {
    /// List speech groups
    List,

    /// Show one speech group
    Get { id: i64 },

    /// Create a speech group
    Create {
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Speeches in the group
        speeches: Vec<String>,
    },

    /// Update the given fields of a speech group
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Replacement speeches (repeatable)
        #[arg(long = "speech")]
        speeches: Option<Vec<String>>,
    },

    /// Delete a speech group
    Delete { id: i64 },
}

impl Commands {
    /// Route the command's view lives on, if it has one
    pub const fn route(&self) -> Option<&'static str> {
        match self {
            Self::Login(_) | Self::Register(_) => Some(LOGIN_PATH),
            Self::Whoami | Self::Generate(_) => Some(HOME_PATH),
            Self::Positions { .. } | Self::Speech { .. } => Some(CONFIG_PATH),
            Self::Logout | Self::Health => None,
        }
    }

    pub async fn execute(self, session: &Session) -> Result<()> {
        if let Some(route) = self.route() {
            enter(session, route)?;
        }

        match self {
            Self::Login(args) => {
                let response = session.login(&args.into()).await?;
                print_json(&response)
            }
            Self::Register(args) => {
                let response = session.register(&args.into()).await?;
                print_json(&response)
            }
            Self::Logout => {
                session.logout()?;
                info!("Session cleared");
                Ok(())
            }
            Self::Whoami => print_json(&session.api().get_user_info().await?),
            Self::Generate(args) => {
                let request = args.into_request()?;
                print_json(&session.api().generate_template(&request).await?)
            }
            Self::Positions { command } => command.execute(session).await,
            Self::Speech { command } => command.execute(session).await,
            Self::Health => print_json(&session.api().health().await?),
        }
    }
}

impl PositionCommands {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let api = session.api();
        match self {
            Self::List => print_json(&api.get_all_positions().await?),
            Self::Get { position } => print_json(&api.get_position_values(&position).await?),
            Self::Add { position, value } => {
                let request = PositionValueRequest { position, value };
                print_json(&api.add_position_value(&request).await?)
            }
            Self::Set { position, values } => {
                print_json(&api.set_position_values(&position, values).await?)
            }
            Self::Delete { position, value } => {
                print_json(&api.delete_position_value(&position, &value).await?)
            }
        }
    }
}

impl SpeechCommands {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let api = session.api();
        match self {
            Self::List => print_json(&api.list_speech_groups().await?),
            Self::Get { id } => print_json(&api.get_speech_group(id).await?),
            Self::Create {
                name,
                description,
                speeches,
            } => {
                let request = SpeechGroupRequest {
                    name,
                    description,
                    speeches,
                };
                print_json(&api.create_speech_group(&request).await?)
            }
            Self::Update {
                id,
                name,
                description,
                speeches,
            } => {
                let update = SpeechGroupUpdateRequest {
                    name,
                    description,
                    speeches,
                };
                print_json(&api.update_speech_group(id, &update).await?)
            }
            Self::Delete { id } => print_json(&api.delete_speech_group(id).await?),
        }
    }
}

/// Navigate to `route` and fail if the guard sends us elsewhere
fn enter(session: &Session, route: &str) -> Result<()> {
    let landed = session.router().push(route)?;
    if landed.path == route {
        return Ok(());
    }

    if route == LOGIN_PATH {
        bail!(
            "Already logged in as {}, run `sayhi logout` first",
            session.auth().username()
        );
    }
    bail!("Not logged in, run `sayhi login` first")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
