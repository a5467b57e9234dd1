//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use takedown_domain::{LookupProtocol, TakedownReason, TakedownRequestInput};

/// Reason categories accepted by `--reason`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReasonArg {
    /// Copyright infringement
    Copyright,
    /// Trademark infringement
    Trademark,
    /// Defamation or libel
    Defamation,
    /// Privacy violations
    Privacy,
    /// Malware or phishing activities
    Malware,
    /// Violation of terms of service
    TermsOfService,
    /// Personal safety concerns
    PersonalSafety,
    /// Anything else (requires --custom-reason)
    Other,
}

impl ReasonArg {
    /// Build the domain reason, attaching the custom text for `other`.
    pub fn to_reason(self, custom: Option<&str>) -> TakedownReason {
        match self {
            ReasonArg::Copyright => TakedownReason::CopyrightInfringement,
            ReasonArg::Trademark => TakedownReason::TrademarkInfringement,
            ReasonArg::Defamation => TakedownReason::DefamationOrLibel,
            ReasonArg::Privacy => TakedownReason::PrivacyViolations,
            ReasonArg::Malware => TakedownReason::MalwareOrPhishing,
            ReasonArg::TermsOfService => TakedownReason::TermsOfServiceViolation,
            ReasonArg::PersonalSafety => TakedownReason::PersonalSafety,
            ReasonArg::Other => TakedownReason::Other(custom.unwrap_or_default().to_string()),
        }
    }
}

/// Registrar lookup protocol accepted by `--protocol`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    Whois,
    Rdap,
}

impl From<ProtocolArg> for LookupProtocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Whois => LookupProtocol::Whois,
            ProtocolArg::Rdap => LookupProtocol::Rdap,
        }
    }
}

/// Planner accepted by `--planner`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlannerArg {
    /// Hosted model drives the lookup and search with tool calls
    Model,
    /// Fixed lookup → search → compose sequence, no API key needed
    Scripted,
}

/// CLI arguments for takedown
#[derive(Parser, Debug)]
#[command(name = "takedown")]
#[command(author, version, about = "Draft takedown requests to domain registrars")]
#[command(long_about = r#"
Draft takedown requests to domain registrars.

How to use:
1. Provide an OpenAI API key (--api-key or OPENAI_API_KEY) and pick a model.
2. Pass the domain that is the subject of the takedown request (--domain).
3. Select the reason (--reason), or use --reason other with --custom-reason.
4. The registrar is looked up, its abuse contact is searched for, and a draft
   email is written to ./<domain>_takedown_request.txt.
5. Copy the draft and send it to the email address it names.

About:
The registrar is identified with a WHOIS or RDAP lookup, the web is searched
with DuckDuckGo for the registrar's takedown contact, and the email is drafted
citing the reason for the request. With --planner scripted the same steps run
without a hosted model.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. TAKEDOWN_* env vars      e.g. TAKEDOWN_LOOKUP__PROTOCOL=rdap
3. ./takedown.toml          Project-level config
4. ~/.config/takedown/config.toml   Global config

Example:
  takedown --domain example.com --reason copyright
  takedown --domain example.com --reason other --custom-reason "Impersonation" --protocol rdap
  takedown --domain example.com --planner scripted --no-save
"#)]
pub struct Cli {
    /// Domain that is the subject of the takedown request (e.g. example.com)
    #[arg(short, long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Reason for the takedown request
    #[arg(short, long, value_enum, default_value = "copyright")]
    pub reason: ReasonArg,

    /// Free-text reason, required with --reason other
    #[arg(long, value_name = "TEXT")]
    pub custom_reason: Option<String>,

    /// Additional information to include in the request
    #[arg(short, long, value_name = "TEXT")]
    pub info: Option<String>,

    /// Registrar lookup protocol (default from config: whois)
    #[arg(short, long, value_enum)]
    pub protocol: Option<ProtocolArg>,

    /// Model to draft with: gpt-3.5-turbo, gpt-4o, or any custom name
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Planner that drives the lookup, search and drafting
    #[arg(long, value_enum)]
    pub planner: Option<PlannerArg>,

    /// Directory the draft file is written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not write the draft to a file
    #[arg(long)]
    pub no_save: bool,

    /// Write the draft even when no takedown contact address was found
    #[arg(long, conflicts_with = "no_save")]
    pub save_incomplete: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Assemble the unvalidated request, using `default_protocol` when
    /// `--protocol` is absent.
    pub fn request_input(&self, default_protocol: LookupProtocol) -> TakedownRequestInput {
        let protocol = self.protocol.map(LookupProtocol::from).unwrap_or(default_protocol);
        let mut input = TakedownRequestInput::new(
            self.domain.clone().unwrap_or_default(),
            self.reason.to_reason(self.custom_reason.as_deref()),
        )
        .with_protocol(protocol);
        if let Some(info) = &self.info {
            input = input.with_additional_info(info.clone());
        }
        input
    }

    /// Whether an API key was given on the command line or in the environment
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}
