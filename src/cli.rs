// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Value flags may be bare or repeated; presence is checked by config validation.

use clap::Parser;
use next_target_code::api::DEFAULT_API_URL;
use next_target_code::config::Params;

#[derive(Parser)]
#[command(name = "next-target-code")]
#[command(
    about = "Get the next (or active) target code for blue/green deployments on Docker Cloud"
)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Docker Cloud username
    #[arg(
        long,
        value_name = "USERNAME",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub user: Option<String>,

    /// Docker Cloud API token associated with the username
    #[arg(
        long,
        value_name = "TOKEN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub token: Option<String>,

    /// Internal domain name of the service, as [service].[stack]
    #[arg(
        long,
        value_name = "SERVICE.STACK",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub target: Option<String>,

    /// Hostname of the load balancer; must be on the target stack
    #[arg(
        long,
        value_name = "LOADBALANCER",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub lb: Option<String>,

    /// Suffix codes used for the service [default: blue,green]
    #[arg(
        long,
        value_name = "A,B",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub options: Option<String>,

    /// Return the active code rather than the next code
    #[arg(long)]
    pub active: bool,

    /// Base URL of the orchestration API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn params(&self) -> Params {
        Params {
            target: self.target.clone(),
            lb: self.lb.clone(),
            options: self.options.clone(),
            user: self.user.clone(),
            token: self.token.clone(),
            active: self.active,
            api_url: Some(self.api_url.clone()),
        }
    }
}
