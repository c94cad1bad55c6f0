use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// tag the API gateway stage of a freshly deployed stack
    Tag {
        #[command(flatten)]
        deploy: DeployArgs,
    },
    /// show the tag request without sending it
    Plan {
        #[command(flatten)]
        deploy: DeployArgs,
    },
}

#[derive(Args, Clone, Debug)]
pub struct DeployArgs {
    /// Service config file
    #[arg(short, long, default_value = "serverless.jsonnet")]
    pub config: String,
    #[clap(long = "ext-str", short = 'V', value_name = "key=[val]")]
    pub ext_str: Vec<StrKeyVal>,
    /// Deployment stage, overrides provider.stage
    #[arg(short, long)]
    pub stage: Option<String>,
    /// AWS region, overrides provider.region
    #[arg(short, long)]
    pub region: Option<String>,
}

#[derive(Clone, Debug)]
pub struct StrKeyVal {
    pub var: String,
    pub val: Option<String>,
}

impl From<&str> for StrKeyVal {
    fn from(s: &str) -> Self {
        if let Some((key, val)) = s.split_once('=') {
            Self {
                var: key.into(),
                val: Some(val.into()),
            }
        } else {
            Self {
                var: s.into(),
                val: None,
            }
        }
    }
}
