use clap::{ArgGroup, Subcommand};

/// Insight cart commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CartCommands {
    /// List collected insights.
    List,
    /// Show one collected insight with its stored payload.
    Get { id: String },
    /// Remove an insight by id, or every insight with a unique key.
    #[command(group(ArgGroup::new("target").required(true).args(["id", "key"])))]
    Remove {
        id: Option<String>,
        #[arg(long)]
        key: Option<String>,
    },
    /// Remove every collected insight.
    Clear,
}
