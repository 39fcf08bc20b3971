use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Cart { action } => commands::cart::handle(&action, ctx, flags),
        Commands::Add(args) => commands::add::run(&args, ctx, flags).await,
        Commands::Export(args) => commands::export::run(&args, ctx, flags).await,
        Commands::Context(args) => commands::context::run(&args, ctx, flags).await,
        Commands::Chat(args) => commands::chat::run(&args, ctx, flags).await,
        Commands::Today => commands::today::run(ctx, flags).await,
        Commands::Report(args) => commands::report::run(&args, ctx, flags).await,
        Commands::Products => commands::products::run(ctx, flags).await,
        Commands::Ranking(args) => commands::ranking::run(&args, ctx, flags).await,
        Commands::Trends(args) => commands::trends::run(&args, ctx, flags).await,
    }
}
