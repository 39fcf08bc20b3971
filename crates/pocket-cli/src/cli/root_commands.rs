use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::CartCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Insight cart (the pocket drawer).
    Cart {
        #[command(subcommand)]
        action: CartCommands,
    },
    /// Add a widget's insight to the cart, or remove it if already present.
    Add(AddArgs),
    /// Export selected insights to an XLSX workbook.
    Export(ExportArgs),
    /// Show the chat context lines for a collected insight.
    Context(ContextArgs),
    /// Ask the assistant, optionally attaching collected insights.
    Chat(ChatArgs),
    /// Today's one-paragraph insight.
    Today,
    /// Download today's Markdown report.
    Report(ReportArgs),
    /// LANEIGE products tracked on Amazon.
    Products,
    /// Current Amazon best-seller ranking for a category.
    Ranking(RankingArgs),
    /// Rank history for one product.
    Trends(TrendsArgs),
}

/// Widgets that can be collected into the cart.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Widget {
    StatSales,
    StatRevenue,
    ProductOfMonth,
    RisingProduct,
    MonthlySales,
    Top5,
    ProductDetail,
    Ranking,
    RankTrend,
    ReviewFeedback,
    ReviewSentiment,
    ReviewRatingIndex,
    ReviewRatingDistribution,
    ReviewKeywords,
    KeywordDistribution,
    KeywordRankings,
}

/// Arguments for `pocket add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    pub widget: Widget,
    /// Month (`YYYY-MM`) for month-scoped dashboard widgets. Defaults to the current month.
    #[arg(long)]
    pub month: Option<String>,
    /// Category code (`all_beauty`, `lip_care`, ...) for the ranking table.
    #[arg(long)]
    pub category: Option<String>,
    /// Product id for rank-trend and review widgets.
    #[arg(long)]
    pub product: Option<u64>,
    /// Rank-trend window: week, month, year.
    #[arg(long)]
    pub range: Option<String>,
    /// Snapshot payload (JSON) for widgets the backend does not serve.
    #[arg(long)]
    pub data: Option<String>,
}

/// Arguments for `pocket export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Insight ids to export, in any order.
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub ids: Vec<String>,
    /// Export every collected insight.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for `pocket context`.
#[derive(Clone, Debug, Args)]
pub struct ContextArgs {
    pub id: String,
}

/// Arguments for `pocket chat`.
#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Question for the assistant. May be empty when data is attached.
    #[arg(default_value = "")]
    pub message: String,
    /// Collected insight ids to attach.
    #[arg(long = "attach", short = 'a')]
    pub attach: Vec<String>,
    /// Also generate and save a Markdown report from the answer.
    #[arg(long)]
    pub report: bool,
}

/// Arguments for `pocket report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Directory to save into. Defaults to `chat.report_dir`.
    #[arg(long)]
    pub out: Option<String>,
}

/// Arguments for `pocket ranking`.
#[derive(Clone, Debug, Args)]
pub struct RankingArgs {
    /// Category code. Defaults to `general.default_category`, then `all_beauty`.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `pocket trends`.
#[derive(Clone, Debug, Args)]
pub struct TrendsArgs {
    pub product: u64,
    /// week, month, year
    #[arg(long, default_value = "week")]
    pub range: String,
}
