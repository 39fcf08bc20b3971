//! `pocket add <widget>`: the widget "add to pocket" button.
//!
//! Pressing it on a widget already in the cart removes it instead. Live
//! widgets store only their re-fetch parameters; widgets that need a fetch
//! to build their snapshot (rank trend, review cards, top-5 tables without
//! `--data`) query the backend first.

use anyhow::{Context, bail};
use clap::ValueEnum;
use pocket_api::{DataSource, RankTrendView};
use pocket_core::payloads::{KeywordRankRow, ProductDetailRow, SalesPoint, StatSnapshot, Top5Row};
use pocket_core::{CardKind, NewInsight, widgets};
use pocket_store::{InsightStore, KeyValueStorage, Toggle};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AddArgs, Widget};
use crate::commands::shared::parse;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "action")]
enum AddOutcome {
    Added {
        id: String,
        unique_key: String,
        title: String,
        cart_size: usize,
    },
    Removed {
        unique_key: String,
        removed: usize,
        cart_size: usize,
    },
}

pub async fn run(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let default_category = ctx.config.general.default_category.clone();
    let outcome = toggle(&mut ctx.store, &ctx.backend, args, &default_category).await?;
    output(&outcome, flags.format)
}

async fn toggle<K, S>(
    store: &mut InsightStore<K>,
    source: &S,
    args: &AddArgs,
    default_category: &str,
) -> anyhow::Result<AddOutcome>
where
    K: KeyValueStorage,
    S: DataSource,
{
    let key = planned_key(args, default_category)?;
    if store.is_present(&key) {
        let removed = store.remove_by_unique_key(&key);
        return Ok(AddOutcome::Removed {
            unique_key: key,
            removed,
            cart_size: store.len(),
        });
    }

    let new = build(args, source, default_category).await?;
    let unique_key = new.unique_key.clone();
    let title = new.title.clone();
    Ok(match store.toggle(new) {
        Toggle::Added(id) => AddOutcome::Added {
            id,
            unique_key,
            title,
            cart_size: store.len(),
        },
        Toggle::Removed(removed) => AddOutcome::Removed {
            unique_key,
            removed,
            cart_size: store.len(),
        },
    })
}

const fn card_kind(widget: Widget) -> CardKind {
    match widget {
        Widget::StatSales => CardKind::StatSales,
        Widget::StatRevenue => CardKind::StatRevenue,
        Widget::ProductOfMonth => CardKind::ProductOfMonth,
        Widget::RisingProduct => CardKind::RisingProduct,
        Widget::MonthlySales => CardKind::MonthlySalesChart,
        Widget::Top5 => CardKind::Top5Table,
        Widget::ProductDetail => CardKind::ProductDetailTable,
        Widget::Ranking => CardKind::RankingTable,
        Widget::RankTrend => CardKind::RankTrendChart,
        Widget::ReviewFeedback => CardKind::ReviewFeedback,
        Widget::ReviewSentiment => CardKind::ReviewSentiment,
        Widget::ReviewRatingIndex => CardKind::ReviewRatingIndex,
        Widget::ReviewRatingDistribution => CardKind::ReviewRatingDistribution,
        Widget::ReviewKeywords => CardKind::ReviewKeywordInsights,
        Widget::KeywordDistribution => CardKind::KeywordCategoryDistribution,
        Widget::KeywordRankings => CardKind::KeywordRankings,
    }
}

fn widget_name(widget: Widget) -> String {
    widget
        .to_possible_value()
        .map_or_else(|| format!("{widget:?}"), |v| v.get_name().to_string())
}

fn require_product(args: &AddArgs) -> anyhow::Result<u64> {
    args.product
        .with_context(|| format!("{} needs --product <id>", widget_name(args.widget)))
}

/// The `uniqueKey` the widget will register under, known before any fetch.
fn planned_key(args: &AddArgs, default_category: &str) -> anyhow::Result<String> {
    let kind = card_kind(args.widget);
    Ok(match kind {
        CardKind::RankingTable => {
            let category = parse::category(args.category.as_deref(), default_category)?;
            format!("ranking-table-{}", category.as_str())
        }
        CardKind::RankTrendChart => {
            let range = parse::range(args.range.as_deref())?;
            format!("ranking-chart-{}-{}", require_product(args)?, range.period())
        }
        _ if kind.is_review() => format!("{}-{}", kind.as_str(), require_product(args)?),
        _ => kind.as_str().to_string(),
    })
}

async fn build<S: DataSource>(
    args: &AddArgs,
    source: &S,
    default_category: &str,
) -> anyhow::Result<NewInsight> {
    let name = widget_name(args.widget);
    let data = args.data.as_deref();

    let new = match args.widget {
        Widget::StatSales => widgets::stat_sales(&parse::data::<StatSnapshot>(data, &name)?),
        Widget::StatRevenue => widgets::stat_revenue(&parse::data::<StatSnapshot>(data, &name)?),
        Widget::ProductOfMonth => widgets::product_of_month(&parse::month(args.month.as_deref())?),
        Widget::RisingProduct => widgets::rising_product(),
        Widget::MonthlySales => {
            widgets::monthly_sales_chart(&parse::data::<Vec<SalesPoint>>(data, &name)?)
        }
        Widget::Top5 => {
            let month = parse::month(args.month.as_deref())?;
            let rows: Vec<Top5Row> = match data {
                Some(_) => parse::data(data, &name)?,
                None => source.top5_bestsellers(&month).await?.to_top5_rows(),
            };
            widgets::top5_table(&rows, &month)
        }
        Widget::ProductDetail => {
            let month = parse::month(args.month.as_deref())?;
            let rows: Vec<ProductDetailRow> = match data {
                Some(_) => parse::data(data, &name)?,
                None => source.top5_bestsellers(&month).await?.to_product_detail_rows(),
            };
            widgets::product_detail_table(&rows, &month)
        }
        Widget::Ranking => {
            widgets::ranking_table(parse::category(args.category.as_deref(), default_category)?)
        }
        Widget::RankTrend => {
            let product_id = require_product(args)?;
            let range = parse::range(args.range.as_deref())?;
            let mut view = RankTrendView::new();
            view.load(source, product_id, range).await;
            if let Some(error) = view.error() {
                bail!("rank history for product {product_id} unavailable: {error}");
            }
            view.to_insight()
                .with_context(|| format!("no rank history loaded for product {product_id}"))?
        }
        Widget::ReviewFeedback
        | Widget::ReviewSentiment
        | Widget::ReviewRatingIndex
        | Widget::ReviewRatingDistribution
        | Widget::ReviewKeywords => {
            let product_id = require_product(args)?;
            let analysis = source.review_analysis(product_id).await?;
            match args.widget {
                Widget::ReviewFeedback => {
                    widgets::review_feedback(product_id, &analysis.feedback())
                }
                Widget::ReviewSentiment => {
                    widgets::review_sentiment(product_id, &analysis.sentiment())
                }
                Widget::ReviewRatingIndex => {
                    widgets::review_rating_index(product_id, &analysis.reputation())
                }
                Widget::ReviewRatingDistribution => {
                    widgets::review_rating_distribution(product_id, &analysis.rating_shares())
                }
                _ => widgets::review_keyword_insights(product_id, &analysis.keyword_rows()),
            }
        }
        Widget::KeywordDistribution => {
            let map: Map<String, Value> = parse::data(data, &name)?;
            let counts = map
                .into_iter()
                .map(|(category, count)| {
                    count
                        .as_u64()
                        .map(|count| (category.clone(), count))
                        .with_context(|| {
                            format!("mention count for '{category}' must be a non-negative integer")
                        })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            widgets::keyword_category_distribution(&counts)
        }
        Widget::KeywordRankings => {
            widgets::keyword_rankings(&parse::data::<Vec<KeywordRankRow>>(data, &name)?)
        }
    };
    tracing::debug!(widget = %name, unique_key = %new.unique_key, "built widget insight");
    Ok(new)
}

#[cfg(test)]
mod tests {
    use pocket_store::MemoryStorage;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::commands::shared::fake_source::FakeSource;

    fn args(widget: Widget) -> AddArgs {
        AddArgs {
            widget,
            month: None,
            category: None,
            product: None,
            range: None,
            data: None,
        }
    }

    #[tokio::test]
    async fn second_press_removes_the_widget() {
        let mut store = InsightStore::open(MemoryStorage::new(), "cart");
        let stat = AddArgs {
            data: Some(r#"{"value":"21,400개","change":"+12.5%","trend":"up"}"#.into()),
            ..args(Widget::StatSales)
        };

        let added = toggle(&mut store, &FakeSource, &stat, "").await.unwrap();
        assert!(matches!(
            added,
            AddOutcome::Added { ref unique_key, cart_size: 1, .. }
                if unique_key == "dashboard-stat-sales"
        ));

        let removed = toggle(&mut store, &FakeSource, &stat, "").await.unwrap();
        assert_eq!(
            removed,
            AddOutcome::Removed {
                unique_key: "dashboard-stat-sales".into(),
                removed: 1,
                cart_size: 0,
            }
        );
        assert!(!store.is_present("dashboard-stat-sales"));
    }

    #[tokio::test]
    async fn removal_needs_no_backend() {
        let mut store = InsightStore::open(MemoryStorage::new(), "cart");
        store.add(widgets::review_feedback(11, &Default::default()));
        let feedback = AddArgs {
            product: Some(11),
            ..args(Widget::ReviewFeedback)
        };
        let outcome = toggle(&mut store, &FakeSource, &feedback, "").await.unwrap();
        assert!(matches!(outcome, AddOutcome::Removed { removed: 1, .. }));
    }

    #[tokio::test]
    async fn rank_trend_fetches_history_and_name() {
        let mut store = InsightStore::open(MemoryStorage::new(), "cart");
        let trend = AddArgs {
            product: Some(11),
            range: Some("month".into()),
            ..args(Widget::RankTrend)
        };
        toggle(&mut store, &FakeSource, &trend, "").await.unwrap();

        let record = &store.records()[0];
        assert_eq!(record.unique_key, "ranking-chart-11-monthly");
        assert!(record.title.contains("Lip Sleeping Mask"));
        assert_eq!(record.kind(), CardKind::RankTrendChart);
    }

    #[tokio::test]
    async fn failed_fetch_adds_nothing() {
        let mut store = InsightStore::open(MemoryStorage::new(), "cart");
        let sentiment = AddArgs {
            product: Some(11),
            ..args(Widget::ReviewSentiment)
        };
        assert!(toggle(&mut store, &FakeSource, &sentiment, "").await.is_err());
        assert!(store.is_empty());
    }

    #[rstest]
    #[case(Widget::StatRevenue, r#"{"value":"$1.2M"}"#)]
    #[case(Widget::MonthlySales, r#"[{"date":"2025-01","sales":120.0}]"#)]
    #[case(Widget::Top5, r#"[{"rank":1,"name":"Lip Sleeping Mask","sales":3200}]"#)]
    #[case(Widget::ProductDetail, r#"[{"rank":1,"name":"Lip Sleeping Mask","prevRank":3}]"#)]
    #[case(Widget::KeywordDistribution, r#"{"보습":42,"향":17}"#)]
    #[case(Widget::KeywordRankings, r#"[{"rank":1,"keyword":"hydrating","mentions":120}]"#)]
    #[case(Widget::RisingProduct, "")]
    #[case(Widget::ProductOfMonth, "")]
    #[tokio::test]
    async fn planned_key_matches_registration(#[case] widget: Widget, #[case] data: &str) {
        let args = AddArgs {
            data: (!data.is_empty()).then(|| data.to_string()),
            ..args(widget)
        };
        let new = build(&args, &FakeSource, "").await.unwrap();
        assert_eq!(planned_key(&args, "").unwrap(), new.unique_key);
    }

    #[tokio::test]
    async fn ranking_uses_configured_category() {
        let new = build(&args(Widget::Ranking), &FakeSource, "lip_care").await.unwrap();
        assert_eq!(new.unique_key, "ranking-table-lip_care");
        assert_eq!(planned_key(&args(Widget::Ranking), "lip_care").unwrap(), new.unique_key);
    }

    #[test]
    fn review_widgets_require_product() {
        let err = planned_key(&args(Widget::ReviewKeywords), "").unwrap_err();
        assert_eq!(err.to_string(), "review-keywords needs --product <id>");
    }

    #[tokio::test]
    async fn keyword_counts_must_be_integers() {
        let args = AddArgs {
            data: Some(r#"{"보습":"many"}"#.into()),
            ..args(Widget::KeywordDistribution)
        };
        assert!(build(&args, &FakeSource, "").await.is_err());
    }
}
