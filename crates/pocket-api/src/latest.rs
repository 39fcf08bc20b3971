//! Last-requested-wins gating.
//!
//! A view that refetches when its selection changes hands out a [`Ticket`]
//! per request. When the response arrives it is applied only if no newer
//! ticket has been issued since; older responses are dropped.

use pocket_core::NewInsight;
use pocket_core::enums::{Period, RankRange};
use pocket_core::widgets;

use crate::{error::ApiError, rankings::RankTrends, source::DataSource};

/// Proof of a request issued by a [`SelectionGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic ticket dispenser for one logical selection.
#[derive(Debug, Default)]
pub struct SelectionGate {
    generation: u64,
}

impl SelectionGate {
    /// Issue a ticket, superseding every earlier one.
    pub const fn issue(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// State of the rank-trend chart: which product and range are selected and
/// the last history that arrived for that selection.
#[derive(Debug, Default)]
pub struct RankTrendView {
    gate: SelectionGate,
    selection: Option<(u64, RankRange)>,
    product_name: Option<String>,
    trends: Option<RankTrends>,
    error: Option<String>,
}

impl RankTrendView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the selection. Clears any shown history and returns the ticket
    /// the matching response must present.
    pub fn select(&mut self, product_id: u64, range: RankRange) -> Ticket {
        self.selection = Some((product_id, range));
        self.trends = None;
        self.error = None;
        self.gate.issue()
    }

    /// Apply a response. Returns `false` when `ticket` was superseded, in
    /// which case the view is untouched.
    pub fn apply(&mut self, ticket: Ticket, result: Result<RankTrends, ApiError>) -> bool {
        if !self.gate.is_current(ticket) {
            tracing::debug!(?ticket, "dropping superseded rank-trend response");
            return false;
        }
        match result {
            Ok(trends) => {
                self.trends = Some(trends);
                self.error = None;
            }
            Err(e) => {
                self.trends = None;
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Select, fetch, and apply in one step. Also resolves the product name
    /// shown in the chart title.
    ///
    /// A failed history fetch is recorded in [`Self::error`]. A failed
    /// catalog fetch only loses the name; the chart falls back to the id.
    pub async fn load<S: DataSource>(&mut self, source: &S, product_id: u64, range: RankRange) {
        let ticket = self.select(product_id, range);
        self.product_name = match source.laneige_products().await {
            Ok(products) => products.find(product_id).map(|p| p.display_name()),
            Err(e) => {
                tracing::warn!(product_id, error = %e, "product catalog unavailable");
                None
            }
        };
        let result = source.rank_trends(product_id, range).await;
        self.apply(ticket, result);
    }

    #[must_use]
    pub const fn selection(&self) -> Option<(u64, RankRange)> {
        self.selection
    }

    #[must_use]
    pub const fn trends(&self) -> Option<&RankTrends> {
        self.trends.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pocket registration for what the chart currently shows, or `None`
    /// while nothing is loaded.
    #[must_use]
    pub fn to_insight(&self) -> Option<NewInsight> {
        let (product_id, range) = self.selection?;
        let trends = self.trends.as_ref()?;
        let name = self
            .product_name
            .clone()
            .unwrap_or_else(|| format!("제품 {product_id}"));
        let period: Period = range.period();
        Some(widgets::rank_trend_chart(
            product_id,
            &name,
            period,
            &trends.to_chart_points(),
        ))
    }
}
