use anyhow::bail;
use chrono::Local;
use pocket_core::InsightRecord;
use pocket_core::timestamp::korean_datetime;
use pocket_store::{InsightStore, KeyValueStorage};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CartCommands;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

/// Drawer row: what the cart shows per collected insight.
#[derive(Debug, Serialize)]
struct CartRow {
    id: String,
    title: String,
    page: &'static str,
    #[serde(rename = "type")]
    record_type: &'static str,
    added: String,
}

impl From<&InsightRecord> for CartRow {
    fn from(record: &InsightRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            page: record.page.label(),
            record_type: record.record_type.label(),
            added: korean_datetime(&record.timestamp.with_timezone(&Local)),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct RemoveResponse {
    removed: usize,
    remaining: usize,
}

/// Handle `pocket cart`.
pub fn handle(
    action: &CartCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CartCommands::List => {
            let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
            let mut rows: Vec<CartRow> = ctx.store.records().iter().map(CartRow::from).collect();
            truncate_to(&mut rows, limit);
            output(&rows, flags.format)
        }
        CartCommands::Get { id } => match ctx.store.get(id) {
            Some(record) => output(record, flags.format),
            None => bail!("no insight with id '{id}' in the cart"),
        },
        CartCommands::Remove { id, key } => {
            let response = remove(&mut ctx.store, id.as_deref(), key.as_deref());
            output(&response, flags.format)
        }
        CartCommands::Clear => {
            let removed = ctx.store.len();
            ctx.store.clear();
            output(
                &RemoveResponse {
                    removed,
                    remaining: 0,
                },
                flags.format,
            )
        }
    }
}

fn remove<K: KeyValueStorage>(
    store: &mut InsightStore<K>,
    id: Option<&str>,
    key: Option<&str>,
) -> RemoveResponse {
    let removed = match (id, key) {
        (Some(id), _) => usize::from(store.remove_by_id(id)),
        (None, Some(key)) => store.remove_by_unique_key(key),
        (None, None) => 0,
    };
    RemoveResponse {
        removed,
        remaining: store.len(),
    }
}
