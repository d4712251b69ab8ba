//! Load captured cluster API responses and build views from them.
use std::fs::File;
use std::io::Read;

use anyhow::Context;
use anyhow::Result;
use clap::Args;
use serde::de::DeserializeOwned;
use serde_json::Value as Json;
use slog::debug;
use slog::info;
use slog::warn;

use shardview_models::cat::CatNode;
use shardview_models::cat::CatShard;
use shardview_models::NodeRecord;
use shardview_models::ShardRecord;
use shardview_view::IndexQuery;
use shardview_view::ResolvedWatermarks;
use shardview_view::ShardViewModel;

use crate::errors::InputError;
use crate::errors::InputRequired;
use crate::Globals;

/// Path that selects standard input instead of a file.
const STDIN: &str = "-";

/// Captured cluster API responses to inspect.
#[derive(Args, Debug)]
pub struct InputOpts {
    /// JSON response of `_cat/shards?format=json&bytes=b` (`-` reads standard input).
    #[arg(long = "shards", global = true, env = "SHARDVIEW_SHARDS")]
    pub shards: Option<String>,

    /// JSON response of `_cat/nodes?format=json&bytes=b&h=name,ip,node.role,master,heap.current,heap.max,disk.used,disk.total`.
    #[arg(long = "nodes", global = true, env = "SHARDVIEW_NODES")]
    pub nodes: Option<String>,

    /// JSON response of `_cluster/settings?include_defaults=true`.
    #[arg(long = "settings", global = true, env = "SHARDVIEW_SETTINGS")]
    pub settings: Option<String>,
}

impl InputOpts {
    /// Ensure standard input is selected at most once.
    fn check_stdin(&self) -> Result<()> {
        let stdin: Vec<&'static str> = [
            ("shards", &self.shards),
            ("nodes", &self.nodes),
            ("settings", &self.settings),
        ]
        .into_iter()
        .filter(|(_, path)| path.as_deref() == Some(STDIN))
        .map(|(option, _)| option)
        .collect();
        if let [first, second, ..] = stdin.as_slice() {
            anyhow::bail!(InputError::StdinReused(*first, *second));
        }
        Ok(())
    }
}

/// Load shard records from the required `--shards` input.
pub fn shards(globals: &Globals) -> Result<Vec<ShardRecord>> {
    globals.cli.input.check_stdin()?;
    let path = match &globals.cli.input.shards {
        None => anyhow::bail!(InputRequired::shards()),
        Some(path) => path,
    };
    let rows: Vec<CatShard> = read_json(globals, path)?;
    let shards = shardview_models::cat::decode_shards(rows)
        .with_context(|| InputError::Decode(path.clone()))?;
    info!(globals.logger, "Loaded shard records"; "count" => shards.len(), "path" => path);
    Ok(shards)
}

/// Load node records from the optional `--nodes` input.
pub fn nodes(globals: &Globals) -> Result<Vec<NodeRecord>> {
    globals.cli.input.check_stdin()?;
    let path = match &globals.cli.input.nodes {
        None => return Ok(Vec::new()),
        Some(path) => path,
    };
    let rows: Vec<CatNode> = read_json(globals, path)?;
    let nodes = shardview_models::cat::decode_nodes(rows);
    info!(globals.logger, "Loaded node records"; "count" => nodes.len(), "path" => path);
    Ok(nodes)
}

/// Load the cluster settings document from the `--settings` input.
pub fn settings(globals: &Globals) -> Result<Option<Json>> {
    globals.cli.input.check_stdin()?;
    match &globals.cli.input.settings {
        None => Ok(None),
        Some(path) => read_json(globals, path).map(Some),
    }
}

/// Build a [`ShardViewModel`] from the loaded shard and node records.
pub fn view(globals: &Globals, query: IndexQuery) -> Result<ShardViewModel> {
    let shards = shards(globals)?;
    let nodes = nodes(globals)?;
    let mut builder = ShardViewModel::builder();
    builder.shards(shards).nodes(nodes).index_query(query);
    Ok(builder.build())
}

/// Resolve watermarks from the optional settings, falling back to the configured thresholds.
pub fn watermarks(globals: &Globals) -> Result<ResolvedWatermarks> {
    let settings = settings(globals)?.unwrap_or_else(|| Json::Object(Default::default()));
    let resolved = shardview_view::resolve_watermarks(&settings, &globals.conf.watermarks);
    for (name, watermark) in resolved.iter() {
        if let Some(rejected) = &watermark.rejected {
            warn!(
                globals.logger, "Ignored watermark setting that is not a percentage";
                "watermark" => name,
                "value" => rejected,
                "fallback" => watermark.percent,
            );
        }
    }
    Ok(resolved)
}

/// Read and decode a JSON document from a file or standard input.
fn read_json<T>(globals: &Globals, path: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    debug!(globals.logger, "Reading input document"; "path" => path);
    let mut buffer = String::new();
    if path == STDIN {
        std::io::stdin()
            .read_to_string(&mut buffer)
            .with_context(|| InputError::Read(path.into()))?;
    } else {
        let path = crate::utils::resolve_home(path)?;
        File::open(&path)
            .and_then(|mut file| file.read_to_string(&mut buffer))
            .with_context(|| InputError::Read(path.clone()))?;
    }
    let document =
        serde_json::from_str(&buffer).with_context(|| InputError::Decode(path.into()))?;
    Ok(document)
}
