//! Builds the sample grid, prints it, and runs both searches on it.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use valgraph::graph::sample::sample_grid;
use valgraph::{MaxPath, Reachability, SumPolicy, ValueGraph, VertexId};

#[derive(Parser)]
#[command(name = "valgraph-demo")]
#[command(about = "Path-sum and maximum-path searches over the sample grid", long_about = None)]
struct Cli {
    /// Start vertex of the reachability query
    #[arg(long, default_value_t = 1)]
    origin: VertexId,

    /// Target vertex of the reachability query
    #[arg(long, default_value_t = 8)]
    destination: VertexId,

    /// How the reachability query aggregates values
    #[arg(long, value_enum, default_value_t = Policy::PathOnly)]
    policy: Policy,

    /// Emit one JSON document instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Skip printing the graph itself
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Sum of the vertices on the discovered path
    PathOnly,
    /// Sum of every vertex the search entered
    Explored,
}

impl From<Policy> for SumPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::PathOnly => SumPolicy::PathOnly,
            Policy::Explored => SumPolicy::Explored,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<&'a ValueGraph>,
    origin: VertexId,
    destination: VertexId,
    reachability: Option<Reachability>,
    max_path: MaxPath,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let graph = sample_grid().context("failed to build the sample grid")?;

    let reachability = graph
        .reachability(cli.origin, cli.destination, cli.policy.into())
        .map_err(|e| eprintln!("{e}"))
        .ok();
    let max_path = graph.max_path();

    if cli.json {
        let report = Report {
            graph: (!cli.quiet).then_some(&graph),
            origin: cli.origin,
            destination: cli.destination,
            reachability,
            max_path,
        };
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
        return Ok(());
    }

    if !cli.quiet {
        print!("{graph}");
        println!();
    }
    if let Some(r) = &reachability {
        println!(
            "Path sum {} -> {}: {} (path {}, {} vertices explored)",
            cli.origin,
            cli.destination,
            r.sum,
            render_path(&graph, &r.path),
            r.explored
        );
    }
    println!("Maximum sum: {}", max_path.sum);
    println!("Path: {}", render_path(&graph, &max_path.path));
    Ok(())
}

fn render_path(graph: &ValueGraph, path: &[VertexId]) -> String {
    path.iter()
        .filter_map(|&id| graph.vertex(id))
        .map(|v| format!("{}({})", v.id(), v.value()))
        .collect::<Vec<_>>()
        .join(" -> ")
}
