//! SICS command-line front end.
//!
//! Loads a pattern and a target graph from benchmark files and runs one of
//! the registered subgraph-isomorphism search variants, printing each
//! mapping (optionally) and the embedding count to stdout.

mod args;

use clap::Parser;
use sics_common::Result;
use sics_graph::{Backend, Graph, Topology};
use sics_io::{read_amalfi, read_gal, read_galv, read_gf, read_ldgraphs_lab, read_ldgraphs_unl};
use sics_subgraph::{Solver, find_variant, variant_names};
use tracing::info;

use args::{Args, FormatArg};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_variants {
        for name in variant_names() {
            println!("{name}");
        }
        return Ok(());
    }

    if args.dump_config {
        let variant = find_variant(&args.variant)
            .ok_or_else(|| format!("unknown algorithm variant '{}'", args.variant))?;
        println!("{}", serde_json::to_string_pretty(&variant.config)?);
        if args.pattern.is_none() {
            return Ok(());
        }
    }

    let (Some(pattern_path), Some(target_path)) = (&args.pattern, &args.target) else {
        return Err("a pattern file and a target file are required".into());
    };

    let backend: Backend = args.data_structure.into();
    let topology: Topology = args.graph_type.into();
    let order = args.vertex_order()?;

    info!(pattern = %pattern_path, target = %target_path, "loading graphs");
    let pattern = load(backend, topology, args.format, pattern_path)?;
    let target = load(backend, topology, args.format, target_path)?;

    info!(variant = %args.variant, "running search");
    let solver = Solver::new(backend, topology);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    solver.run(
        &args.variant,
        &pattern,
        &target,
        order.as_ref(),
        args.mapping,
        &mut out,
    )?;

    Ok(())
}

/// Read one benchmark file into the selected backend.
///
/// The degree-sorted backend cannot be populated directly; its inputs are
/// read into the plain matrix backend first and then copied under the
/// degree-sorted numbering.
fn load(backend: Backend, topology: Topology, format: FormatArg, path: &str) -> Result<Graph> {
    let read_backend = match backend {
        Backend::AdjacencyDegreeSortedListMat => Backend::AdjacencyListMat,
        other => other,
    };
    let graph = match format {
        FormatArg::Amalfi => read_amalfi(read_backend, topology, path)?,
        FormatArg::Gal => read_gal(read_backend, topology, path)?,
        FormatArg::Galv => read_galv(read_backend, topology, path)?,
        FormatArg::Gf => read_gf(read_backend, topology, path)?,
        FormatArg::LdGraphsUnl => read_ldgraphs_unl(read_backend, topology, path)?,
        FormatArg::LdGraphsLab => read_ldgraphs_lab(read_backend, topology, path)?,
    };
    if backend == Backend::AdjacencyDegreeSortedListMat {
        return Graph::degree_sorted_from(topology, &graph);
    }
    Ok(graph)
}
