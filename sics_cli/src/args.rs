use clap::Parser;
use sics_common::{SicsError, VertexOrder};
use sics_graph::{Backend, Topology};

/// SICS - count subgraph isomorphism embeddings with a chosen CSP variant
#[derive(Parser, Debug)]
#[command(name = "sics")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the pattern graph file
    pub pattern: Option<String>,

    /// Path to the target graph file
    pub target: Option<String>,

    /// Graph storage backend
    #[arg(short = 'd', long, value_enum, default_value = "adjacency-list")]
    pub data_structure: BackendArg,

    /// Graph type
    #[arg(short = 'g', long, value_enum, default_value = "undirected")]
    pub graph_type: TopologyArg,

    /// Benchmark file format of both inputs
    #[arg(short = 'f', long, value_enum, default_value = "amalfi")]
    pub format: FormatArg,

    /// Algorithm variant to run
    #[arg(short = 'a', long, default_value = "backjumping_bitset_degreeprune_ind")]
    pub variant: String,

    /// Static vertex order: DEG, GCF, or a comma-separated permutation.
    /// Omit for dynamic-MRV variants.
    #[arg(short = 'o', long)]
    pub order: Option<String>,

    /// Print each mapping as it is found, before the final count
    #[arg(short = 'm', long, default_value_t = false)]
    pub mapping: bool,

    /// List the registered variant names and exit
    #[arg(long, default_value_t = false)]
    pub list_variants: bool,

    /// Print the resolved search configuration as JSON before running
    #[arg(long, default_value_t = false)]
    pub dump_config: bool,
}

impl Args {
    /// Parse the `--order` argument, if present.
    pub fn vertex_order(&self) -> Result<Option<VertexOrder>, SicsError> {
        self.order.as_deref().map(str::parse).transpose()
    }
}

/// Command-line wrapper for [`Backend`]
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BackendArg {
    /// Neighbor lists only
    #[value(name = "adjacency-list")]
    AdjacencyList,
    /// Neighbor lists plus adjacency matrix
    #[value(name = "adjacency-listmat")]
    AdjacencyListMat,
    /// Degree-sorted matrix backend (inputs are copied and re-sorted)
    #[value(name = "adjacency-degreesortedlistmat")]
    AdjacencyDegreeSortedListMat,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::AdjacencyList => Backend::AdjacencyList,
            BackendArg::AdjacencyListMat => Backend::AdjacencyListMat,
            BackendArg::AdjacencyDegreeSortedListMat => Backend::AdjacencyDegreeSortedListMat,
        }
    }
}

/// Command-line wrapper for [`Topology`]
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TopologyArg {
    /// One symmetric neighbor table
    #[value(name = "undirected")]
    Undirected,
    /// Mirrored forward/backward tables
    #[value(name = "bidirectional")]
    Bidirectional,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Undirected => Topology::Undirected,
            TopologyArg::Bidirectional => Topology::Bidirectional,
        }
    }
}

/// Supported benchmark file formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    /// MIVIA ARG binary (16-bit words)
    #[value(name = "amalfi")]
    Amalfi,
    /// Text adjacency lists
    #[value(name = "gal")]
    Gal,
    /// Text adjacency lists with vertex labels
    #[value(name = "galv")]
    Galv,
    /// Text edge list
    #[value(name = "gf")]
    Gf,
    /// MIVIA LDGraphs binary, unlabeled
    #[value(name = "ldgraphs-unl")]
    LdGraphsUnl,
    /// MIVIA LDGraphs binary, labeled
    #[value(name = "ldgraphs-lab")]
    LdGraphsLab,
}
