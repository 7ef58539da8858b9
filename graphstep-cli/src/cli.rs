use clap::{Args as ClapArgs, Parser, Subcommand};
use graphstep::{
    algorithms::{run_algorithm, AlgorithmType},
    config::{load_config, AppConfig, AppConfigBuilder},
    db::partition::{partition, PartitionStrategy},
    errors::GraphError,
    graph_loader::sample::{sample_graph, sample_graphs},
    io::json::{load_graph_file, save_graph_string},
};
use graphstep_api::core::entities::Graph;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(about = "Run a graph algorithm and print its step trace as JSON")]
struct Args {
    #[arg(long, env = "GRAPHSTEP_CONFIG", default_value = None)]
    config: Option<PathBuf>,

    /// Defaults to the config file's level, then INFO
    #[arg(long, env = "GRAPHSTEP_LOG_LEVEL")]
    log_level: Option<String>,

    #[arg(long, env = "GRAPHSTEP_DAMPING_FACTOR")]
    damping_factor: Option<f64>,

    #[arg(long, env = "GRAPHSTEP_MAX_ITERATIONS")]
    max_iterations: Option<usize>,

    #[arg(long, env = "GRAPHSTEP_NUM_PARTITIONS")]
    num_partitions: Option<usize>,

    #[arg(long, env = "GRAPHSTEP_PARTITION_STRATEGY")]
    partition_strategy: Option<PartitionStrategy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ClapArgs)]
struct GraphSource {
    /// JSON graph file in the exchange format
    #[arg(long, conflicts_with = "sample")]
    graph: Option<PathBuf>,

    /// Name of a bundled sample graph
    #[arg(long)]
    sample: Option<String>,
}

impl GraphSource {
    fn load(&self) -> Result<Graph, GraphError> {
        match (&self.graph, &self.sample) {
            (Some(path), _) => {
                let (graph, report) = load_graph_file(path)?;
                if !report.dropped_edges.is_empty() {
                    info!(
                        dropped = report.dropped_edges.len(),
                        "ignored edges with unknown endpoints"
                    );
                }
                Ok(graph)
            }
            (None, Some(name)) => sample_graph(name),
            (None, None) => Err(GraphError::InvalidGraphFormat(
                "pass either --graph or --sample".to_string(),
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run one algorithm and print the result")]
    Run {
        #[command(flatten)]
        input: GraphSource,

        #[arg(long, short)]
        algorithm: AlgorithmType,

        #[arg(long)]
        source: Option<String>,

        #[arg(long)]
        target: Option<String>,

        /// Print only the path and metrics, without the steps
        #[arg(long, default_value_t = false)]
        summary: bool,
    },
    #[command(about = "Print the graph with partition ids assigned")]
    Partition {
        #[command(flatten)]
        input: GraphSource,
    },
    #[command(about = "List the bundled sample graphs")]
    Samples,
    #[command(about = "List the available algorithms")]
    Algorithms,
}

impl Args {
    /// Flags and their env vars override the config file, which overrides
    /// the defaults.
    fn app_config(&self) -> Result<AppConfig, GraphError> {
        let mut builder = AppConfigBuilder::from(load_config(None, self.config.clone())?);
        if let Some(log_level) = &self.log_level {
            builder = builder.with_log_level(log_level.clone());
        }
        if let Some(damping_factor) = self.damping_factor {
            builder = builder.with_damping_factor(damping_factor);
        }
        if let Some(max_iterations) = self.max_iterations {
            builder = builder.with_max_iterations(max_iterations);
        }
        if let Some(num_partitions) = self.num_partitions {
            builder = builder.with_num_partitions(num_partitions);
        }
        if let Some(partition_strategy) = self.partition_strategy {
            builder = builder.with_partition_strategy(partition_strategy);
        }
        let config = builder.build();
        config.algorithm.validate()?;
        Ok(config)
    }
}

pub(crate) fn cli() -> Result<(), GraphError> {
    let args = Args::parse();
    let app_config = args.app_config()?;
    app_config.logging.init_logger();

    match args.command {
        Commands::Run {
            input,
            algorithm,
            source,
            target,
            summary,
        } => {
            let graph = input.load()?;
            info!(
                %algorithm,
                nodes = graph.count_nodes(),
                edges = graph.count_edges(),
                "running"
            );
            let mut result = run_algorithm(
                &graph,
                algorithm,
                source.as_deref(),
                target.as_deref(),
                &app_config.algorithm,
            );
            if summary {
                result.steps.clear();
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Partition { input } => {
            let graph = input.load()?;
            let config = &app_config.algorithm;
            let partitioned = partition(&graph, config.partition_strategy, config.num_partitions);
            println!("{}", save_graph_string(&partitioned)?);
        }
        Commands::Samples => {
            for (name, graph) in sample_graphs() {
                println!(
                    "{name}: {} nodes, {} edges, {}",
                    graph.count_nodes(),
                    graph.count_edges(),
                    if graph.is_directed() { "directed" } else { "undirected" }
                );
            }
        }
        Commands::Algorithms => {
            for kind in AlgorithmType::ALL {
                let needs = if kind.needs_endpoints() {
                    "source and target"
                } else if kind == AlgorithmType::PregelBfs {
                    "source"
                } else {
                    "no endpoints"
                };
                println!("{kind}: {needs}");
            }
        }
    }
    Ok(())
}
