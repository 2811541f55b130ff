/// phylotools: file converters and filters for RAD-seq phylogenomics
///
/// This is the entry point for the phylotools CLI.
/// It is responsible for parsing the CLI arguments
/// and executing the appropriate subcommand [phy-tool].
///
/// This wrapper offers 5 different subcommands:
/// - phy-pick
/// - phy-missing
/// - phy-filter
/// - phy-popmap
/// - phy-snps
///
/// Each subcommand forwards its trailing arguments to the
/// corresponding tool, which runs in-process. Every tool is
/// also built as a standalone binary of the same name.
///
/// To get help on the subcommands, you can run:
///
/// ```shell
/// phylotools phy-pick --help
/// ```
///
use clap::{Args, Parser, Subcommand};
use config::{finish, EXIT_FAILURE, EXIT_SUCCESS, VERSION};
use log::{error, info, Level};
use phylotools::Tool;
use simple_logger::init_with_level;

#[derive(Parser)]
#[command(name = "phylotools")]
#[command(about = "phylotools: file converters and filters for RAD-seq phylogenomics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "phy-pick", disable_help_flag = true)]
    Pick(PhyArgs),
    #[command(name = "phy-missing", disable_help_flag = true)]
    Missing(PhyArgs),
    #[command(name = "phy-filter", disable_help_flag = true)]
    Filter(PhyArgs),
    #[command(name = "phy-popmap", disable_help_flag = true)]
    Popmap(PhyArgs),
    #[command(name = "phy-snps", disable_help_flag = true)]
    Snps(PhyArgs),
}

#[derive(Args)]
struct PhyArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();
    let cli = Cli::parse();

    init();

    let (tool, args) = match cli.command {
        Commands::Pick(args) => (Tool::Pick, args.args),
        Commands::Missing(args) => (Tool::Missing, args.args),
        Commands::Filter(args) => (Tool::Filter, args.args),
        Commands::Popmap(args) => (Tool::Popmap, args.args),
        Commands::Snps(args) => (Tool::Snps, args.args),
    };

    tool.run(args).unwrap_or_else(|e| {
        error!("{}", e);
        finish(EXIT_FAILURE);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
    finish(EXIT_SUCCESS);
}

fn init() {
    let message = format!(
        r#"

        phylotools: file converters and filters for RAD-seq phylogenomics

        this is the entry point for the phylotools CLI
        and it is responsible for forwarding the CLI arguments
        to each phy-tool:

        - phy-pick      best N samples per population
        - phy-missing   samples with too much missing data
        - phy-filter    blacklist uninformative IQ-TREE loci
        - phy-popmap    join popmap, batch and species maps
        - phy-snps      pyRAD .snps to PHYLIP

        > version: {}

        * to get help on the subcommands, run:
            phylotools <SUBCOMMAND> --help

        "#,
        VERSION
    );

    println!("{}", message);
}
