//! Shared configuration for the phylotools workspace
//!
//! Universal constants (defaults, block markers, output suffixes),
//! argument validation and small output helpers used by every
//! phy-tool.

pub mod fns;
pub use fns::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

// pyRAD/ipyrad .stats markers
pub const STATS_HEADER: &str = "taxon";
pub const STATS_TERMINATOR: &str = "##";
pub const STATS_UNLINKED_SNPS: &str = "sampled unlinked SNPs";

// IQ-TREE log markers
pub const IQTREE_UNINFORMATIVE: &str = "WARNING: No ";

// pyRAD .snps locus separator
pub const SNPS_LOCUS_SEPARATOR: &str = " _ ";

// characters that do not count as a called site in a PHYLIP matrix
pub const MISSING_SITES: [char; 4] = ['N', 'n', '-', '?'];

// phy-pick defaults
pub const DEFAULT_GROUP_START: usize = 1;
pub const DEFAULT_GROUP_END: usize = 4;
pub const DEFAULT_PICK_PREFIX: &str = "out";
pub const KEEPERS_SUFFIX: &str = "keepers.csv";
pub const EXCLUDED_SUFFIX: &str = "excluded.csv";

// file names
pub const DEFAULT_MISSING_OUTFILE: &str = "out.csv";
pub const DEFAULT_POPMAP_OUTFILE: &str = "mysampleinfo.txt";
pub const DEFAULT_PHYLIP_OUTFILE: &str = "out.phy";
pub const DEFAULT_BLACKLIST_DIR: &str = "blacklist";

// popmap columns
pub const INDIVIDUAL_COLUMN: &str = "Individual";
pub const BATCH_COLUMN: &str = "batch";
pub const POP_COLUMN: &str = "popID";
pub const SPECIES_COLUMN: &str = "speciesID";
pub const SUBSPECIES_COLUMN: &str = "subspeciesID";
