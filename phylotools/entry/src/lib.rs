use anyhow::Result;

use phy_filter::lib_phy_filter;
use phy_missing::lib_phy_missing;
use phy_pick::lib_phy_pick;
use phy_popmap::lib_phy_popmap;
use phy_snps::lib_phy_snps;

pub const TOOLS: [Tool; 5] = [
    Tool::Pick,
    Tool::Missing,
    Tool::Filter,
    Tool::Popmap,
    Tool::Snps,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pick,
    Missing,
    Filter,
    Popmap,
    Snps,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pick => "phy-pick",
            Tool::Missing => "phy-missing",
            Tool::Filter => "phy-filter",
            Tool::Popmap => "phy-popmap",
            Tool::Snps => "phy-snps",
        }
    }

    /// run the tool in-process with its own command line arguments
    pub fn run(&self, args: Vec<String>) -> Result<()> {
        log::info!("Running {} with args: {:?}", self.name(), args);

        match self {
            Tool::Pick => lib_phy_pick(args),
            Tool::Missing => lib_phy_missing(args),
            Tool::Filter => lib_phy_filter(args),
            Tool::Popmap => lib_phy_popmap(args),
            Tool::Snps => lib_phy_snps(args),
        }
    }
}

impl std::str::FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TOOLS
            .iter()
            .find(|tool| tool.name() == s)
            .copied()
            .ok_or_else(|| format!("ERROR: unknown tool {s}"))
    }
}
