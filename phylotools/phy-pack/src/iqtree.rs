use config::IQTREE_UNINFORMATIVE;
use hashbrown::HashSet;

/// loci files IQ-TREE flagged with `WARNING: No ...`; the file name is
/// the last token of each warning line. Each locus is reported once, in
/// order of first appearance.
pub fn uninformative_loci(contents: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    contents
        .lines()
        .filter(|line| line.starts_with(IQTREE_UNINFORMATIVE))
        .filter_map(|line| line.split_whitespace().last())
        .filter(|locus| seen.insert(*locus))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninformative_loci() {
        let log = "\
IQ-TREE multicore version 1.6.12
Reading partition model file loci.nex ...
WARNING: No parsimony-informative sites in partition locus_12.phy
WARNING: Some sequences contain more than 50% gaps/missing data
WARNING: No variant sites in partition locus_40.phy
  WARNING: No indented warnings count
";

        assert_eq!(
            uninformative_loci(log),
            vec!["locus_12.phy".to_string(), "locus_40.phy".to_string()]
        );
    }

    #[test]
    fn test_repeated_locus_reported_once() {
        let log = "\
WARNING: No parsimony-informative sites in partition locus_7.phy
WARNING: No variant sites in partition locus_3.phy
WARNING: No variant sites in partition locus_7.phy
";

        assert_eq!(
            uninformative_loci(log),
            vec!["locus_7.phy".to_string(), "locus_3.phy".to_string()]
        );
    }

    #[test]
    fn test_clean_log() {
        assert!(uninformative_loci("Analysis results written to:\n").is_empty());
    }
}
