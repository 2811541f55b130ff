//! Grouped top-N selection
//!
//! Records are clustered by a substring of their identifier (usually
//! a population code embedded in the sample name) and the `keep`
//! heaviest records of every cluster are retained. Undersized clusters
//! are kept whole and reported back as shortfalls.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickError {
    #[error("ERROR: invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub weight: u64,
}

impl Record {
    pub fn new(id: impl Into<String>, weight: u64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// 1-based, end-inclusive character window used as the group key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyWindow {
    start: usize,
    end: usize,
}

impl KeyWindow {
    pub fn new(start: usize, end: usize) -> Result<Self, PickError> {
        if start < 1 {
            return Err(PickError::InvalidParameter(format!(
                "start must be >= 1, got {start}"
            )));
        }

        if end < start {
            return Err(PickError::InvalidParameter(format!(
                "end ({end}) must be >= start ({start})"
            )));
        }

        Ok(Self { start, end })
    }

    /// group key of `id`; short identifiers yield whatever part of the
    /// window they cover, possibly an empty key
    pub fn key<'a>(&self, id: &'a str) -> &'a str {
        let from = char_offset(id, self.start - 1);
        let to = char_offset(id, self.end);

        &id[from..to]
    }
}

#[inline(always)]
fn char_offset(s: &str, nth: usize) -> usize {
    s.char_indices()
        .nth(nth)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// a group with fewer members than requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub group: String,
    pub size: usize,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Population {} only contains {} individuals (fewer than -k option)",
            self.group, self.size
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub kept: Vec<String>,
    pub excluded: Vec<String>,
    pub shortfalls: Vec<Shortfall>,
}

impl Selection {
    fn close_group(&mut self, group: &str, size: usize, keep: usize) {
        if size < keep {
            self.shortfalls.push(Shortfall {
                group: group.to_string(),
                size,
            });
        }
    }
}

/// keep the `keep` heaviest records of every group
///
/// Records are ordered by ascending group key and then by descending
/// weight; the sort is stable, so equal weights keep their input order.
/// A single pass then keeps a record while its group count is at most
/// `keep`. Both output vectors follow that scan order.
pub fn select(
    records: &[Record],
    start: usize,
    end: usize,
    keep: usize,
) -> Result<Selection, PickError> {
    if keep < 1 {
        return Err(PickError::InvalidParameter(format!(
            "keep must be >= 1, got {keep}"
        )));
    }
    let window = KeyWindow::new(start, end)?;

    let mut sorted = records
        .iter()
        .map(|record| (window.key(&record.id), record))
        .collect::<Vec<_>>();
    sorted.sort_by(|a, b| a.0.cmp(b.0).then_with(|| b.1.weight.cmp(&a.1.weight)));

    let mut selection = Selection::default();
    let mut current: Option<&str> = None;
    let mut count = 0;

    for (key, record) in sorted {
        if current != Some(key) {
            if let Some(group) = current {
                selection.close_group(group, count, keep);
            }
            current = Some(key);
            count = 0;
        }

        count += 1;
        if count <= keep {
            selection.kept.push(record.id.clone());
        } else {
            selection.excluded.push(record.id.clone());
        }
    }

    if let Some(group) = current {
        selection.close_group(group, count, keep);
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    fn records(raw: &[(&str, u64)]) -> Vec<Record> {
        raw.iter().map(|(id, w)| Record::new(*id, *w)).collect()
    }

    fn assert_partition(input: &[Record], start: usize, end: usize, keep: usize) {
        let selection = select(input, start, end, keep).unwrap();
        let window = KeyWindow::new(start, end).unwrap();

        let kept: HashSet<&String> = selection.kept.iter().collect();
        let excluded: HashSet<&String> = selection.excluded.iter().collect();
        let all: HashSet<&String> = input.iter().map(|r| &r.id).collect();

        assert!(kept.is_disjoint(&excluded));
        assert_eq!(kept.union(&excluded).cloned().collect::<HashSet<_>>(), all);

        let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
        for record in input {
            groups.entry(window.key(&record.id)).or_default().push(record);
        }

        for (key, members) in groups.iter() {
            let kept_members = members
                .iter()
                .filter(|r| kept.contains(&r.id))
                .collect::<Vec<_>>();
            assert_eq!(kept_members.len(), members.len().min(keep));

            let lightest_kept = kept_members.iter().map(|r| r.weight).min();
            let heaviest_excluded = members
                .iter()
                .filter(|r| excluded.contains(&r.id))
                .map(|r| r.weight)
                .max();
            if let (Some(k), Some(e)) = (lightest_kept, heaviest_excluded) {
                assert!(k >= e, "group {key}: kept {k} < excluded {e}");
            }

            let warned = selection.shortfalls.iter().any(|s| s.group == *key);
            assert_eq!(warned, members.len() < keep);
        }
    }

    #[test]
    fn test_two_groups() {
        let input = records(&[("AAA1", 10), ("AAA2", 8), ("AAA3", 5), ("BBB1", 3)]);
        let selection = select(&input, 1, 3, 2).unwrap();

        assert_eq!(selection.kept, vec!["AAA1", "AAA2", "BBB1"]);
        assert_eq!(selection.excluded, vec!["AAA3"]);
        assert_eq!(
            selection.shortfalls,
            vec![Shortfall {
                group: "BBB".to_string(),
                size: 1
            }]
        );
    }

    #[test]
    fn test_keep_one_single_record() {
        let input = records(&[("POP1_a", 42)]);
        let selection = select(&input, 1, 4, 1).unwrap();

        assert_eq!(selection.kept, vec!["POP1_a"]);
        assert!(selection.excluded.is_empty());
        assert!(selection.shortfalls.is_empty());
    }

    #[test]
    fn test_keep_one_many_groups() {
        let input = records(&[
            ("BBB2", 7),
            ("AAA1", 1),
            ("BBB1", 9),
            ("AAA2", 3),
            ("CCC1", 4),
        ]);
        let selection = select(&input, 1, 3, 1).unwrap();

        assert_eq!(selection.kept, vec!["AAA2", "BBB1", "CCC1"]);
        assert_eq!(selection.excluded, vec!["AAA1", "BBB2"]);
        assert!(selection.shortfalls.is_empty());
    }

    #[test]
    fn test_last_group_is_checked() {
        let input = records(&[("AAA1", 10), ("AAA2", 8), ("ZZZ1", 1)]);
        let selection = select(&input, 1, 3, 3).unwrap();

        let groups = selection
            .shortfalls
            .iter()
            .map(|s| (s.group.as_str(), s.size))
            .collect::<Vec<_>>();
        assert_eq!(groups, vec![("AAA", 2), ("ZZZ", 1)]);
        assert!(selection.excluded.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = records(&[("AAA3", 5), ("AAA1", 5), ("AAA2", 5)]);
        let selection = select(&input, 1, 3, 2).unwrap();

        assert_eq!(selection.kept, vec!["AAA3", "AAA1"]);
        assert_eq!(selection.excluded, vec!["AAA2"]);
    }

    #[test]
    fn test_scan_order() {
        let input = records(&[
            ("BBB1", 100),
            ("AAA1", 1),
            ("BBB2", 50),
            ("AAA2", 2),
            ("BBB3", 75),
        ]);
        let selection = select(&input, 1, 3, 2).unwrap();

        assert_eq!(selection.kept, vec!["AAA2", "AAA1", "BBB1", "BBB3"]);
        assert_eq!(selection.excluded, vec!["BBB2"]);
    }

    #[test]
    fn test_short_identifiers() {
        let input = records(&[("AB", 3), ("ABCDEFG", 2), ("A", 1), ("", 0)]);
        let selection = select(&input, 1, 10, 1).unwrap();

        assert_eq!(selection.kept.len(), 4);
        assert!(selection.excluded.is_empty());

        let window = KeyWindow::new(3, 5).unwrap();
        assert_eq!(window.key("AB"), "");
        assert_eq!(window.key("ABCD"), "CD");
        assert_eq!(window.key("ABCDEFG"), "CDE");
    }

    #[test]
    fn test_multibyte_identifiers() {
        let window = KeyWindow::new(2, 3).unwrap();
        assert_eq!(window.key("éñü_01"), "ñü");
    }

    #[test]
    fn test_invalid_parameters() {
        let input = records(&[("AAA1", 1)]);

        assert!(matches!(
            select(&input, 1, 3, 0),
            Err(PickError::InvalidParameter(_))
        ));
        assert!(matches!(
            select(&input, 0, 3, 1),
            Err(PickError::InvalidParameter(_))
        ));
        assert!(matches!(
            select(&input, 4, 3, 1),
            Err(PickError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let selection = select(&[], 1, 4, 2).unwrap();
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_idempotent() {
        let input = records(&[("AAA1", 4), ("BBB1", 4), ("AAA2", 4), ("BBB2", 9)]);

        assert_eq!(
            select(&input, 1, 3, 1).unwrap(),
            select(&input, 1, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_partition_properties() {
        let input = (0..60u64)
            .map(|i| {
                let pop = ["AAA", "BBB", "CCC", "DDD", "E"][(i * 7 % 5) as usize];
                Record::new(format!("{pop}_{i:02}"), (i * 37) % 11)
            })
            .collect::<Vec<_>>();

        for keep in 1..=15 {
            assert_partition(&input, 1, 3, keep);
            assert_partition(&input, 2, 6, keep);
        }
    }

    #[test]
    fn test_shortfall_message() {
        let shortfall = Shortfall {
            group: "BBB".to_string(),
            size: 1,
        };

        assert_eq!(
            shortfall.to_string(),
            "Population BBB only contains 1 individuals (fewer than -k option)"
        );
    }
}
