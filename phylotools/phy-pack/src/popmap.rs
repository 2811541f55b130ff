//! Two-column, whitespace-delimited tables such as population maps:
//! `<individual> <value>` per line, blank lines ignored.

use crate::PackError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopTable {
    pub column: String,
    pub rows: Vec<(String, String)>,
}

impl PopTable {
    pub fn parse(contents: &str, column: &str) -> Result<Self, PackError> {
        let rows = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let mut cols = line.split_whitespace();
                match (cols.next(), cols.next()) {
                    (Some(ind), Some(value)) => Ok((ind.to_string(), value.to_string())),
                    _ => Err(PackError::invalid(
                        idx + 1,
                        format!("expected '<individual> <{column}>'"),
                    )),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            column: column.to_string(),
            rows,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_popmap() {
        let table = PopTable::parse("ind1\tpopA\n\n  ind2   popB  extra\n", "popID").unwrap();

        assert_eq!(table.column, "popID");
        assert_eq!(
            table.rows,
            vec![
                ("ind1".to_string(), "popA".to_string()),
                ("ind2".to_string(), "popB".to_string())
            ]
        );
    }

    #[test]
    fn test_single_column_row() {
        let err = PopTable::parse("ind1 popA\nind2\n", "popID").unwrap_err();
        assert!(matches!(err, PackError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_empty_table() {
        let table = PopTable::parse("\n \n", "batch").unwrap();
        assert!(table.is_empty());
    }
}
