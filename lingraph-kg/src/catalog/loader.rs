//! TSV table loading for the entry catalog
//!
//! Two tables are consumed: the entries table (at least `name` and `type`
//! columns) and the pre-joined relations table (`from`, `from_type`,
//! `type`, `to`, `to_type`). Columns are addressed by header name, not
//! position. Rows with missing or unregistered values are dropped with a
//! warning; absent files and missing headers abort the load.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{KgError, Result};
use crate::schema::{EndpointType, EntryType, RelationType};

use super::{EntryCatalog, EntryKind, RelationEdge};

pub(super) fn load(entries_path: &Path, relations_path: &Path) -> Result<EntryCatalog> {
    let entries = read_entries(entries_path)?;
    let edges = read_relation_edges(relations_path)?;
    info!(
        entries = entries.len(),
        edges = edges.len(),
        "entry catalog loaded"
    );
    Ok(EntryCatalog::new(entries, edges))
}

/// A TSV table split into a header row and data rows
struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| KgError::missing_data(path.display().to_string(), e.to_string()))?;
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| KgError::missing_data(path.display().to_string(), "empty table"))?
            .split('\t')
            .map(|s| s.trim().to_string())
            .collect();
        let rows = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split('\t').map(|s| s.trim().to_string()).collect())
            .collect();
        Ok(Self { header, rows })
    }

    fn column(&self, name: &str, path: &Path) -> Result<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                KgError::missing_data(
                    path.display().to_string(),
                    format!("missing column '{name}'"),
                )
            })
    }

    /// A row cell, `None` when absent or empty
    fn cell<'a>(row: &'a [String], index: usize) -> Option<&'a str> {
        row.get(index).map(|s| s.as_str()).filter(|s| !s.is_empty())
    }
}

fn read_entries(path: &Path) -> Result<Vec<(String, EntryKind)>> {
    let table = Table::read(path)?;
    let name_col = table.column("name", path)?;
    let type_col = table.column("type", path)?;

    let mut entries = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let (Some(name), Some(type_label)) =
            (Table::cell(row, name_col), Table::cell(row, type_col))
        else {
            continue;
        };
        let kind = if type_label == "author" {
            EntryKind::Author
        } else if let Some(entry_type) = EntryType::from_str(type_label) {
            EntryKind::Entry(entry_type)
        } else {
            warn!(name = %name, entry_type = %type_label, "unregistered entry type, skipping row");
            continue;
        };
        entries.push((name.to_string(), kind));
    }
    Ok(entries)
}

fn read_relation_edges(path: &Path) -> Result<Vec<RelationEdge>> {
    let table = Table::read(path)?;
    let from_col = table.column("from", path)?;
    let from_type_col = table.column("from_type", path)?;
    let type_col = table.column("type", path)?;
    let to_col = table.column("to", path)?;
    let to_type_col = table.column("to_type", path)?;

    let mut edges = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        // Rows missing any derived column are dropped before indexing
        let cells = (
            Table::cell(row, from_col),
            Table::cell(row, from_type_col),
            Table::cell(row, type_col),
            Table::cell(row, to_col),
            Table::cell(row, to_type_col),
        );
        let (Some(from), Some(from_type), Some(type_label), Some(to), Some(to_type)) = cells
        else {
            continue;
        };
        let Some(relation) = RelationType::from_str(type_label) else {
            warn!(relation = %type_label, "unregistered relation type, skipping row");
            continue;
        };
        let (Some(from_type), Some(to_type)) = (
            EndpointType::from_str(from_type),
            EndpointType::from_str(to_type),
        ) else {
            warn!(from = %from, to = %to, "unregistered endpoint type, skipping row");
            continue;
        };
        edges.push(RelationEdge {
            from: from.to_string(),
            to: to.to_string(),
            relation,
            from_type,
            to_type,
        });
    }
    Ok(edges)
}
