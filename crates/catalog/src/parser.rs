//! Parser for catalog files.
//!
//! Two formats are accepted:
//! - `.json`: an array of `{"name": ..., "color": ..., "size": ...}` objects
//! - anything else: one product per line, `name::color::size`
//!
//! In the line format blank lines and lines starting with `#` are skipped.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;

const FIELD_COUNT: usize = 3;

impl Catalog {
    /// Load a catalog from disk, picking the format from the file extension.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let products = if is_json {
            parse_products_json(path)?
        } else {
            parse_products(path)?
        };

        tracing::debug!(
            "Loaded {} products from {}",
            products.len(),
            path.display()
        );
        Ok(products.into_iter().collect())
    }
}

/// Parse a JSON catalog file
pub fn parse_products_json(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let products = serde_json::from_str(&content)?;
    Ok(products)
}

/// Parse a `name::color::size` catalog file
pub fn parse_products(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_lines(&content, &file)
}

fn parse_lines(content: &str, file: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line_trimmed.split("::").collect();
        if parts.len() != FIELD_COUNT {
            return Err(CatalogError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: parts.len(),
                line: line_no,
            });
        }

        let name = parts[0].trim();
        if name.is_empty() {
            return Err(CatalogError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "Missing name".to_string(),
            });
        }

        let at_line = |e: CatalogError| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: e.to_string(),
        };
        products.push(Product {
            name: name.to_string(),
            color: parts[1].parse().map_err(at_line)?,
            size: parts[2].parse().map_err(at_line)?,
        });
    }

    Ok(products)
}
