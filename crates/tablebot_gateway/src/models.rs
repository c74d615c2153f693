//! Gateway response shapes.

use serde::Deserialize;
use serde_json::Value;
use tablebot_error::{GatewayError, GatewayErrorKind};

/// A single result record, keyed by column name.
pub type Row = serde_json::Map<String, Value>;

/// Raw query response: parallel column and row arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    /// Column descriptors, in row order.
    pub columns: Vec<ResultSetColumn>,
    /// Row tuples, each as long as `columns`.
    pub rows: Vec<Vec<Value>>,
}

/// A column descriptor in a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSetColumn {
    /// Column name.
    pub name: String,
}

impl ResultSet {
    /// Zip columns and rows into column-keyed records.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayErrorKind::Contract`] when any row's arity differs
    /// from the column list.
    pub fn into_rows(self) -> Result<Vec<Row>, GatewayError> {
        let mut records = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.into_iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(GatewayError::new(GatewayErrorKind::Contract(format!(
                    "row {index} has {} values for {} columns",
                    row.len(),
                    self.columns.len()
                ))));
            }
            let record: Row = self
                .columns
                .iter()
                .map(|column| column.name.clone())
                .zip(row)
                .collect();
            records.push(record);
        }
        Ok(records)
    }
}

/// TABLE NFT metadata served by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// Canonical table name.
    pub name: String,
    /// Gateway URL of this metadata document.
    #[serde(default)]
    pub external_url: Option<String>,
    /// TABLE NFT image.
    #[serde(default)]
    pub image: Option<String>,
    /// Trait list; Tableland publishes the creation timestamp here.
    #[serde(default)]
    pub attributes: Vec<MetadataAttribute>,
}

/// One metadata trait.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataAttribute {
    /// Renderer hint, e.g. `date`.
    #[serde(default)]
    pub display_type: Option<String>,
    /// Trait name.
    pub trait_type: String,
    /// Trait value.
    pub value: Value,
}

impl TableMetadata {
    /// Unix timestamp of table creation.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayErrorKind::Contract`] when the `created` trait is
    /// absent or not an integer.
    pub fn created_at(&self) -> Result<i64, GatewayError> {
        self.attributes
            .iter()
            .find(|attribute| attribute.trait_type == "created")
            .and_then(|attribute| attribute.value.as_i64())
            .ok_or_else(|| {
                GatewayError::new(GatewayErrorKind::Contract(
                    "metadata attribute 'created'".to_owned(),
                ))
            })
    }
}

/// Table schema served by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct TableSchema {
    /// Column definitions.
    pub columns: Vec<SchemaColumn>,
    /// Table-level constraints.
    #[serde(default)]
    pub table_constraints: Vec<String>,
}

/// One column definition in a table schema.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaColumn {
    /// Column name.
    pub name: String,
    /// SQL type.
    #[serde(rename = "type")]
    pub column_type: String,
    /// Column constraints, e.g. `PRIMARY KEY`.
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl TableSchema {
    /// Render the schema as one `name type CONSTRAINTS` line per column.
    pub fn describe(&self) -> String {
        self.columns
            .iter()
            .map(|column| {
                if column.constraints.is_empty() {
                    format!("{} {}", column.name, column.column_type)
                } else {
                    format!(
                        "{} {} {}",
                        column.name,
                        column.column_type,
                        column.constraints.join(" ")
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_zip_with_columns() {
        let set: ResultSet = serde_json::from_value(json!({
            "columns": [{"name": "id"}, {"name": "name"}],
            "rows": [[1, "alice"], [2, "bob"]],
        }))
        .unwrap();

        let rows = set.into_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], json!(1));
        assert_eq!(rows[1]["name"], json!("bob"));
    }

    #[test]
    fn arity_mismatch_is_a_contract_error() {
        let set: ResultSet = serde_json::from_value(json!({
            "columns": [{"name": "id"}],
            "rows": [[1, "extra"]],
        }))
        .unwrap();

        let err = set.into_rows().unwrap_err();
        assert!(matches!(err.kind(), GatewayErrorKind::Contract(_)));
    }

    #[test]
    fn created_at_reads_the_created_trait() {
        let metadata: TableMetadata = serde_json::from_value(json!({
            "name": "healthbot_80001_1",
            "attributes": [
                {"display_type": "date", "trait_type": "created", "value": 1657040584},
            ],
        }))
        .unwrap();

        assert_eq!(metadata.created_at().unwrap(), 1657040584);
    }

    #[test]
    fn missing_created_trait_is_a_contract_error() {
        let metadata: TableMetadata = serde_json::from_value(json!({
            "name": "healthbot_80001_1",
            "attributes": [],
        }))
        .unwrap();

        assert!(metadata.created_at().is_err());
    }

    #[test]
    fn describe_renders_constraints() {
        let schema: TableSchema = serde_json::from_value(json!({
            "columns": [
                {"name": "id", "type": "integer", "constraints": ["primary key"]},
                {"name": "name", "type": "text"},
            ],
        }))
        .unwrap();

        assert_eq!(schema.describe(), "id integer primary key\nname text");
    }
}
