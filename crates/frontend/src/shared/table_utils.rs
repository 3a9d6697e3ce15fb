//! Turning envelope `data` into table rows

use serde_json::Value;

/// Display text for one cell
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "Ya".to_string(),
        Value::Bool(false) => "Tidak".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Value::Array(items) => format!("[{}]", items.len()),
    }
}

/// Header plus rows.
///
/// A list of objects uses the first object's keys (sorted) as columns; a single
/// object becomes a two-column key/value table; anything else is one cell.
pub fn tabulate(data: &Value) -> (Vec<String>, Vec<Vec<String>>) {
    match data {
        Value::Array(items) => {
            let mut columns: Vec<String> = items
                .iter()
                .find_map(Value::as_object)
                .map(|first| first.keys().cloned().collect())
                .unwrap_or_default();
            columns.sort();
            if columns.is_empty() {
                let rows = items.iter().map(|v| vec![cell_text(v)]).collect();
                return (vec!["Nilai".to_string()], rows);
            }
            let rows = items
                .iter()
                .map(|item| {
                    columns
                        .iter()
                        .map(|c| item.get(c).map(cell_text).unwrap_or_else(|| "-".to_string()))
                        .collect()
                })
                .collect();
            (columns, rows)
        }
        Value::Object(map) => {
            let mut rows: Vec<Vec<String>> = map
                .iter()
                .map(|(k, v)| vec![k.clone(), cell_text(v)])
                .collect();
            rows.sort();
            (vec!["Kolom".to_string(), "Nilai".to_string()], rows)
        }
        other => (vec!["Nilai".to_string()], vec![vec![cell_text(other)]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_of_objects() {
        let data = json!([
            {"id": 1, "name": "Semen", "category": {"name": "Bangunan"}},
            {"id": 2, "name": "Pasir"}
        ]);
        let (columns, rows) = tabulate(&data);
        assert_eq!(columns, vec!["category", "id", "name"]);
        assert_eq!(rows[0], vec!["Bangunan", "1", "Semen"]);
        assert_eq!(rows[1], vec!["-", "2", "Pasir"]);
    }

    #[test]
    fn test_single_object() {
        let (columns, rows) = tabulate(&json!({"total_sales": 1500000, "active": true}));
        assert_eq!(columns, vec!["Kolom", "Nilai"]);
        assert_eq!(rows, vec![vec!["active", "Ya"], vec!["total_sales", "1500000"]]);
    }

    #[test]
    fn test_scalars() {
        let (_, rows) = tabulate(&json!(["a", null]));
        assert_eq!(rows, vec![vec!["a"], vec!["-"]]);
        let (_, rows) = tabulate(&json!(42));
        assert_eq!(rows, vec![vec!["42"]]);
    }
}
