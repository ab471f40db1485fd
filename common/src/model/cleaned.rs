use serde::Deserialize;

/// One row of the backend's cleaned dataset (`GET /api/cleaned_data`).
///
/// The client never writes these. The backend sends `null` for any column
/// the ETL left empty, `id`, `nombre` and `pais` included; a missing key is
/// treated the same way. Such rows are still shown.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CleanedRow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "pais", default)]
    pub country: Option<String>,
    #[serde(rename = "fecha", default)]
    pub date: Option<String>,
    #[serde(rename = "valor", default)]
    pub value: Option<f64>,
    #[serde(rename = "fuente", default)]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_and_missing_keys_decode_to_none() {
        let body = r#"[
            {"id": 1, "nombre": "x", "pais": "y", "fecha": null, "valor": null, "fuente": null},
            {"id": 2, "nombre": "Italy", "pais": "ITALY"}
        ]"#;
        let rows: Vec<CleanedRow> = serde_json::from_str(body).unwrap();

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.date, None);
            assert_eq!(row.value, None);
            assert_eq!(row.source, None);
        }
        assert_eq!(rows[1].country.as_deref(), Some("ITALY"));
    }

    #[test]
    fn null_key_columns_keep_the_rest_of_the_listing() {
        let body = r#"[
            {"id": 1, "nombre": "Italy", "pais": "ITALY", "fecha": "2025-03-01", "valor": 0.0, "fuente": "favorito"},
            {"id": null, "nombre": "Peru", "pais": null, "fecha": null, "valor": null, "fuente": null}
        ]"#;
        let rows: Vec<CleanedRow> = serde_json::from_str(body).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, Some(1));
        assert_eq!(rows[1].id, None);
        assert_eq!(rows[1].name.as_deref(), Some("Peru"));
        assert_eq!(rows[1].country, None);
    }

    #[test]
    fn decodes_filled_row() {
        let body = r#"{"id": 7, "nombre": "Peru", "pais": "PERU",
                       "fecha": "2025-03-01", "valor": 0.0, "fuente": "favorito"}"#;
        let row: CleanedRow = serde_json::from_str(body).unwrap();

        assert_eq!(row.date.as_deref(), Some("2025-03-01"));
        assert_eq!(row.value, Some(0.0));
        assert_eq!(row.source.as_deref(), Some("favorito"));
    }
}
