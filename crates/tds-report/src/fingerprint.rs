use polars::prelude::{AnyValue, DataFrame};
use sha2::{Digest, Sha256};
use tds_transform::any_to_string;

/// SHA-256 hex digest over column names, dtypes and cell values.
///
/// Nulls hash differently from empty strings.
pub fn table_fingerprint(df: &DataFrame) -> String {
    let mut hasher = Sha256::new();
    hasher.update(df.height().to_le_bytes());
    for column in df.get_columns() {
        hasher.update(column.name().as_bytes());
        hasher.update([0x1f]);
        hasher.update(column.dtype().to_string().as_bytes());
        hasher.update([0x1e]);
        for index in 0..column.len() {
            match column.get(index) {
                Ok(AnyValue::Null) | Err(_) => hasher.update([0x00]),
                Ok(value) => {
                    hasher.update([0x01]);
                    hasher.update(any_to_string(value).as_bytes());
                }
            }
            hasher.update([0x1f]);
        }
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn frame(amounts: Vec<Option<f64>>) -> DataFrame {
        let columns: Vec<Column> = vec![Series::new("Amount".into(), amounts).into()];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = table_fingerprint(&frame(vec![Some(1.0), None]));
        let b = table_fingerprint(&frame(vec![Some(1.0), None]));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fingerprint_tracks_values() {
        let a = table_fingerprint(&frame(vec![Some(1.0), None]));
        let b = table_fingerprint(&frame(vec![Some(1.0), Some(0.0)]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_fingerprint_tracks_names() {
        let renamed: Vec<Column> = vec![Series::new("Tax".into(), vec![Some(1.0)]).into()];
        let other = DataFrame::new(renamed).unwrap();
        assert_ne!(
            table_fingerprint(&frame(vec![Some(1.0)])),
            table_fingerprint(&other)
        );
    }
}
