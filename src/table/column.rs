//! Columns: a name, a storage type and the values stored under it.

use serde::{Deserialize, Serialize};

use crate::convert::{cast_values, ConversionError, ConversionResult};
use crate::types::ConcreteType;

use super::value::Value;

/// A named column with its storage type.
///
/// Values always agree with `dtype`: a cast replaces both together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColumnDef")]
pub struct Column {
    name: String,
    dtype: ConcreteType,
    values: Vec<Value>,
}

/// Borrowed view of a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnView<'a> {
    pub name: &'a str,
    pub dtype: ConcreteType,
    pub values: &'a [Value],
}

impl Column {
    /// Creates a column, choosing the storage type from the values.
    ///
    /// Nulls are ignored. Integers only → int64; integers and floats →
    /// float64; booleans → bool; text → text; timestamps → timestamp.
    /// Anything else, including no non-null values at all, is stored as
    /// object.
    pub fn new<V: Into<Value>>(name: impl Into<String>, values: Vec<V>) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let dtype = storage_type_of(&values);
        let values = if dtype == ConcreteType::Float64 {
            values
                .into_iter()
                .map(|v| match v {
                    Value::Int(i) => Value::Float(i as f64),
                    other => other,
                })
                .collect()
        } else {
            values
        };

        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Creates a column stored as `dtype`, casting the values into it.
    pub fn with_type<V: Into<Value>>(
        name: impl Into<String>,
        values: Vec<V>,
        dtype: ConcreteType,
    ) -> ConversionResult<Self> {
        let name = name.into();
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let values = cast_values(&name, &values, dtype)?;
        Ok(Self {
            name,
            dtype,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current storage type
    pub fn dtype(&self) -> ConcreteType {
        self.dtype
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn view(&self) -> ColumnView<'_> {
        ColumnView {
            name: &self.name,
            dtype: self.dtype,
            values: &self.values,
        }
    }

    /// Re-stores the column as `dtype`.
    ///
    /// The cast output is built in full before anything is replaced, so a
    /// failed cast leaves the column exactly as it was.
    pub fn cast(&mut self, dtype: ConcreteType) -> ConversionResult<()> {
        let values = cast_values(&self.name, &self.values, dtype)?;
        self.values = values;
        self.dtype = dtype;
        Ok(())
    }
}

/// Serialized form of a column; `dtype` is optional on input.
#[derive(Debug, Deserialize)]
struct ColumnDef {
    name: String,
    #[serde(default)]
    dtype: Option<ConcreteType>,
    values: Vec<Value>,
}

impl TryFrom<ColumnDef> for Column {
    type Error = ConversionError;

    fn try_from(def: ColumnDef) -> Result<Self, Self::Error> {
        match def.dtype {
            Some(dtype) => Column::with_type(def.name, def.values, dtype),
            None => Ok(Column::new(def.name, def.values)),
        }
    }
}

/// Storage type a dataframe constructor would pick for these values.
fn storage_type_of(values: &[Value]) -> ConcreteType {
    let mut present = values.iter().filter(|v| !matches!(v, Value::Null)).peekable();
    if present.peek().is_none() {
        return ConcreteType::Object;
    }

    let (mut ints, mut floats, mut bools, mut texts, mut stamps, mut total) = (0, 0, 0, 0, 0, 0);
    for v in present {
        total += 1;
        match v {
            Value::Int(_) => ints += 1,
            Value::Float(_) => floats += 1,
            Value::Bool(_) => bools += 1,
            Value::Text(_) => texts += 1,
            Value::Timestamp(_) => stamps += 1,
            Value::Null => {}
        }
    }

    if ints == total {
        ConcreteType::Int64
    } else if ints + floats == total {
        ConcreteType::Float64
    } else if bools == total {
        ConcreteType::Bool
    } else if texts == total {
        ConcreteType::Text
    } else if stamps == total {
        ConcreteType::Timestamp
    } else {
        ConcreteType::Object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_from_values() {
        assert_eq!(Column::new("a", vec![1i64, 2, 3]).dtype(), ConcreteType::Int64);
        assert_eq!(Column::new("a", vec!["x", "y"]).dtype(), ConcreteType::Text);
        assert_eq!(Column::new("a", vec![true, false]).dtype(), ConcreteType::Bool);
        assert_eq!(
            Column::new("a", vec![Value::Int(1), Value::Text("x".into())]).dtype(),
            ConcreteType::Object
        );
        assert_eq!(Column::new("a", Vec::<Value>::new()).dtype(), ConcreteType::Object);
        assert_eq!(
            Column::new("a", vec![Value::Null, Value::Null]).dtype(),
            ConcreteType::Object
        );
    }

    #[test]
    fn test_int_and_float_widen_to_float() {
        let col = Column::new("score", vec![Value::Int(1), Value::Int(2), Value::Float(3.5)]);
        assert_eq!(col.dtype(), ConcreteType::Float64);
        assert_eq!(
            col.values(),
            &[Value::Float(1.0), Value::Float(2.0), Value::Float(3.5)]
        );
    }

    #[test]
    fn test_nulls_do_not_decide_storage() {
        let col = Column::new("a", vec![Value::Int(1), Value::Null]);
        assert_eq!(col.dtype(), ConcreteType::Int64);
    }

    #[test]
    fn test_with_type_casts() {
        let col = Column::with_type("age", vec!["1", "2"], ConcreteType::Int64).unwrap();
        assert_eq!(col.values(), &[Value::Int(1), Value::Int(2)]);
        assert!(Column::with_type("age", vec!["x"], ConcreteType::Int64).is_err());
    }

    #[test]
    fn test_failed_cast_leaves_column_untouched() {
        let mut col = Column::new("flag", vec!["1", "no", "3"]);
        let before = col.clone();
        assert!(col.cast(ConcreteType::Int64).is_err());
        assert_eq!(col, before);
    }

    #[test]
    fn test_deserialize_with_and_without_dtype() {
        let col: Column =
            serde_json::from_str(r#"{"name":"age","values":["1","2"]}"#).unwrap();
        assert_eq!(col.dtype(), ConcreteType::Text);

        let col: Column =
            serde_json::from_str(r#"{"name":"age","dtype":"int32","values":["1","2"]}"#)
                .unwrap();
        assert_eq!(col.dtype(), ConcreteType::Int32);
        assert_eq!(col.values(), &[Value::Int(1), Value::Int(2)]);

        let bad: Result<Column, _> =
            serde_json::from_str(r#"{"name":"age","dtype":"int32","values":["x"]}"#);
        assert!(bad.is_err());
    }
}
