use crate::codec_error::CodecError;
use crate::value::Value;
use crate::varint;
use binary_helpers::be::{read_be, write_be};
use indexmap::IndexMap;

const SERIAL_NULL: u64 = 0;
const SERIAL_INTEGER: u64 = 4;
const SERIAL_FLOAT: u64 = 7;
const SERIAL_STRING_BASE: u64 = 13;

fn serial_type_and_body(value: &Value) -> Result<(u64, Vec<u8>), CodecError> {
    match value {
        Value::Null => Ok((SERIAL_NULL, Vec::new())),
        Value::Bool(b) => encode_integer(i64::from(*b)),
        Value::Integer(i) => encode_integer(*i),
        Value::Float(f) => {
            let mut body = [0u8; 8];
            write_be(&mut body, 0, *f)?;
            Ok((SERIAL_FLOAT, body.to_vec()))
        }
        Value::Text(s) => {
            let bytes = s.as_bytes();
            let serial_type = SERIAL_STRING_BASE + 2 * bytes.len() as u64;
            Ok((serial_type, bytes.to_vec()))
        }
    }
}

fn encode_integer(i: i64) -> Result<(u64, Vec<u8>), CodecError> {
    let narrowed = i32::try_from(i).map_err(|_| CodecError::IntegerOverflow(i))?;
    let mut body = [0u8; 4];
    write_be(&mut body, 0, narrowed)?;
    Ok((SERIAL_INTEGER, body.to_vec()))
}

fn decode_value(serial_type: u64, body: &[u8]) -> Result<Value, CodecError> {
    match serial_type {
        SERIAL_NULL => Ok(Value::Null),
        SERIAL_INTEGER => Ok(Value::Integer(i64::from(read_be::<i32>(body, 0)?))),
        SERIAL_FLOAT => Ok(Value::Float(read_be::<f64>(body, 0)?)),
        n if n >= SERIAL_STRING_BASE && n % 2 == 1 => {
            let text = String::from_utf8(body.to_vec())
                .map_err(|_| CodecError::Malformed("string body is not valid utf-8"))?;
            Ok(Value::Text(text))
        }
        n => Err(CodecError::UnknownSerialType(n)),
    }
}

fn body_len(serial_type: u64) -> Option<usize> {
    match serial_type {
        SERIAL_NULL => Some(0),
        SERIAL_INTEGER => Some(4),
        SERIAL_FLOAT => Some(8),
        n if n >= SERIAL_STRING_BASE && n % 2 == 1 => Some(((n - SERIAL_STRING_BASE) / 2) as usize),
        _ => None,
    }
}

/// Encodes `fields` (in the given column order) into a self-describing record.
///
/// `varint(header_size) || serial_type_varints || body_bytes`, per the field
/// classification in [`crate::Value`].
pub fn serialize(fields: &[(String, Value)]) -> Result<Vec<u8>, CodecError> {
    let mut header_body = Vec::new();
    let mut bodies = Vec::new();
    for (_, value) in fields {
        let (serial_type, body) = serial_type_and_body(value)?;
        header_body.extend(varint::encode(serial_type));
        bodies.push(body);
    }

    let header_size = header_body.len() + 1;
    if header_size > 127 {
        return Err(CodecError::TooManyColumns);
    }

    let mut out = varint::encode(header_size as u64);
    out.extend(header_body);
    for body in bodies {
        out.extend(body);
    }
    Ok(out)
}

/// Decodes a record produced by [`serialize`], given the column names in the
/// same order the fields were serialized in.
pub fn deserialize(
    bytes: &[u8],
    columns: &[String],
) -> Result<IndexMap<String, Value>, CodecError> {
    let (header_size, mut cursor) = varint::decode(bytes)
        .ok_or(CodecError::Malformed("truncated header_size varint"))?;
    let header_size = header_size as usize;

    let mut serial_types = Vec::new();
    while cursor < header_size {
        let (serial_type, consumed) = varint::decode(&bytes[cursor..])
            .ok_or(CodecError::Malformed("truncated serial type varint"))?;
        serial_types.push(serial_type);
        cursor += consumed;
    }

    if serial_types.len() != columns.len() {
        return Err(CodecError::ColumnCountMismatch {
            expected: columns.len(),
            actual: serial_types.len(),
        });
    }

    let mut result = IndexMap::with_capacity(columns.len());
    for (column, serial_type) in columns.iter().zip(serial_types) {
        let len =
            body_len(serial_type).ok_or(CodecError::UnknownSerialType(serial_type))?;
        let Some(body) = bytes.get(cursor..cursor + len) else {
            return Err(CodecError::Malformed("record body truncated"));
        };
        result.insert(column.clone(), decode_value(serial_type, body)?);
        cursor += len;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn scenario_a_integer_round_trips() {
        let record = fields(&[("id", Value::Integer(42))]);
        let bytes = serialize(&record).unwrap();
        let decoded = deserialize(&bytes, &columns(&["id"])).unwrap();
        assert_eq!(decoded["id"], Value::Integer(42));
    }

    #[test]
    fn scenario_b_mixed_record_round_trips() {
        let record = fields(&[
            ("a", Value::Null),
            ("b", Value::Bool(true)),
            ("c", Value::Integer(7)),
            ("d", Value::Float(5.9)),
            ("e", Value::Text("hi".to_string())),
        ]);
        let bytes = serialize(&record).unwrap();
        let decoded = deserialize(&bytes, &columns(&["a", "b", "c", "d", "e"])).unwrap();
        assert_eq!(decoded["a"], Value::Null);
        assert_eq!(decoded["b"], Value::Integer(1));
        assert_eq!(decoded["c"], Value::Integer(7));
        assert_eq!(decoded["d"], Value::Float(5.9));
        assert_eq!(decoded["e"], Value::Text("hi".to_string()));
    }

    #[test]
    fn single_field_null_record_is_two_bytes() {
        let bytes = serialize(&fields(&[("a", Value::Null)])).unwrap();
        assert_eq!(bytes, vec![2, 0]);
    }

    #[test]
    fn zero_length_string_has_no_body_bytes() {
        let bytes = serialize(&fields(&[("a", Value::Text(String::new()))])).unwrap();
        let decoded = deserialize(&bytes, &columns(&["a"])).unwrap();
        assert_eq!(decoded["a"], Value::Text(String::new()));
    }

    #[test]
    fn negative_integer_round_trips_signed() {
        let bytes = serialize(&fields(&[("a", Value::Integer(-1))])).unwrap();
        let decoded = deserialize(&bytes, &columns(&["a"])).unwrap();
        assert_eq!(decoded["a"], Value::Integer(-1));
    }

    #[test]
    fn integer_overflowing_i32_is_rejected() {
        let err = serialize(&fields(&[("a", Value::Integer(i64::from(i32::MAX) + 1))]))
            .unwrap_err();
        assert!(matches!(err, CodecError::IntegerOverflow(_)));
    }

    #[test]
    fn column_count_mismatch_is_reported() {
        let bytes = serialize(&fields(&[("a", Value::Integer(1)), ("b", Value::Integer(2))]))
            .unwrap();
        let err = deserialize(&bytes, &columns(&["a"])).unwrap_err();
        assert!(matches!(
            err,
            CodecError::ColumnCountMismatch { expected: 1, actual: 2 }
        ));
    }

    #[test]
    fn empty_record_round_trips() {
        let bytes = serialize(&[]).unwrap();
        assert_eq!(bytes, vec![1]);
        let decoded = deserialize(&bytes, &[]).unwrap();
        assert!(decoded.is_empty());
    }
}
