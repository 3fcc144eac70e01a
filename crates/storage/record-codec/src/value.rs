/// A decoded or to-be-encoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    /// Encodes and round-trips as [`Value::Integer`]; there is no distinct
    /// boolean serial type, so a `Bool` written out comes back as an `Integer`.
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}
