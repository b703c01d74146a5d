use std::{collections::BTreeMap, fmt};

use serde_json::{Map, Number, Value};

/// A property value as stored by mpv.
///
/// mpv properties are either scalars or arbitrarily nested arrays and maps
/// of scalars. Values cross the IPC boundary as JSON and are converted into
/// this closed type immediately, so nothing past the adapter ever handles
/// untyped data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// The property exists but has no value (JSON `null`).
    #[default]
    None,

    /// Boolean flag (`yes`/`no` on the mpv command line).
    Flag(bool),

    /// 64-bit signed integer.
    Int64(i64),

    /// Double precision floating point number.
    Double(f64),

    /// UTF-8 string.
    String(String),

    /// Ordered list of nodes.
    Array(Vec<Node>),

    /// String-keyed map of nodes.
    Map(BTreeMap<String, Node>),
}

impl Node {
    /// Returns the boolean value if this node is a flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer value if this node is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64`.
    ///
    /// Integers are widened, since mpv reports whole-second durations and
    /// volumes as integers on some versions.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            Self::Int64(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the string slice if this node is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the element slice if this node is an array.
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the entries if this node is a map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `key` if this node is a map.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|entries| entries.get(key))
    }

    /// Name of the variant, used in format mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flag(_) => "flag",
            Self::Int64(_) => "int64",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Flag(value) => write!(f, "{}", if *value { "yes" } else { "no" }),
            Self::Int64(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::Array(_) | Self::Map(_) => write!(f, "{}", Value::from(self.clone())),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::None,
            Value::Bool(flag) => Self::Flag(flag),
            Value::Number(number) => match number.as_i64() {
                Some(int) => Self::Int64(int),
                None => Self::Double(number.as_f64().unwrap_or_default()),
            },
            Value::String(string) => Self::String(string),
            Value::Array(values) => Self::Array(values.into_iter().map(Node::from).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::None => Value::Null,
            Node::Flag(flag) => Value::Bool(flag),
            Node::Int64(int) => Value::Number(int.into()),
            Node::Double(double) => Number::from_f64(double).map_or(Value::Null, Value::Number),
            Node::String(string) => Value::String(string),
            Node::Array(values) => Value::Array(values.into_iter().map(Value::from).collect()),
            Node::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}
