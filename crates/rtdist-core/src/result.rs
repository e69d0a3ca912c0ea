//! Result tree handed to chart renderers

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Node of the result tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultData {
    /// Scalar leaf
    Value(Value),
    /// Ordered list
    List(Vec<ResultData>),
    /// Named children
    Map(MapResult),
}

impl ResultData {
    /// Scalar leaf
    pub fn value(value: impl Into<Value>) -> Self {
        ResultData::Value(value.into())
    }

    /// List node
    pub fn list(items: impl IntoIterator<Item = ResultData>) -> Self {
        ResultData::List(items.into_iter().collect())
    }

    /// Scalar content, if a leaf
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ResultData::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Items, if a list
    pub fn as_list(&self) -> Option<&[ResultData]> {
        match self {
            ResultData::List(items) => Some(items),
            _ => None,
        }
    }

    /// Children, if a map
    pub fn as_map(&self) -> Option<&MapResult> {
        match self {
            ResultData::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<MapResult> for ResultData {
    fn from(map: MapResult) -> Self {
        ResultData::Map(map)
    }
}

/// Map node of the result tree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MapResult {
    entries: BTreeMap<String, ResultData>,
}

impl MapResult {
    /// Empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a child, replacing any previous one
    pub fn set_result(&mut self, key: impl Into<String>, data: impl Into<ResultData>) {
        self.entries.insert(key.into(), data.into());
    }

    /// Child by key
    pub fn get(&self, key: &str) -> Option<&ResultData> {
        self.entries.get(key)
    }

    /// Child names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no children
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
