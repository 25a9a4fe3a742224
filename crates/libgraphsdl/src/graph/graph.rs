use crate::graph::GraphItem;
use crate::graph::Memo;
use crate::graph::NameIndex;
use crate::graph::Node;
use crate::graph::Record;
use crate::graph::Root;
use indexmap::IndexMap;
use thiserror::Error;

/// The complete description of an API surface.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Graph {
    pub(crate) items: Vec<GraphItem>,

    #[serde(default)]
    pub(crate) data_types: IndexMap<String, Record>,

    #[serde(skip)]
    pub(crate) root: Memo<Root>,

    #[serde(skip)]
    pub(crate) edges_index: NameIndex,
}
impl Graph {
    pub fn new(items: Vec<GraphItem>) -> Self {
        Self {
            items,
            data_types: IndexMap::new(),
            root: Memo::default(),
            edges_index: NameIndex::default(),
        }
    }

    pub fn with_data_types(
        mut self,
        data_types: IndexMap<String, Record>,
    ) -> Self {
        self.data_types = data_types;
        self
    }

    /// Named structural types, in declaration order.
    pub fn data_types(&self) -> &IndexMap<String, Record> {
        &self.data_types
    }

    /// Look up a named node.
    ///
    /// Callers are expected to give each node a unique name. If two nodes do
    /// share a name, the later one is returned.
    pub fn edge(&self, name: &str) -> Option<&Node> {
        self.edges_index
            .lookup(&self.items, GraphItem::name, name)
            .and_then(GraphItem::as_node)
    }

    /// Names of the graph's named nodes, in declaration order.
    pub fn edge_names(&self) -> impl Iterator<Item = &str> {
        self.edges_index.names(&self.items, GraphItem::name)
    }

    /// Every named node, in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = &Node> {
        self.items.iter().filter_map(GraphItem::as_node)
    }

    pub fn items(&self) -> &[GraphItem] {
        self.items.as_slice()
    }

    /// Combine two graphs: `other`'s items follow `self`'s, and the data types
    /// of both are kept.
    pub fn merge(self, other: Graph) -> Result<Graph, GraphMergeError> {
        let mut items = self.items;
        let mut data_types = self.data_types;
        items.extend(other.items);
        for (type_name, record) in other.data_types {
            if data_types.contains_key(&type_name) {
                return Err(GraphMergeError::DuplicateDataType { type_name });
            }
            data_types.insert(type_name, record);
        }
        Ok(Graph::new(items).with_data_types(data_types))
    }

    /// The union, in item order, of the fields of every anonymous root
    /// fragment in this graph.
    pub fn root(&self) -> &Root {
        self.root.get_or_init(|| Root::new(
            self.items
                .iter()
                .filter_map(GraphItem::as_root)
                .flat_map(|root| root.fields().iter().cloned())
                .collect(),
        ))
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphMergeError {
    #[error("The `{type_name}` data type is defined by more than one graph")]
    DuplicateDataType {
        type_name: String,
    },
}
