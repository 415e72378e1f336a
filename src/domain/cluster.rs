//! Rhyme clustering
//!
//! Builds rhyme groups for one verse. Every distinct syllable key becomes a
//! node; nodes are joined when they form a perfect rhyme. Groups are the
//! connected components of that graph, so membership is the full transitive
//! closure and does not depend on the order keys are visited.
//! Uses petgraph for graph operations.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use super::lyrics::Word;
use super::rhyme::is_perfect;

/// Which syllables of each word take part in clustering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyllableMode {
    /// Only the final syllable of each word
    #[default]
    LastSyllable,
    /// Every syllable of each word
    EverySyllable,
}

impl SyllableMode {
    pub fn from_every_syllable(every_syllable: bool) -> Self {
        if every_syllable {
            SyllableMode::EverySyllable
        } else {
            SyllableMode::LastSyllable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyllableMode::LastSyllable => "last_syllable",
            SyllableMode::EverySyllable => "every_syllable",
        }
    }
}

/// A set of rhyming syllable keys and the words that contain them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeGroup {
    /// Dense id within the verse, in order of first appearance
    pub id: usize,

    /// Syllable keys in the group
    pub signature: BTreeSet<String>,

    /// Lower-cased surface forms of the member words
    pub words: BTreeSet<String>,
}

impl RhymeGroup {
    /// Signature joined into a single canonical string
    pub fn signature_label(&self) -> String {
        self.signature
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Rhyme groups of one verse, plus a key → group id lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RhymeGroups {
    groups: Vec<RhymeGroup>,

    #[serde(skip)]
    membership: HashMap<String, usize>,
}

impl RhymeGroups {
    fn from_groups(groups: Vec<RhymeGroup>) -> Self {
        let membership = groups
            .iter()
            .flat_map(|group| group.signature.iter().map(|key| (key.clone(), group.id)))
            .collect();

        Self { groups, membership }
    }

    /// Returns the id of the group containing the syllable key
    pub fn group_of(&self, key: &str) -> Option<usize> {
        self.membership.get(key).copied()
    }

    pub fn get(&self, id: usize) -> Option<&RhymeGroup> {
        self.groups.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RhymeGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Signature → words mapping
    pub fn to_map(&self) -> BTreeMap<BTreeSet<String>, BTreeSet<String>> {
        self.groups
            .iter()
            .map(|group| (group.signature.clone(), group.words.clone()))
            .collect()
    }

    pub fn into_groups(self) -> Vec<RhymeGroup> {
        self.groups
    }
}

/// Perfect-rhyme graph over the syllable keys of a verse
#[derive(Debug, Default)]
pub struct RhymeGraph {
    /// Nodes are syllable keys, edges are perfect rhymes
    graph: UnGraph<String, ()>,

    /// Map from syllable key to node index
    node_map: HashMap<String, NodeIndex>,

    /// Words exhibiting each node's key, indexed by node
    words: Vec<BTreeSet<String>>,
}

impl RhymeGraph {
    /// Creates an empty rhyme graph
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_map: HashMap::new(),
            words: Vec::new(),
        }
    }

    /// Builds a graph from the words of a verse
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>, mode: SyllableMode) -> Self {
        let mut graph = Self::new();

        for word in words {
            let surface = word.text.to_lowercase();
            match mode {
                SyllableMode::LastSyllable => {
                    if let Some(syllable) = word.last_syllable() {
                        graph.add_occurrence(&syllable.key(), &surface);
                    }
                }
                SyllableMode::EverySyllable => {
                    for syllable in &word.syllables {
                        graph.add_occurrence(&syllable.key(), &surface);
                    }
                }
            }
        }

        graph
    }

    /// Records that `word` contains the syllable `key`
    ///
    /// Empty keys (syllables without letters) are ignored.
    pub fn add_occurrence(&mut self, key: &str, word: &str) {
        if key.is_empty() {
            return;
        }
        let idx = self.add_key(key);
        self.words[idx.index()].insert(word.to_string());
    }

    /// Adds a key and links it to every existing key it rhymes with
    fn add_key(&mut self, key: &str) -> NodeIndex {
        if let Some(idx) = self.node_map.get(key) {
            return *idx;
        }

        let rhymes: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|idx| {
                let other = &self.graph[*idx];
                is_perfect(key, other) || is_perfect(other, key)
            })
            .collect();

        let idx = self.graph.add_node(key.to_string());
        self.node_map.insert(key.to_string(), idx);
        self.words.push(BTreeSet::new());

        for other in rhymes {
            self.graph.add_edge(idx, other, ());
        }

        idx
    }

    /// Merges connected keys into groups, keeping those with 2+ words
    pub fn groups(&self) -> RhymeGroups {
        let mut components = UnionFind::<usize>::new(self.graph.node_count());
        for edge in self.graph.edge_references() {
            components.union(edge.source().index(), edge.target().index());
        }

        // Node indices follow insertion order, so groups follow first appearance
        let mut order: Vec<usize> = Vec::new();
        let mut by_root: HashMap<usize, (BTreeSet<String>, BTreeSet<String>)> = HashMap::new();

        for idx in self.graph.node_indices() {
            let root = components.find(idx.index());
            let (signature, words) = by_root.entry(root).or_insert_with(|| {
                order.push(root);
                (BTreeSet::new(), BTreeSet::new())
            });

            signature.insert(self.graph[idx].clone());
            words.extend(self.words[idx.index()].iter().cloned());
        }

        let groups = order
            .into_iter()
            .filter_map(|root| by_root.remove(&root))
            .filter(|(_, words)| words.len() > 1)
            .enumerate()
            .map(|(id, (signature, words))| RhymeGroup {
                id,
                signature,
                words,
            })
            .collect();

        RhymeGroups::from_groups(groups)
    }
}

/// Groups the words of one verse by rhyming syllables
pub fn cluster<'a>(words: impl IntoIterator<Item = &'a Word>, mode: SyllableMode) -> RhymeGroups {
    RhymeGraph::from_words(words, mode).groups()
}
