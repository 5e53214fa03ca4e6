//! Category forest: flat API records → linked parent/child structure.
//!
//! Construction is a two-pass arena build: every record is first keyed by id,
//! then linked to its parent's child list (or the root list) by id reference.
//! No recursion over the input, so deep or wide trees cost nothing extra.
//! Sibling ordering by `order` is applied only at the display boundary, never
//! baked into the stored structure.

use std::collections::{HashMap, HashSet};

use super::expansion::ExpansionState;
use super::types::{CategoryId, CategoryRecord, CountKind, OwnerGroup};

// ============================================================================
// Nodes
// ============================================================================

/// A category with its resolved child links.
///
/// Children are id references into the owning forest's arena, stored in
/// input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    pub record: CategoryRecord,
    pub children: Vec<CategoryId>,
}

/// A single row of the rendered category tree, in display order.
///
/// Collapsed branches are pruned; `depth` drives indentation.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTreeItem {
    pub id: CategoryId,
    pub name: String,
    pub owner_group: OwnerGroup,
    /// Nesting depth (0 = top-level).
    pub depth: usize,
    /// Whether this category has child categories.
    pub has_children: bool,
    /// Whether this category is expanded (children visible).
    pub is_expanded: bool,
    pub content_count: u64,
    pub project_count: u64,
}

// ============================================================================
// Forest
// ============================================================================

/// Forest of category trees derived from a flat record list.
///
/// Rebuilt (never mutated in place) whenever the flat list changes; building
/// twice from the same list yields a structurally identical forest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForest {
    nodes: HashMap<CategoryId, CategoryNode>,
    roots: Vec<CategoryId>,
}

impl CategoryForest {
    /// Build a forest from flat records.
    ///
    /// - Duplicate ids: the last record in input order wins, logged at warn.
    /// - `parent_id` pointing at a nonexistent id (or at the record itself):
    ///   the record becomes a root. Tolerated silently apart from a debug
    ///   log — dangling references are a backend data condition the UI must
    ///   survive, not an input error.
    /// - Cyclic parent chains: the first cycle member in input order is
    ///   detached from its parent and promoted to a root, so no record ever
    ///   drops out of the forest. Same defensive policy as dangling parents.
    /// - Empty input yields an empty forest.
    pub fn build(records: &[CategoryRecord]) -> Self {
        // Pass 1: arena keyed by id. A duplicate takes the earlier record's
        // place and moves to the later position in link order.
        let mut nodes: HashMap<CategoryId, CategoryNode> = HashMap::with_capacity(records.len());
        let mut link_order: Vec<CategoryId> = Vec::with_capacity(records.len());
        for record in records {
            let replaced = nodes.insert(
                record.id.clone(),
                CategoryNode {
                    record: record.clone(),
                    children: Vec::new(),
                },
            );
            if replaced.is_some() {
                tracing::warn!(id = %record.id, "Duplicate category id, keeping last record");
                link_order.retain(|id| id != &record.id);
            }
            link_order.push(record.id.clone());
        }

        // Pass 2: link children to parents by id, roots otherwise.
        let mut roots = Vec::new();
        for id in &link_order {
            let parent_id = nodes
                .get(id)
                .and_then(|n| n.record.parent_id.clone())
                .filter(|pid| pid != id);
            match parent_id {
                Some(pid) if nodes.contains_key(&pid) => {
                    if let Some(parent) = nodes.get_mut(&pid) {
                        parent.children.push(id.clone());
                    }
                }
                Some(pid) => {
                    tracing::debug!(id = %id, parent = %pid, "Dangling parent reference, treating as root");
                    roots.push(id.clone());
                }
                None => roots.push(id.clone()),
            }
        }

        // Pass 3: a cyclic parent chain reaches no root, so its members are
        // invisible to flatten/display after pass 2. Promote the first
        // member of each cycle (input order) to a root, detaching it from
        // its in-cycle parent; its subtree comes back with it.
        let mut reachable: HashSet<CategoryId> = HashSet::with_capacity(nodes.len());
        let mut stack: Vec<CategoryId> = roots.clone();
        while let Some(id) = stack.pop() {
            if reachable.insert(id.clone()) {
                if let Some(node) = nodes.get(&id) {
                    stack.extend(node.children.iter().cloned());
                }
            }
        }
        if reachable.len() < nodes.len() {
            for id in &link_order {
                if reachable.contains(id) {
                    continue;
                }
                tracing::warn!(id = %id, "Cyclic parent chain, promoting to root");
                if let Some(pid) = nodes.get(id).and_then(|n| n.record.parent_id.clone()) {
                    if let Some(parent) = nodes.get_mut(&pid) {
                        parent.children.retain(|c| c != id);
                    }
                }
                roots.push(id.clone());
                let mut stack = vec![id.clone()];
                while let Some(nid) = stack.pop() {
                    if reachable.insert(nid.clone()) {
                        if let Some(node) = nodes.get(&nid) {
                            stack.extend(node.children.iter().cloned());
                        }
                    }
                }
            }
        }

        Self { nodes, roots }
    }

    /// Number of categories in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level category ids in stored (input) order.
    pub fn roots(&self) -> &[CategoryId] {
        &self.roots
    }

    pub fn get(&self, id: &CategoryId) -> Option<&CategoryNode> {
        self.nodes.get(id)
    }

    /// Flatten back to records: roots then children, depth-first, in stored
    /// order. `build(forest.flatten())` reproduces the same structure.
    pub fn flatten(&self) -> Vec<CategoryRecord> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<&CategoryId> = self.roots.iter().rev().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                out.push(node.record.clone());
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }

    /// Sum the pre-aggregated count of the given kind across top-level
    /// categories of one owner group.
    ///
    /// Deliberately does not recurse: the backend folds child counts into
    /// each parent's reported figure, so summing the first level is the
    /// whole group total. Missing counts contribute 0.
    pub fn aggregate_count(&self, group: OwnerGroup, kind: CountKind) -> u64 {
        self.roots
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|n| n.record.owner_group == group)
            .map(|n| n.record.count(kind))
            .sum()
    }

    /// Build the visible tree rows, respecting expansion state.
    ///
    /// Siblings are sorted by (`order`, `name`) here, at the presentation
    /// boundary; collapsed branches do not emit their children.
    pub fn display_items(&self, expansion: &ExpansionState) -> Vec<CategoryTreeItem> {
        let mut items = Vec::new();
        for id in self.sorted(&self.roots) {
            self.add_display_item(&mut items, id, 0, expansion);
        }
        items
    }

    /// Visible tree rows for a single owner group's collection.
    pub fn display_items_for(
        &self,
        group: OwnerGroup,
        expansion: &ExpansionState,
    ) -> Vec<CategoryTreeItem> {
        let group_roots: Vec<CategoryId> = self
            .roots
            .iter()
            .filter(|id| {
                self.nodes
                    .get(id)
                    .is_some_and(|n| n.record.owner_group == group)
            })
            .cloned()
            .collect();
        let mut items = Vec::new();
        for id in self.sorted(&group_roots) {
            self.add_display_item(&mut items, id, 0, expansion);
        }
        items
    }

    fn add_display_item(
        &self,
        items: &mut Vec<CategoryTreeItem>,
        id: &CategoryId,
        depth: usize,
        expansion: &ExpansionState,
    ) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let has_children = !node.children.is_empty();
        let is_expanded = expansion.is_expanded(id);

        items.push(CategoryTreeItem {
            id: id.clone(),
            name: node.record.name.clone(),
            owner_group: node.record.owner_group,
            depth,
            has_children,
            is_expanded,
            content_count: node.record.count(CountKind::Contents),
            project_count: node.record.count(CountKind::Projects),
        });

        if is_expanded {
            for child in self.sorted(&node.children) {
                self.add_display_item(items, child, depth + 1, expansion);
            }
        }
    }

    /// Sibling ids in display order: ascending `order`, name as tiebreak.
    fn sorted<'a>(&'a self, ids: &'a [CategoryId]) -> Vec<&'a CategoryId> {
        let mut sorted: Vec<&CategoryId> = ids.iter().collect();
        sorted.sort_by(|a, b| {
            let ka = self.nodes.get(a).map(|n| (n.record.order, n.record.name.as_str()));
            let kb = self.nodes.get(b).map(|n| (n.record.order, n.record.name.as_str()));
            ka.cmp(&kb)
        });
        sorted
    }
}

// ============================================================================
// Tests
// ============================================================================
