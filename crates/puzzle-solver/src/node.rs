//! Search tree used to reconstruct the solution path.
//!
//! During a search every discovered state lives in a [`SearchTree`] arena.
//! Nodes own their children through the arena and point back at their
//! parent by index, so there is no ownership cycle. Once a goal is found
//! the tree is collapsed into a [`PuzzleNode`] chain holding only the path.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::puzzle::Puzzle;

/// Index of a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct TreeNode<P> {
    state: P,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

/// Arena of search nodes for one search run.
#[derive(Debug, Clone)]
pub struct SearchTree<P> {
    nodes: Vec<TreeNode<P>>,
}

impl<P: Puzzle> SearchTree<P> {
    /// Create a tree holding only the root state.
    pub fn new(root: P) -> Self {
        Self {
            nodes: vec![TreeNode {
                state: root,
                parent: None,
                children: SmallVec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Add `state` as the last child of `parent`.
    pub fn insert(&mut self, state: P, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            state,
            parent: Some(parent),
            children: SmallVec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn state(&self, id: NodeId) -> &P {
        &self.nodes[id.0].state
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of moves between the root and `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Collapse the tree onto the path from the root to `goal`.
    ///
    /// Every ancestor of `goal` has its child list replaced by the single
    /// child leading towards `goal`; all other branches are discarded. The
    /// returned chain starts at the root state and ends at `goal`.
    pub fn reconstruct_path(mut self, goal: NodeId) -> PuzzleNode<P> {
        self.nodes[goal.0].children.clear();
        let mut current = goal;
        while let Some(parent) = self.nodes[current.0].parent {
            self.nodes[parent.0].children = smallvec![current];
            current = parent;
        }

        // Walk the rewired chain root-first.
        let mut path = Vec::new();
        let mut cursor = self.nodes[current.0].children.first().copied();
        while let Some(id) = cursor {
            path.push(id);
            cursor = self.nodes[id.0].children.first().copied();
        }

        // Children always sit at higher indices than their parents, so the
        // arena can be cut back from the leaf towards the root.
        let mut nodes = self.nodes;
        nodes.truncate(goal.0 + 1);
        let mut chain = PuzzleNode::new(nodes.swap_remove(goal.0).state);
        for id in std::iter::once(current).chain(path).rev().skip(1) {
            nodes.truncate(id.0 + 1);
            let node = nodes.swap_remove(id.0);
            chain = PuzzleNode {
                puzzle: node.state,
                children: vec![chain],
            };
        }
        chain
    }
}

/// A puzzle state together with the nodes it extends to.
///
/// Engines hand these out as solution chains: the root wraps the initial
/// state, every node has at most one child and the leaf is solved.
pub struct PuzzleNode<P> {
    puzzle: P,
    children: Vec<PuzzleNode<P>>,
}

impl<P> PuzzleNode<P> {
    pub fn new(puzzle: P) -> Self {
        Self {
            puzzle,
            children: Vec::new(),
        }
    }

    pub fn with_children(puzzle: P, children: Vec<PuzzleNode<P>>) -> Self {
        Self { puzzle, children }
    }

    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }

    pub fn children(&self) -> &[PuzzleNode<P>] {
        &self.children
    }

    /// Walk the first-child chain starting at this node.
    pub fn iter(&self) -> Chain<'_, P> {
        Chain { next: Some(self) }
    }

    /// States along the first-child chain.
    pub fn states(&self) -> impl Iterator<Item = &P> {
        self.iter().map(|node| &node.puzzle)
    }

    /// Number of states in the chain, including this one.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A chain always holds at least its own state.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves in the chain.
    pub fn moves(&self) -> usize {
        self.len() - 1
    }

    /// The last state of the chain.
    pub fn leaf(&self) -> &P {
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = child;
        }
        &node.puzzle
    }
}

/// Iterator over a first-child chain of [`PuzzleNode`]s.
pub struct Chain<'a, P> {
    next: Option<&'a PuzzleNode<P>>,
}

impl<'a, P> Iterator for Chain<'a, P> {
    type Item = &'a PuzzleNode<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.children.first();
        Some(node)
    }
}

impl<P: Clone> Clone for PuzzleNode<P> {
    fn clone(&self) -> Self {
        // Post-order rebuild: a node is copied once all of its children
        // sit, in order, at the end of `built`.
        let mut pending: Vec<(&PuzzleNode<P>, bool)> = vec![(self, false)];
        let mut built: Vec<PuzzleNode<P>> = Vec::new();
        while let Some((node, children_built)) = pending.pop() {
            if children_built {
                let children = built.split_off(built.len() - node.children.len());
                built.push(PuzzleNode::with_children(node.puzzle.clone(), children));
            } else {
                pending.push((node, true));
                pending.extend(node.children.iter().rev().map(|child| (child, false)));
            }
        }
        built.swap_remove(0)
    }
}

/// Order-independent structural equality: same state, same children as an
/// unordered collection.
///
/// Single-child links are followed iteratively, so only branching nodes
/// add to the call depth.
impl<P: PartialEq> PartialEq for PuzzleNode<P> {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.puzzle != b.puzzle || a.children.len() != b.children.len() {
                return false;
            }
            match (a.children.as_slice(), b.children.as_slice()) {
                ([x], [y]) => pairs.push((x, y)),
                (xs, ys) => {
                    if !xs.iter().all(|c| ys.contains(c)) || !ys.iter().all(|c| xs.contains(c)) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl<P: Eq> Eq for PuzzleNode<P> {}

/// Renders `state`, a blank line, then each child on its own lines.
impl<P: fmt::Display> fmt::Display for PuzzleNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Explicit stack; chains from a depth-first run can be very long.
        // Each entry is (node, separator to emit before it).
        let mut stack: Vec<(&PuzzleNode<P>, &str)> = vec![(self, "")];
        while let Some((node, separator)) = stack.pop() {
            f.write_str(separator)?;
            write!(f, "{}\n\n", node.puzzle)?;
            for (i, child) in node.children.iter().enumerate().rev() {
                stack.push((child, if i == 0 { "" } else { "\n" }));
            }
        }
        Ok(())
    }
}

/// Lists `(depth, state)` pairs in pre-order.
impl<P: fmt::Debug> fmt::Debug for PuzzleNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut stack = vec![(0usize, self)];
        while let Some((depth, node)) = stack.pop() {
            list.entry(&(depth, &node.puzzle));
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }
        list.finish()
    }
}

impl<P> Drop for PuzzleNode<P> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
