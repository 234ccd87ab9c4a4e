//! Strategy trees - the familiar's plan for a conversation.
//!
//! A strategy is a chain of stages that may fork:
//! 1. **Stage**: a conversational goal with a satisfaction predicate
//! 2. **Progress**: when satisfied, the stage says something and the cursor moves on
//! 3. **Fork**: the next stage may depend on what the familiar believes by then
//! 4. **End**: advancing past the last stage finishes the strategy


use spell_rules::WorldAction;

use crate::events::PlayerIntent;
use crate::mind::{ConfusionDetails, Mind};

/// Decides whether the stage has been achieved.
pub type Predicate = fn(&Mind) -> bool;

/// Produces the line said when the stage is achieved.
pub type ProgressResponder = fn(PlayerIntent, &Mind) -> String;

/// Produces the line said when returning to an unachieved stage.
pub type ReturnResponder = fn(&Mind) -> String;

/// One conversational goal.
#[derive(Clone)]
pub struct Stage {
    /// How the familiar describes the goal to itself.
    pub name: &'static str,
    pub is_satisfied: Predicate,
    pub say_on_progress: Option<ProgressResponder>,
    pub say_on_return: Option<ReturnResponder>,
    /// Hints used when the master talks nonsense during this stage.
    pub confusion: Option<ConfusionDetails>,
    /// Something the familiar does on entering the stage.
    pub init_action: Option<WorldAction>,
}

impl Stage {
    pub fn new(name: &'static str, is_satisfied: Predicate) -> Self {
        Self {
            name,
            is_satisfied,
            say_on_progress: None,
            say_on_return: None,
            confusion: None,
            init_action: None,
        }
    }

    pub fn on_progress(mut self, responder: ProgressResponder) -> Self {
        self.say_on_progress = Some(responder);
        self
    }

    pub fn on_return(mut self, responder: ReturnResponder) -> Self {
        self.say_on_return = Some(responder);
        self
    }

    pub fn with_confusion(mut self, details: ConfusionDetails) -> Self {
        self.confusion = Some(details);
        self
    }

    pub fn with_init_action(mut self, action: WorldAction) -> Self {
        self.init_action = Some(action);
        self
    }

    pub fn is_satisfied(&self, mind: &Mind) -> bool {
        (self.is_satisfied)(mind)
    }

    pub fn progress(&self, intent: PlayerIntent, mind: &Mind) -> String {
        self.say_on_progress
            .map(|say| say(intent, mind))
            .unwrap_or_default()
    }

    pub fn return_without_progress(&self, mind: &Mind) -> String {
        self.say_on_return.map(|say| say(mind)).unwrap_or_default()
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("confusion", &self.confusion)
            .field("init_action", &self.init_action)
            .finish_non_exhaustive()
    }
}

/// Index of a node in a [`StrategyTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A guarded edge out of a fork. A branch without a condition is the `else`.
#[derive(Clone)]
pub struct Branch {
    pub condition: Option<Predicate>,
    pub node: NodeId,
}

impl Branch {
    pub fn when(condition: Predicate, node: NodeId) -> Self {
        Self {
            condition: Some(condition),
            node,
        }
    }

    pub fn otherwise(node: NodeId) -> Self {
        Self {
            condition: None,
            node,
        }
    }
}

impl std::fmt::Debug for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Branch")
            .field("guarded", &self.condition.is_some())
            .field("node", &self.node)
            .finish()
    }
}

/// Where the strategy goes once a stage is achieved.
#[derive(Debug, Clone)]
pub enum Next {
    End,
    Then(NodeId),
    Fork(Vec<Branch>),
}

#[derive(Debug, Clone)]
pub struct StrategyNode {
    pub stage: Stage,
    pub next: Next,
}

/// The full plan. Nodes may be shared by several parents.
#[derive(Debug, Clone)]
pub struct StrategyTree {
    nodes: Vec<StrategyNode>,
    root: NodeId,
}

impl StrategyTree {
    /// Create a tree from its root stage.
    ///
    /// Children are added with [`StrategyTree::add`] before being linked from
    /// the root with [`StrategyTree::set_next`].
    pub fn new(root: Stage) -> Self {
        Self {
            nodes: vec![StrategyNode {
                stage: root,
                next: Next::End,
            }],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Add a node. Nodes can only point at nodes that already exist.
    pub fn add(&mut self, stage: Stage, next: Next) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(StrategyNode { stage, next });
        id
    }

    /// Relink a node, returning false if it does not exist.
    pub fn set_next(&mut self, id: NodeId, next: Next) -> bool {
        match self.nodes.get_mut(id.0) {
            Some(node) => {
                node.next = next;
                true
            }
            None => false,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&StrategyNode> {
        self.nodes.get(id.0)
    }

    pub fn stage(&self, id: NodeId) -> Option<&Stage> {
        self.node(id).map(|node| &node.stage)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node that follows `from`, given what the mind believes right now.
    ///
    /// Returns `None` at the end of the strategy, or when a fork has no
    /// branch that applies.
    pub fn next_after(&self, from: NodeId, mind: &Mind) -> Option<NodeId> {
        match &self.node(from)?.next {
            Next::End => None,
            Next::Then(node) => Some(*node),
            Next::Fork(branches) => branches
                .iter()
                .find(|branch| branch.condition.map_or(true, |holds| holds(mind)))
                .map(|branch| branch.node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mind::Belief;

    fn never(_: &Mind) -> bool {
        false
    }

    fn believes_seizable(mind: &Mind) -> bool {
        mind.believes(Belief::CanBeSeized)
    }

    fn fork_tree() -> (StrategyTree, NodeId, NodeId) {
        let mut tree = StrategyTree::new(Stage::new("root", never));
        let left = tree.add(Stage::new("left", never), Next::End);
        let right = tree.add(Stage::new("right", never), Next::End);
        tree.set_next(
            tree.root(),
            Next::Fork(vec![
                Branch::when(believes_seizable, left),
                Branch::otherwise(right),
            ]),
        );
        (tree, left, right)
    }

    #[test]
    fn test_fork_takes_first_matching_branch() {
        let (tree, left, right) = fork_tree();
        let mut mind = Mind::new(&tree);

        assert_eq!(tree.next_after(tree.root(), &mind), Some(right));

        mind.believe(Belief::CanBeSeized);
        assert_eq!(tree.next_after(tree.root(), &mind), Some(left));
    }

    #[test]
    fn test_chain_and_end() {
        let mut tree = StrategyTree::new(Stage::new("first", never));
        let second = tree.add(Stage::new("second", never), Next::End);
        assert!(tree.set_next(tree.root(), Next::Then(second)));

        let mind = Mind::new(&tree);
        assert_eq!(tree.next_after(tree.root(), &mind), Some(second));
        assert_eq!(tree.next_after(second, &mind), None);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_fork_without_else_can_dead_end() {
        let mut tree = StrategyTree::new(Stage::new("root", never));
        let only = tree.add(Stage::new("only", never), Next::End);
        tree.set_next(tree.root(), Next::Fork(vec![Branch::when(never, only)]));

        let mind = Mind::new(&tree);
        assert_eq!(tree.next_after(tree.root(), &mind), None);
    }

    #[test]
    fn test_stage_defaults_to_silence() {
        let stage = Stage::new("quiet", never);
        let tree = StrategyTree::new(stage.clone());
        let mind = Mind::new(&tree);

        assert_eq!(stage.progress(PlayerIntent::Shta, &mind), "");
        assert_eq!(stage.return_without_progress(&mind), "");
        assert!(!stage.is_satisfied(&mind));
    }

    #[test]
    fn test_unknown_node() {
        let tree = StrategyTree::new(Stage::new("root", never));
        assert!(tree.node(NodeId(7)).is_none());
        assert!(!tree.clone().set_next(NodeId(7), Next::End));
    }
}
