use crate::bt::{Node, NodeResult};

/// Owns a root node and drives one evaluation pass per tick.
pub struct BehaviourTree<C> {
    root: Box<dyn Node<C>>,
    last: Option<NodeResult>,
    ticks: u64,
}

impl<C> BehaviourTree<C> {
    pub fn new(root: Box<dyn Node<C>>) -> Self {
        Self {
            root,
            last: None,
            ticks: 0,
        }
    }

    /// Evaluates the tree from the root. Nothing carries over from earlier ticks.
    pub fn tick(&mut self, ctx: &mut C) -> NodeResult {
        let status = self.root.evaluate(ctx);
        self.ticks += 1;
        self.last = Some(status);
        tracing::trace!(tick = self.ticks, ?status, "behaviour tree ticked");
        status
    }

    pub fn last_status(&self) -> Option<NodeResult> {
        self.last
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn root(&self) -> &dyn Node<C> {
        &*self.root
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        fn count<C>(node: &dyn Node<C>) -> usize {
            1 + node
                .children()
                .iter()
                .map(|c| count(&**c))
                .sum::<usize>()
        }
        count(&*self.root)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn depth<C>(node: &dyn Node<C>) -> usize {
            1 + node
                .children()
                .iter()
                .map(|c| depth(&**c))
                .max()
                .unwrap_or(0)
        }
        depth(&*self.root)
    }
}
