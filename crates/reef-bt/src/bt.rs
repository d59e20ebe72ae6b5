/// Outcome of evaluating a node for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeResult {
    Running,
    Success,
    Failure,
}

impl NodeResult {
    pub fn is_running(self) -> bool {
        self == NodeResult::Running
    }

    pub fn is_success(self) -> bool {
        self == NodeResult::Success
    }

    pub fn is_failure(self) -> bool {
        self == NodeResult::Failure
    }

    /// Swaps `Success` and `Failure`; `Running` is unchanged.
    pub fn invert(self) -> Self {
        match self {
            NodeResult::Running => NodeResult::Running,
            NodeResult::Success => NodeResult::Failure,
            NodeResult::Failure => NodeResult::Success,
        }
    }
}

impl From<bool> for NodeResult {
    fn from(ok: bool) -> Self {
        if ok {
            NodeResult::Success
        } else {
            NodeResult::Failure
        }
    }
}

/// A decision unit evaluated against a host context `C`.
///
/// Children are owned boxes, so a tree cannot contain a cycle.
pub trait Node<C> {
    fn evaluate(&mut self, ctx: &mut C) -> NodeResult;

    /// Ordered children, for introspection only.
    fn children(&self) -> &[Box<dyn Node<C>>] {
        &[]
    }
}
