//! Behaviour tree evaluator.
//!
//! Every tick is a fresh, depth-first evaluation from the root: composites keep no memory of
//! which child was running on the previous tick. Hosts thread their own state through the tree
//! as the context type `C`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod nodes;
pub mod tree;

pub use bt::{Node, NodeResult};
pub use nodes::{
    Action, Condition, Decorate, Decorator, Fail, Failer, Invert, Inverter, Selector, Sequence,
    Succeed, Succeeder,
};
pub use tree::BehaviourTree;
