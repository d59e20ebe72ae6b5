use std::slice;

use crate::bt::{Node, NodeResult};

/// Logical AND over children, in order.
///
/// Returns the first `Failure` or `Running` without evaluating later children. Succeeds when every
/// child succeeds (including when there are none).
pub struct Sequence<C> {
    children: Vec<Box<dyn Node<C>>>,
}

impl<C> Sequence<C> {
    pub fn new(children: Vec<Box<dyn Node<C>>>) -> Self {
        Self { children }
    }
}

impl<C> Node<C> for Sequence<C> {
    fn evaluate(&mut self, ctx: &mut C) -> NodeResult {
        for child in self.children.iter_mut() {
            match child.evaluate(ctx) {
                NodeResult::Success => continue,
                NodeResult::Failure => return NodeResult::Failure,
                NodeResult::Running => return NodeResult::Running,
            }
        }

        NodeResult::Success
    }

    fn children(&self) -> &[Box<dyn Node<C>>] {
        &self.children
    }
}

/// Logical OR over children, in order.
///
/// Returns the first `Success` or `Running` without evaluating later children. Fails when every
/// child fails (including when there are none).
pub struct Selector<C> {
    children: Vec<Box<dyn Node<C>>>,
}

impl<C> Selector<C> {
    pub fn new(children: Vec<Box<dyn Node<C>>>) -> Self {
        Self { children }
    }
}

impl<C> Node<C> for Selector<C> {
    fn evaluate(&mut self, ctx: &mut C) -> NodeResult {
        for child in self.children.iter_mut() {
            match child.evaluate(ctx) {
                NodeResult::Failure => continue,
                NodeResult::Success => return NodeResult::Success,
                NodeResult::Running => return NodeResult::Running,
            }
        }

        NodeResult::Failure
    }

    fn children(&self) -> &[Box<dyn Node<C>>] {
        &self.children
    }
}

/// Defines a decorator's result in terms of its single child.
///
/// The implementation decides whether (and how often) to evaluate the child.
pub trait Decorate<C> {
    fn decorate(&mut self, child: &mut dyn Node<C>, ctx: &mut C) -> NodeResult;
}

impl<C, F> Decorate<C> for F
where
    F: FnMut(&mut dyn Node<C>, &mut C) -> NodeResult,
{
    fn decorate(&mut self, child: &mut dyn Node<C>, ctx: &mut C) -> NodeResult {
        self(child, ctx)
    }
}

/// A node that owns exactly one child and delegates its result to a [`Decorate`] policy.
pub struct Decorator<C, D> {
    child: Box<dyn Node<C>>,
    policy: D,
}

impl<C, D> Decorator<C, D>
where
    D: Decorate<C>,
{
    pub fn new(child: Box<dyn Node<C>>, policy: D) -> Self {
        Self { child, policy }
    }

    pub fn policy(&self) -> &D {
        &self.policy
    }
}

impl<C, D> Node<C> for Decorator<C, D>
where
    D: Decorate<C>,
{
    fn evaluate(&mut self, ctx: &mut C) -> NodeResult {
        self.policy.decorate(&mut *self.child, ctx)
    }

    fn children(&self) -> &[Box<dyn Node<C>>] {
        slice::from_ref(&self.child)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Invert;

impl<C> Decorate<C> for Invert {
    fn decorate(&mut self, child: &mut dyn Node<C>, ctx: &mut C) -> NodeResult {
        child.evaluate(ctx).invert()
    }
}

/// Reports `Success` whenever the child finishes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Succeed;

impl<C> Decorate<C> for Succeed {
    fn decorate(&mut self, child: &mut dyn Node<C>, ctx: &mut C) -> NodeResult {
        match child.evaluate(ctx) {
            NodeResult::Running => NodeResult::Running,
            NodeResult::Success | NodeResult::Failure => NodeResult::Success,
        }
    }
}

/// Reports `Failure` whenever the child finishes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fail;

impl<C> Decorate<C> for Fail {
    fn decorate(&mut self, child: &mut dyn Node<C>, ctx: &mut C) -> NodeResult {
        match child.evaluate(ctx) {
            NodeResult::Running => NodeResult::Running,
            NodeResult::Success | NodeResult::Failure => NodeResult::Failure,
        }
    }
}

pub type Inverter<C> = Decorator<C, Invert>;
pub type Succeeder<C> = Decorator<C, Succeed>;
pub type Failer<C> = Decorator<C, Fail>;

impl<C> Decorator<C, Invert> {
    pub fn inverter(child: Box<dyn Node<C>>) -> Self {
        Self::new(child, Invert)
    }
}

impl<C> Decorator<C, Succeed> {
    pub fn succeeder(child: Box<dyn Node<C>>) -> Self {
        Self::new(child, Succeed)
    }
}

impl<C> Decorator<C, Fail> {
    pub fn failer(child: Box<dyn Node<C>>) -> Self {
        Self::new(child, Fail)
    }
}

/// Leaf that maps a predicate over the context to `Success`/`Failure`.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<C, F> Node<C> for Condition<F>
where
    F: FnMut(&C) -> bool,
{
    fn evaluate(&mut self, ctx: &mut C) -> NodeResult {
        NodeResult::from((self.cond)(&*ctx))
    }
}

/// Leaf that runs a closure against the context and reports its status.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<C, F> Node<C> for Action<F>
where
    F: FnMut(&mut C) -> NodeResult,
{
    fn evaluate(&mut self, ctx: &mut C) -> NodeResult {
        (self.run)(ctx)
    }
}
