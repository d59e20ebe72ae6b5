use reef_bt::{Action, BehaviourTree, Condition, Inverter, NodeResult, Selector, Sequence};

#[derive(Debug, Default)]
struct Guard {
    enemy_visible: bool,
    steps_to_post: u32,
    guard_checks: u32,
    walk_evaluations: u32,
    attacks: u32,
}

fn guard_tree() -> BehaviourTree<Guard> {
    let sees_enemy = Condition::new(|g: &Guard| g.enemy_visible);
    let attack = Action::new(|g: &mut Guard| {
        g.attacks += 1;
        NodeResult::Success
    });
    let engage: Sequence<Guard> = Sequence::new(vec![Box::new(sees_enemy), Box::new(attack)]);

    let walk_to_post = Action::new(|g: &mut Guard| {
        g.walk_evaluations += 1;
        if g.steps_to_post == 0 {
            NodeResult::Success
        } else {
            g.steps_to_post -= 1;
            NodeResult::Running
        }
    });
    let clear: Inverter<Guard> =
        Inverter::inverter(Box::new(Condition::new(|g: &Guard| g.enemy_visible)));
    let checked_clear = Action::new(|g: &mut Guard| {
        g.guard_checks += 1;
        NodeResult::Success
    });
    let patrol: Sequence<Guard> = Sequence::new(vec![
        Box::new(checked_clear),
        Box::new(clear),
        Box::new(walk_to_post),
    ]);

    let root: Selector<Guard> = Selector::new(vec![Box::new(engage), Box::new(patrol)]);
    BehaviourTree::new(Box::new(root))
}

#[test]
fn tick_reevaluates_from_root_every_time() {
    let mut tree = guard_tree();
    let mut guard = Guard {
        steps_to_post: 2,
        ..Guard::default()
    };

    assert_eq!(tree.tick(&mut guard), NodeResult::Running);
    assert_eq!(tree.tick(&mut guard), NodeResult::Running);
    assert_eq!(tree.tick(&mut guard), NodeResult::Success);

    // Earlier siblings of the running leaf are re-checked on every tick.
    assert_eq!(guard.guard_checks, 3);
    assert_eq!(guard.walk_evaluations, 3);
    assert_eq!(tree.ticks(), 3);
    assert_eq!(tree.last_status(), Some(NodeResult::Success));
}

#[test]
fn higher_priority_branch_preempts_without_resuming() {
    let mut tree = guard_tree();
    let mut guard = Guard {
        steps_to_post: 5,
        ..Guard::default()
    };

    assert_eq!(tree.tick(&mut guard), NodeResult::Running);
    guard.enemy_visible = true;
    assert_eq!(tree.tick(&mut guard), NodeResult::Success);
    assert_eq!(guard.attacks, 1);
    assert_eq!(guard.walk_evaluations, 1);

    guard.enemy_visible = false;
    assert_eq!(tree.tick(&mut guard), NodeResult::Running);
    assert_eq!(guard.walk_evaluations, 2);
    assert_eq!(guard.steps_to_post, 3);
}

#[test]
fn introspection_walks_children() {
    let tree = guard_tree();
    assert_eq!(tree.last_status(), None);
    // root + engage(2) + patrol(3 + inverter child)
    assert_eq!(tree.node_count(), 9);
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.root().children().len(), 2);
}

#[test]
fn single_leaf_tree_with_unit_context() {
    let mut tree = BehaviourTree::<()>::new(Box::new(Condition::new(|_: &()| true)));
    assert_eq!(tree.tick(&mut ()), NodeResult::Success);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.depth(), 1);
}
