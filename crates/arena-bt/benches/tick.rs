use arena_bt::{BehaviorTree, Condition, Task, TaskStatus, TreeNode};
use arena_core::{
    ActuationCommand, DebugSink, NullDebugSink, PolicyError, TickContext, WorldSnapshot,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct Drive;

impl Task for Drive {
    fn tick(
        &mut self,
        _ctx: &TickContext,
        _world: &WorldSnapshot,
        _debug: &mut dyn DebugSink,
    ) -> Result<TaskStatus, PolicyError> {
        Ok(TaskStatus::Action(ActuationCommand {
            throttle: 1.0,
            ..Default::default()
        }))
    }
}

fn bench_tree_tick(c: &mut Criterion) {
    let mut children = (0..32)
        .map(|_| TreeNode::task(Condition::new("ok", |_| true)))
        .collect::<Vec<_>>();
    children.push(TreeNode::task(Drive));

    let mut tree = match BehaviorTree::new(TreeNode::repeat_until_failure(TreeNode::sequence(
        children,
    ))) {
        Ok(tree) => tree,
        Err(err) => panic!("bench tree is valid: {err}"),
    };
    let world = WorldSnapshot::default();

    let mut tick: u64 = 0;
    c.bench_function("arena-bt/tick(conditions=32)", |b| {
        b.iter(|| {
            // Restart from the root each time so the conditions are re-walked.
            tree.reset();
            let ctx = TickContext::new(tick, 1.0 / 120.0);
            let cmd = tree.try_tick(&ctx, &world, &mut NullDebugSink);
            black_box(cmd.ok());
            tick = tick.wrapping_add(1);
        })
    });
}

criterion_group!(benches, bench_tree_tick);
criterion_main!(benches);
