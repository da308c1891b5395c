use arena_core::{
    ActuationCommand, DebugSink, NullDebugSink, TickContext, WorldSnapshot,
};
use arena_utility::{ArbiterConfig, Choice, ChoiceError, UtilityArbiter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct DistanceToBall {
    weight: f32,
}

impl Choice for DistanceToBall {
    fn name(&self) -> &'static str {
        "distance"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        Ok(self.weight / (1.0 + world.car_to_ball().length()))
    }

    fn act(
        &mut self,
        _ctx: &TickContext,
        _world: &WorldSnapshot,
        _debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError> {
        Ok(ActuationCommand {
            throttle: 1.0,
            ..Default::default()
        })
    }
}

fn bench_arbiter_tick(c: &mut Criterion) {
    let choices = (0..16)
        .map(|i| Box::new(DistanceToBall { weight: i as f32 }) as Box<dyn Choice>)
        .collect();
    let mut arbiter = match UtilityArbiter::new(choices, ArbiterConfig::default()) {
        Ok(arbiter) => arbiter,
        Err(err) => panic!("bench roster is valid: {err}"),
    };
    let mut world = WorldSnapshot::default();
    world.ball.position.x = 1000.0;

    let mut tick: u64 = 0;
    c.bench_function("arena-utility/evaluate(choices=16)", |b| {
        b.iter(|| {
            let ctx = TickContext::new(tick, 1.0 / 120.0);
            let cmd = arbiter.evaluate(&ctx, &world, &mut NullDebugSink);
            black_box(cmd.ok());
            tick = tick.wrapping_add(1);
        })
    });
}

criterion_group!(benches, bench_arbiter_tick);
criterion_main!(benches);
