//! Actor Lifecycle Benchmarks
//!
//! Measures baseline performance of actor lifecycle operations:
//! - Single actor spawn + shutdown latency
//! - Batch actor spawn (10 actors)
//! - Ask round-trip throughput against a single actor

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

// Layer 1: Standard library imports
use std::convert::Infallible;
use std::time::Duration;

// Layer 2: Third-party crate imports
use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, Criterion};

// Layer 3: Internal module imports
use tessera_rt::context::Context;
use tessera_rt::message::BaseMessage;
use tessera_rt::system::{ActorSystem, SystemConfig};
use tessera_rt::util::ActorId;
use tessera_rt::Behavior;

struct CounterActor {
    count: u64,
}

#[async_trait]
impl Behavior<BaseMessage, u64> for CounterActor {
    type Error = Infallible;

    async fn receive(&mut self, _ctx: &Context, _message: BaseMessage) -> Result<u64, Self::Error> {
        self.count += 1;
        Ok(self.count)
    }
}

fn actor_spawn_single(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("actor_spawn_single", |b| {
        b.to_async(&rt).iter(|| async {
            let system = ActorSystem::new(SystemConfig::default());
            let actor_ref = system
                .spawn(ActorId::new("bench-actor"), CounterActor { count: 0 })
                .register()
                .await;
            system.shutdown_default().await.unwrap();
            std::hint::black_box(actor_ref);
        });
    });
}

fn actor_spawn_batch_small(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("actor_spawn_batch_small", |b| {
        b.to_async(&rt).iter(|| async {
            let system = ActorSystem::new(SystemConfig::default());
            let mut refs = Vec::with_capacity(10);
            for i in 0..10 {
                let id = ActorId::new(format!("bench-actor-{i}"));
                refs.push(system.spawn(id, CounterActor { count: 0 }).register().await);
            }
            system.shutdown_default().await.unwrap();
            std::hint::black_box(refs);
        });
    });
}

fn actor_ask_throughput(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("actor_ask_throughput", |b| {
        b.to_async(&rt).iter_custom(|iters| async move {
            let system = ActorSystem::new(SystemConfig::default());
            let actor_ref = system
                .spawn(ActorId::new("bench-actor"), CounterActor { count: 0 })
                .register()
                .await;

            let start = std::time::Instant::now();
            let caller_ctx = Context::background();
            for _ in 0..iters {
                let _ = actor_ref.ask(&caller_ctx, BaseMessage).await;
            }
            let elapsed = start.elapsed();
            system.shutdown_default().await.unwrap();
            elapsed
        });
    });
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .without_plots()
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets =
        actor_spawn_single,
        actor_spawn_batch_small,
        actor_ask_throughput
}

criterion_main!(benches);
