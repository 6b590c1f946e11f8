use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::service::{AuthConfig, AuthService};
use service::storage::memory::MemoryStore;

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MemoryStore::default());
    let svc = AuthService::from_config(repo, &AuthConfig::new("secret"));

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _ = rt.block_on(svc.register(RegisterInput { email: "bench@example.com".into(), name: "Bench".into(), password: "Benchmark1".into() }));

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.login(LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() })).unwrap();
        });
    });

    let session = rt
        .block_on(svc.login(LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() }))
        .unwrap();
    let header = format!("Bearer {}", session.token);
    c.bench_function("auth_authenticate_bearer", |b| {
        b.iter(|| svc.authenticate(Some(&header)).unwrap());
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
