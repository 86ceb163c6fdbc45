use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::service::{AuthService, AuthConfig};
use service::auth::repository::mock::MockAuthRepository;
use service::auth::domain::{SignupInput, LoginInput};

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), secret_code: "code".into(), token_ttl_minutes: 60 });

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _ = rt.block_on(svc.signup(SignupInput { username: "bench".into(), password: "Benchmark1".into(), secret_code: "code".into(), full_name: None }));

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.login(LoginInput { username: "bench".into(), password: "Benchmark1".into(), secret_code: "code".into() })).unwrap();
        });
    });

    let token = rt.block_on(svc.login(LoginInput { username: "bench".into(), password: "Benchmark1".into(), secret_code: "code".into() })).unwrap().access_token;
    c.bench_function("auth_token_verify", |b| {
        b.iter(|| svc.verify_token(&token).unwrap());
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
