//! Benchmark: decision pipeline cost
//!
//! # Background
//!
//! `evaluate` runs on every gated request, often several times per
//! request when a handler checks multiple resources. The pipeline is
//! expected to be bitwise tests plus at most a short membership scan,
//! so per-call cost should stay well under request handling noise.
//!
//! # When to revisit
//!
//! - If ScopeMemberships grow beyond a handful of entries in practice
//! - If assignment lists stop being small (the override scan is linear)

use campus_rbac::{
    evaluate, resolve_category, AccessQuery, Action, AdminAssignment, Resource,
};
use campus_types::{
    AdminLevel, InstituteId, PrincipalCategory, PrincipalId, ScopeMemberships,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let teacher = resolve_category(
        PrincipalId::new(),
        PrincipalCategory::Teacher,
        AdminLevel::None,
        Vec::new(),
        ScopeMemberships::new(),
    );

    let grant_only = AccessQuery::new(Resource::EXAMS, Action::CREATE);
    group.bench_function("grant_allow", |b| {
        b.iter(|| black_box(evaluate(&teacher, &grant_only)));
    });

    let grant_miss = AccessQuery::new(Resource::USERS, Action::CREATE);
    group.bench_function("grant_deny", |b| {
        b.iter(|| black_box(evaluate(&teacher, &grant_miss)));
    });

    let scoped_teacher = teacher.with_memberships(
        ScopeMemberships::new()
            .with_institute(InstituteId::new("inst-01"))
            .with_institute(InstituteId::new("inst-02"))
            .with_institute(InstituteId::new("inst-03")),
    );
    let scoped = AccessQuery::new(Resource::EXAMS, Action::CREATE)
        .with_institute(InstituteId::new("inst-03"));
    group.bench_function("scope_scan", |b| {
        b.iter(|| black_box(evaluate(&scoped_teacher, &scoped)));
    });

    let overridden = teacher.with_assignments(vec![AdminAssignment::new(
        PrincipalId::new(),
        "admin",
        PrincipalId::new(),
    )]);
    group.bench_function("assignment_override", |b| {
        b.iter(|| black_box(evaluate(&overridden, &grant_only)));
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
