use criterion::{black_box, criterion_group, criterion_main, Criterion};
use route_trie::RouteTrie;

const ROUTES: &[&str] = &[
    "api.example.com/",
    "api.example.com/user",
    "api.example.com/user/repos",
    "api.example.com/users/:owner",
    "api.example.com/users/:owner/repos",
    "api.example.com/repos/:owner/:repo",
    "api.example.com/repos/:owner/:repo/issues",
    "api.example.com/repos/:owner/:repo/issues/:number",
    "api.example.com/repos/:owner/:repo/releases/latest",
    "api.example.com/repos/:owner/:repo/releases/:tag",
    "api.example.com/repos/:owner/:repo/contents/*path",
    "static.example.com/*file",
];

const LOOKUPS: &[&str] = &[
    "api.example.com/user/repos",
    "api.example.com/repos/rust-lang/rust/issues/1234",
    "api.example.com/repos/rust-lang/rust/releases/latest",
    "api.example.com/repos/rust-lang/rust/contents/src/lib.rs",
    "static.example.com/css/site.css",
];

fn build() -> RouteTrie<usize> {
    let mut trie = RouteTrie::new();
    for (idx, route) in ROUTES.iter().enumerate() {
        trie.add(route, idx).unwrap();
    }
    trie
}

fn lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let trie = build();

    group.bench_function("hit", |b| {
        b.iter(|| {
            for route in LOOKUPS {
                black_box(trie.get(route).unwrap());
            }
        });
    });

    group.bench_function("miss", |b| {
        b.iter(|| black_box(trie.get("api.example.com/repos/rust-lang/rust/unknown")));
    });

    group.finish();
}

fn backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtrack");

    let mut trie = RouteTrie::new();
    trie.add("/test/one/two/:three", 1).unwrap();
    trie.add("/test/one/:two/three/four", 2).unwrap();
    trie.add("/test/:one/two/three/four/five", 3).unwrap();
    trie.add("/*rest", 4).unwrap();

    group.bench_function("to param", |b| {
        b.iter(|| black_box(trie.get("/test/one/two/three/four/five").unwrap()));
    });

    group.bench_function("to wildcard", |b| {
        b.iter(|| black_box(trie.get("/test/one/two/three/four/five/six").unwrap()));
    });

    group.finish();
}

fn registration(c: &mut Criterion) {
    c.bench_function("build table", |b| b.iter(|| black_box(build())));
}

criterion_group!(benches, lookups, backtracking, registration);
criterion_main!(benches);
