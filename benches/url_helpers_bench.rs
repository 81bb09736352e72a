use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webdriver_urls::{headless_url, is_safe_url, modify_url_query, RequestContext, UrlConfig};

fn bench_url_helpers(c: &mut Criterion) {
    let config = UrlConfig::new("http://superset:8088/", "https://bi.example.com/");
    let ctx = RequestContext::new("https://bi.example.com/");

    c.bench_function("headless_url", |b| {
        b.iter(|| headless_url(&config, black_box("/superset/dashboard/1/"), false))
    });

    c.bench_function("modify_url_query", |b| {
        b.iter(|| {
            modify_url_query(
                black_box("https://bi.example.com/explore/?form_data_key=abc&slice_id=5#x"),
                [("standalone", "3")],
            )
        })
    });

    c.bench_function("is_safe_url", |b| {
        b.iter(|| is_safe_url(&ctx, black_box("https://bi.example.com/superset/welcome/")))
    });
}

criterion_group!(benches, bench_url_helpers);
criterion_main!(benches);
