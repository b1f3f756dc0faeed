use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use crmdeck::{
    filter_records, render, AccountFilters, RecordId, RecordStore, RenderContext, View,
    ViewCriteria,
};

/// The sample book repeated `copies` times with fresh ids.
fn scaled_store(copies: usize) -> RecordStore {
    let sample = RecordStore::sample();
    let mut builder = RecordStore::builder();
    for copy in 0..copies {
        let key = |id: RecordId| format!("{id}-{copy}");
        builder = builder
            .accounts(sample.accounts().iter().cloned().map(|mut a| {
                a.id = RecordId::from_key("account", &key(a.id));
                a
            }))
            .opportunities(sample.opportunities().iter().cloned().map(|mut o| {
                o.id = RecordId::from_key("opportunity", &key(o.id));
                o
            }))
            .tasks(sample.tasks().iter().cloned().map(|mut t| {
                t.id = RecordId::from_key("task", &key(t.id));
                t
            }));
    }
    builder.build().unwrap()
}

fn bench_render(c: &mut Criterion) {
    let store = scaled_store(50);
    let ctx = RenderContext::new(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
    let criteria = ViewCriteria::with_query("acme");

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(
        (store.accounts().len() + store.opportunities().len() + store.tasks().len()) as u64,
    ));
    for view in View::ALL {
        group.bench_function(view.tab_id(), |b| {
            b.iter(|| black_box(render(&store, view, &criteria, &ctx)));
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let store = scaled_store(50);
    c.bench_function("filter/accounts_query", |b| {
        b.iter(|| black_box(filter_records(store.accounts(), "technology", &AccountFilters::default())));
    });
}

criterion_group!(benches, bench_render, bench_filter);
criterion_main!(benches);
