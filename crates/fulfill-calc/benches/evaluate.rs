//! 滿足度評估基準測試

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fulfill_calc::FulfillmentCalculator;
use fulfill_core::{
    DemandRow, DueLeadTimeMap, MaterialContext, ProductionContext, ShiftCapacity,
};
use rust_decimal::Decimal;

fn build_calculator(projects: usize) -> FulfillmentCalculator {
    let mut due_lt = DueLeadTimeMap::new();
    let mut materials = MaterialContext::new();
    let mut production = ProductionContext::new();

    for p in 0..projects {
        let project = format!("PJT-{p:03}");
        due_lt.insert(&project, "EU-WEST", 7);
        due_lt.insert(&project, "NA-EAST", 10);

        let line = format!("LINE-{p:03}");
        production = production
            .with_project_lines(&project, &[&line])
            .with_line_capacity(&line, ShiftCapacity::new().with_uniform(14, Decimal::from(50)));
    }

    for m in 0..32 {
        materials = materials.with_stock(&format!("MAT-{m:03}"), Decimal::from(10_000));
    }
    materials = materials
        .with_rule("ITEM-0*", &["MAT-000", "MAT-001", "MAT-002"])
        .with_rule("ITEM-1*", &["MAT-010", "MAT-011"])
        .with_rule("ITEM-*", &["MAT-020"])
        .with_group(&["MAT-000", "MAT-030"]);

    FulfillmentCalculator::new(due_lt, materials, production)
}

fn build_demands(rows: usize, projects: usize) -> Vec<DemandRow> {
    (0..rows)
        .map(|i| {
            DemandRow::new(
                format!("ITEM-{:02}", i % 20),
                format!("PJT-{:03}", i % projects),
                if i % 2 == 0 { "EU-WEST" } else { "NA-EAST" }.to_string(),
                Decimal::from((i % 300) as i64),
            )
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let calculator = build_calculator(8);
    let demands = build_demands(1_000, 8);

    c.bench_function("evaluate_1000_rows", |b| {
        b.iter_batched(
            || demands.clone(),
            |demands| calculator.evaluate(demands).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
