//! Benchmarks for the comparison pipeline.
//!
//! Run with: cargo bench --bench compare_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nac_tco::catalog::{FrameworkCatalog, VendorCatalog};
use nac_tco::engine::{ComparisonAggregator, CostModel, SensitivityAnalyzer};
use nac_tco::model::{FrameworkId, IndustryId, OrganizationConfig, VendorId};
use std::hint::black_box;

fn org(devices: u32) -> OrganizationConfig {
    OrganizationConfig {
        device_count: devices,
        industry: IndustryId::new("healthcare"),
        ..Default::default()
    }
}

fn benchmark_cost_breakdown(c: &mut Criterion) {
    let vendors = VendorCatalog::builtin();
    let cisco = vendors.get(&VendorId::new("cisco-ise")).unwrap();
    let model = CostModel::default();
    let o = org(5000);

    c.bench_function("cost_breakdown", |b| {
        b.iter(|| black_box(model.cost_breakdown(black_box(cisco), black_box(&o)).unwrap()));
    });
}

fn benchmark_full_comparison(c: &mut Criterion) {
    let vendors = VendorCatalog::builtin();
    let frameworks = FrameworkCatalog::builtin();
    let aggregator = ComparisonAggregator::new(&vendors, &frameworks);
    let vendor_ids: Vec<VendorId> = vendors.ids().cloned().collect();
    let framework_ids = [
        FrameworkId::new("hipaa"),
        FrameworkId::new("pci-dss"),
        FrameworkId::new("nist-csf"),
    ];

    let mut group = c.benchmark_group("compare");
    for devices in [1_000u32, 10_000, 100_000] {
        let o = org(devices);
        group.bench_with_input(BenchmarkId::from_parameter(devices), &o, |b, o| {
            b.iter(|| {
                black_box(
                    aggregator
                        .compare(black_box(&vendor_ids), o, black_box(&framework_ids))
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

fn benchmark_tornado(c: &mut Criterion) {
    let vendors = VendorCatalog::builtin();
    let forescout = vendors.get(&VendorId::new("forescout")).unwrap();
    let analyzer = SensitivityAnalyzer::default();
    let o = org(5000);

    c.bench_function("tornado_sweep", |b| {
        b.iter(|| black_box(analyzer.tornado(black_box(forescout), &o, -20.0, 20.0).unwrap()));
    });
}

criterion_group!(
    benches,
    benchmark_cost_breakdown,
    benchmark_full_comparison,
    benchmark_tornado
);
criterion_main!(benches);
