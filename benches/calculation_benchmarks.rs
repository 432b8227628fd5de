//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single monthly payroll calculation: < 100μs mean
//! - Batch of 1000 payroll calculations: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_engine::calculation::{IncomeTaxEngine, PayrollCalculator};
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::models::{EmploymentType, MonthlyWorkRecord, SalaryType, WorkerProfile};
use rust_decimal::Decimal;

fn load_config() -> PayrollConfig {
    ConfigLoader::load("./config/krw-2024")
        .expect("Failed to load config")
        .config()
        .clone()
}

fn monthly_worker(salary: u64) -> WorkerProfile {
    WorkerProfile {
        salary_type: SalaryType::Monthly,
        employment_type: EmploymentType::Regular,
        monthly_salary: Decimal::from(salary),
        hourly_rate: Decimal::ZERO,
        normal_hours: Decimal::from(209),
        food_allowance: Decimal::from(200_000),
        car_allowance: Decimal::ZERO,
        tax_free_meal: Decimal::from(200_000),
        tax_free_car_maintenance: Decimal::ZERO,
        other_tax_free: Decimal::ZERO,
        has_national_pension: true,
        has_health_insurance: true,
        has_employment_insurance: true,
        tax_dependents: 2,
        children_count: 1,
        income_tax_rate_override: None,
    }
}

fn record_with_premiums() -> MonthlyWorkRecord {
    MonthlyWorkRecord {
        overtime_hours: Decimal::from(12),
        night_hours: Decimal::from(6),
        holiday_hours: Decimal::from(10),
        bonus: Decimal::from(300_000),
        ..MonthlyWorkRecord::default()
    }
}

fn bench_single_calculation(c: &mut Criterion) {
    let config = load_config();
    let calculator = PayrollCalculator::from_config(&config);
    let worker = monthly_worker(3_500_000);
    let record = record_with_premiums();

    c.bench_function("single_monthly_payroll", |b| {
        b.iter(|| {
            calculator
                .calculate(black_box(&worker), black_box(&record), true)
                .unwrap()
        })
    });
}

fn bench_income_tax_assessment(c: &mut Criterion) {
    let config = load_config();
    let engine = IncomeTaxEngine::new(&config.schedule);

    let mut group = c.benchmark_group("income_tax");
    for income in [2_000_000u64, 5_500_000, 12_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(income), &income, |b, &income| {
            b.iter(|| {
                engine
                    .assess(black_box(Decimal::from(income)), 2, 1, None)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_batch_calculations(c: &mut Criterion) {
    let config = load_config();
    let calculator = PayrollCalculator::from_config(&config);
    let record = record_with_premiums();

    // Spread salaries across the table bands so interpolation, exact rows,
    // and the bracket formula are all exercised.
    let workers: Vec<WorkerProfile> = (0..1000)
        .map(|i| monthly_worker(1_500_000 + (i as u64) * 11_000))
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(workers.len() as u64));
    group.bench_function("1000_monthly_payrolls", |b| {
        b.iter(|| {
            for worker in &workers {
                black_box(
                    calculator
                        .calculate(black_box(worker), black_box(&record), true)
                        .unwrap(),
                );
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_income_tax_assessment,
    bench_batch_calculations
);
criterion_main!(benches);
