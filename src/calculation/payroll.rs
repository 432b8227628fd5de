//! The payroll calculator orchestrating every component.

use rust_decimal::Decimal;

use crate::config::{DeductionRatesConfig, PayrollConfig, TaxScheduleProvider, WithholdingSchedule};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationResult, DeductionBreakdown, MonthlyWorkRecord, PaymentBreakdown, WorkerProfile,
};

use super::base_salary::calculate_base_salary;
use super::freelance::calculate_freelance_withholding;
use super::holiday_work::calculate_holiday_pay;
use super::hourly_rate::resolve_hourly_rate;
use super::income_tax::{IncomeTaxEngine, TaxAssessment};
use super::insurance::{InsuranceDeductions, calculate_insurance};
use super::night_work::calculate_night_pay;
use super::overtime::calculate_overtime_pay;
use super::weekly_holiday::calculate_weekly_holiday_pay;

const MAX_WEEK_COUNT: u32 = 5;
const MAX_OVERRIDE_PERCENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Calculates a complete monthly payroll from a worker profile and a
/// month's work record.
///
/// The calculator borrows its deduction rates and withholding schedule,
/// so one set of loaded configuration serves any number of calculations.
pub struct PayrollCalculator<'a, P: TaxScheduleProvider> {
    rates: &'a DeductionRatesConfig,
    schedule: &'a P,
}

impl<'a> PayrollCalculator<'a, WithholdingSchedule> {
    /// Creates a calculator over a loaded configuration set.
    pub fn from_config(config: &'a PayrollConfig) -> Self {
        Self {
            rates: &config.rates,
            schedule: &config.schedule,
        }
    }
}

impl<'a, P: TaxScheduleProvider> PayrollCalculator<'a, P> {
    /// Creates a calculator from deduction rates and any schedule provider.
    pub fn new(rates: &'a DeductionRatesConfig, schedule: &'a P) -> Self {
        Self { rates, schedule }
    }

    /// Calculates the month's payroll.
    ///
    /// Payments are assembled first (base salary, the three statutory
    /// premiums, the weekly holiday allowance, bonus, and allowances),
    /// then deductions are taken against the insurance base, which is
    /// the total payment net of tax-free allowances and never negative.
    /// Freelance workers skip insurance and the withholding schedule in
    /// favour of flat business-income rates.
    ///
    /// Free-form additional deductions are applied as entered; a deduction
    /// larger than the month's pay drives the net below zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when an amount or hour field is negative,
    /// the dependent count is zero, the recorded week count exceeds
    /// five, or the flat withholding override is above 100 percent;
    /// `TableLookupMiss` when the schedule cannot cover the tax lookup.
    pub fn calculate(
        &self,
        worker: &WorkerProfile,
        record: &MonthlyWorkRecord,
        employer_has_five_or_more: bool,
    ) -> EngineResult<CalculationResult> {
        validate_inputs(worker, record)?;

        let hourly_rate = resolve_hourly_rate(worker, record)?;
        tracing::debug!(%hourly_rate, "resolved hourly rate");

        let payments = PaymentBreakdown {
            base_salary: calculate_base_salary(worker, record, hourly_rate),
            overtime_pay: calculate_overtime_pay(
                hourly_rate,
                record.overtime_hours,
                employer_has_five_or_more,
            ),
            night_pay: calculate_night_pay(
                hourly_rate,
                record.night_hours,
                employer_has_five_or_more,
            ),
            holiday_pay: calculate_holiday_pay(
                hourly_rate,
                record.holiday_hours,
                employer_has_five_or_more,
            ),
            weekly_holiday_pay: calculate_weekly_holiday_pay(worker, record, hourly_rate),
            bonus: record.bonus,
            additional_pay: record.additional_pay,
            food_allowance: worker.food_allowance,
            car_allowance: worker.car_allowance,
        };
        let total_payment = payments.total();
        tracing::debug!(%total_payment, "assembled payments");

        let total_tax_free =
            worker.tax_free_meal + worker.tax_free_car_maintenance + worker.other_tax_free;
        let insurance_base = (total_payment - total_tax_free).max(Decimal::ZERO);
        let taxable_income = insurance_base;

        let (insurance, taxes) = if worker.is_freelance() {
            let withholding = calculate_freelance_withholding(taxable_income, &self.rates.freelance);
            let taxes = TaxAssessment {
                income_tax: withholding.income_tax,
                local_income_tax: withholding.local_income_tax,
            };
            (
                InsuranceDeductions {
                    national_pension: Decimal::ZERO,
                    health_insurance: Decimal::ZERO,
                    long_term_care: Decimal::ZERO,
                    employment_insurance: Decimal::ZERO,
                },
                taxes,
            )
        } else {
            let insurance = calculate_insurance(worker, insurance_base, &self.rates.insurance);
            let engine = IncomeTaxEngine::new(self.schedule);
            let taxes = engine.assess(
                taxable_income,
                worker.tax_dependents,
                worker.children_count,
                worker.income_tax_rate_override,
            )?;
            (insurance, taxes)
        };
        tracing::debug!(
            insurance_total = %insurance.total(),
            tax_total = %taxes.total(),
            "assessed deductions"
        );

        let deductions = DeductionBreakdown {
            national_pension: insurance.national_pension,
            health_insurance: insurance.health_insurance,
            long_term_care: insurance.long_term_care,
            employment_insurance: insurance.employment_insurance,
            income_tax: taxes.income_tax,
            local_income_tax: taxes.local_income_tax,
            additional_deduct: record.additional_deduct,
        };
        let total_deduction = deductions.total();

        Ok(CalculationResult {
            hourly_rate,
            payments,
            deductions,
            total_tax_free,
            insurance_base,
            total_payment,
            total_deduction,
            net_payment: total_payment - total_deduction,
        })
    }
}

/// Rejects negative amounts and out-of-range counts or rates before
/// calculation.
fn validate_inputs(worker: &WorkerProfile, record: &MonthlyWorkRecord) -> EngineResult<()> {
    let worker_amounts = [
        ("monthly_salary", worker.monthly_salary),
        ("hourly_rate", worker.hourly_rate),
        ("normal_hours", worker.normal_hours),
        ("food_allowance", worker.food_allowance),
        ("car_allowance", worker.car_allowance),
        ("tax_free_meal", worker.tax_free_meal),
        ("tax_free_car_maintenance", worker.tax_free_car_maintenance),
        ("other_tax_free", worker.other_tax_free),
    ];
    let record_amounts = [
        ("normal_hours", record.normal_hours),
        ("overtime_hours", record.overtime_hours),
        ("night_hours", record.night_hours),
        ("holiday_hours", record.holiday_hours),
        ("weekly_hours", record.weekly_hours),
        ("bonus", record.bonus),
    ];

    for (field, amount) in worker_amounts.into_iter().chain(record_amounts) {
        require_non_negative(field, amount)?;
    }
    for (index, amount) in record.additional_pay.iter().enumerate() {
        require_non_negative(&format!("additional_pay[{index}]"), *amount)?;
    }
    for (index, amount) in record.additional_deduct.iter().enumerate() {
        require_non_negative(&format!("additional_deduct[{index}]"), *amount)?;
    }

    if let Some(rate) = worker.income_tax_rate_override {
        require_non_negative("income_tax_rate_override", rate)?;
        if rate > MAX_OVERRIDE_PERCENT {
            return Err(EngineError::InvalidInput {
                field: "income_tax_rate_override".to_string(),
                message: format!("must be at most {MAX_OVERRIDE_PERCENT} percent"),
            });
        }
    }
    if worker.tax_dependents == 0 {
        return Err(EngineError::InvalidInput {
            field: "tax_dependents".to_string(),
            message: "must be at least 1, counting the worker".to_string(),
        });
    }
    if record.week_count > MAX_WEEK_COUNT {
        return Err(EngineError::InvalidInput {
            field: "week_count".to_string(),
            message: format!("must be at most {MAX_WEEK_COUNT}"),
        });
    }
    Ok(())
}

fn require_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FreelanceRates, InsuranceRates, ScheduleMetadata, TaxBand};
    use crate::models::{EmploymentType, SalaryType};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_rates() -> DeductionRatesConfig {
        DeductionRatesConfig {
            insurance: InsuranceRates {
                national_pension_rate: dec("0.045"),
                health_insurance_rate: dec("0.03545"),
                long_term_care_rate: dec("0.1295"),
                employment_insurance_rate: dec("0.009"),
            },
            freelance: FreelanceRates {
                income_tax_rate: dec("0.03"),
                local_income_tax_rate: dec("0.003"),
            },
        }
    }

    fn test_schedule() -> WithholdingSchedule {
        let metadata = ScheduleMetadata {
            name: "test schedule".to_string(),
            revision: "2024-02-29".to_string(),
            source_url: "https://example.com".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let bands = vec![
            TaxBand {
                up_to_thousand: 1_065,
                amounts: vec![Decimal::ZERO; 11],
            },
            TaxBand {
                up_to_thousand: 3_000,
                amounts: vec![
                    dec("74350"),
                    dec("56850"),
                    dec("31940"),
                    dec("26690"),
                    dec("21440"),
                    dec("17100"),
                    dec("13730"),
                    dec("10350"),
                    dec("6980"),
                    dec("3600"),
                    dec("0"),
                ],
            },
            TaxBand {
                up_to_thousand: 10_000,
                amounts: vec![
                    dec("890000"),
                    dec("770000"),
                    dec("600000"),
                    dec("510000"),
                    dec("440000"),
                    dec("380000"),
                    dec("335000"),
                    dec("295000"),
                    dec("260000"),
                    dec("225000"),
                    dec("195000"),
                ],
            },
        ];
        let baselines = bands.last().unwrap().amounts.clone();
        WithholdingSchedule::new(metadata, bands, baselines).unwrap()
    }

    fn monthly_worker(salary: &str) -> WorkerProfile {
        WorkerProfile {
            salary_type: SalaryType::Monthly,
            employment_type: EmploymentType::Regular,
            monthly_salary: dec(salary),
            hourly_rate: Decimal::ZERO,
            normal_hours: dec("209"),
            food_allowance: Decimal::ZERO,
            car_allowance: Decimal::ZERO,
            tax_free_meal: Decimal::ZERO,
            tax_free_car_maintenance: Decimal::ZERO,
            other_tax_free: Decimal::ZERO,
            has_national_pension: true,
            has_health_insurance: true,
            has_employment_insurance: true,
            tax_dependents: 1,
            children_count: 0,
            income_tax_rate_override: None,
        }
    }

    #[test]
    fn test_monthly_worker_full_calculation() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let result = calculator
            .calculate(&monthly_worker("3000000"), &MonthlyWorkRecord::default(), true)
            .unwrap();

        assert_eq!(result.hourly_rate, dec("17261"));
        assert_eq!(result.payments.base_salary, dec("3000000"));
        assert_eq!(result.total_payment, dec("3000000"));
        assert_eq!(result.insurance_base, dec("3000000"));
        assert_eq!(result.deductions.national_pension, dec("135000"));
        assert_eq!(result.deductions.health_insurance, dec("106350"));
        assert_eq!(result.deductions.long_term_care, dec("13770"));
        assert_eq!(result.deductions.employment_insurance, dec("27000"));
        assert_eq!(result.deductions.income_tax, dec("74350"));
        assert_eq!(result.deductions.local_income_tax, dec("7430"));
        assert_eq!(result.total_deduction, dec("363900"));
        assert_eq!(result.net_payment, dec("2636100"));
    }

    #[test]
    fn test_tax_free_allowances_shrink_the_base() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let mut worker = monthly_worker("3000000");
        worker.food_allowance = dec("200000");
        worker.tax_free_meal = dec("200000");

        let result = calculator
            .calculate(&worker, &MonthlyWorkRecord::default(), true)
            .unwrap();

        assert_eq!(result.total_payment, dec("3200000"));
        assert_eq!(result.total_tax_free, dec("200000"));
        assert_eq!(result.insurance_base, dec("3000000"));
        assert_eq!(result.deductions.income_tax, dec("74350"));
    }

    #[test]
    fn test_tax_free_cannot_push_the_base_negative() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let mut worker = monthly_worker("500000");
        worker.tax_free_meal = dec("800000");
        let record = MonthlyWorkRecord {
            weekly_hours: dec("10"),
            ..MonthlyWorkRecord::default()
        };

        let result = calculator.calculate(&worker, &record, true).unwrap();
        assert_eq!(result.insurance_base, Decimal::ZERO);
        assert_eq!(result.total_deduction, Decimal::ZERO);
    }

    #[test]
    fn test_freelance_worker_skips_insurance() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let mut worker = monthly_worker("3000000");
        worker.employment_type = EmploymentType::Freelance;

        let result = calculator
            .calculate(&worker, &MonthlyWorkRecord::default(), true)
            .unwrap();

        assert_eq!(result.deductions.national_pension, Decimal::ZERO);
        assert_eq!(result.deductions.health_insurance, Decimal::ZERO);
        assert_eq!(result.deductions.long_term_care, Decimal::ZERO);
        assert_eq!(result.deductions.employment_insurance, Decimal::ZERO);
        assert_eq!(result.deductions.income_tax, dec("90000"));
        assert_eq!(result.deductions.local_income_tax, dec("9000"));
        assert_eq!(result.net_payment, dec("2901000"));
    }

    #[test]
    fn test_small_employer_pays_no_premiums() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let record = MonthlyWorkRecord {
            overtime_hours: dec("10"),
            night_hours: dec("5"),
            holiday_hours: dec("8"),
            ..MonthlyWorkRecord::default()
        };

        let exempt = calculator
            .calculate(&monthly_worker("3000000"), &record, false)
            .unwrap();
        assert_eq!(exempt.payments.overtime_pay, Decimal::ZERO);
        assert_eq!(exempt.payments.night_pay, Decimal::ZERO);
        assert_eq!(exempt.payments.holiday_pay, Decimal::ZERO);

        let covered = calculator
            .calculate(&monthly_worker("3000000"), &record, true)
            .unwrap();
        assert!(covered.payments.overtime_pay > Decimal::ZERO);
        assert!(covered.total_payment > exempt.total_payment);
    }

    #[test]
    fn test_additional_items_flow_into_totals() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let record = MonthlyWorkRecord {
            bonus: dec("500000"),
            additional_pay: [dec("100000"), Decimal::ZERO, Decimal::ZERO],
            additional_deduct: [dec("50000"), dec("20000"), Decimal::ZERO],
            ..MonthlyWorkRecord::default()
        };

        let result = calculator
            .calculate(&monthly_worker("3000000"), &record, true)
            .unwrap();

        assert_eq!(result.total_payment, dec("3600000"));
        assert_eq!(
            result.total_deduction,
            result.deductions.national_pension
                + result.deductions.health_insurance
                + result.deductions.long_term_care
                + result.deductions.employment_insurance
                + result.deductions.income_tax
                + result.deductions.local_income_tax
                + dec("70000")
        );
        assert_eq!(result.net_payment, result.total_payment - result.total_deduction);
    }

    #[test]
    fn test_negative_amount_is_rejected_with_field_name() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let record = MonthlyWorkRecord {
            overtime_hours: dec("-1"),
            ..MonthlyWorkRecord::default()
        };

        let result = calculator.calculate(&monthly_worker("3000000"), &record, true);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "overtime_hours"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_additional_pay_names_the_slot() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let record = MonthlyWorkRecord {
            additional_pay: [Decimal::ZERO, dec("-1"), Decimal::ZERO],
            ..MonthlyWorkRecord::default()
        };

        let result = calculator.calculate(&monthly_worker("3000000"), &record, true);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "additional_pay[1]"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_dependents_is_rejected() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let mut worker = monthly_worker("3000000");
        worker.tax_dependents = 0;

        let result = calculator.calculate(&worker, &MonthlyWorkRecord::default(), true);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "tax_dependents"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_override_above_one_hundred_percent_is_rejected() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        // A 200% withholding rate would deduct twice the pay and push the
        // net negative.
        let mut worker = monthly_worker("3000000");
        worker.income_tax_rate_override = Some(dec("200"));

        let result = calculator.calculate(&worker, &MonthlyWorkRecord::default(), true);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => {
                assert_eq!(field, "income_tax_rate_override")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_override_at_the_cap_is_accepted() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let mut worker = monthly_worker("3000000");
        worker.income_tax_rate_override = Some(dec("100"));

        let result = calculator
            .calculate(&worker, &MonthlyWorkRecord::default(), true)
            .unwrap();
        assert_eq!(result.deductions.income_tax, dec("3000000"));
    }

    #[test]
    fn test_week_count_above_five_is_rejected() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);

        let record = MonthlyWorkRecord {
            week_count: 6,
            ..MonthlyWorkRecord::default()
        };

        let result = calculator.calculate(&monthly_worker("3000000"), &record, true);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "week_count"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let rates = test_rates();
        let schedule = test_schedule();
        let calculator = PayrollCalculator::new(&rates, &schedule);
        let worker = monthly_worker("4500000");
        let record = MonthlyWorkRecord {
            overtime_hours: dec("12"),
            bonus: dec("300000"),
            ..MonthlyWorkRecord::default()
        };

        let first = calculator.calculate(&worker, &record, true).unwrap();
        let second = calculator.calculate(&worker, &record, true).unwrap();
        assert_eq!(first, second);
    }
}
