//! The insight engine: a deterministic rule evaluator over percentage
//! thresholds on salary
//!
//! Rules are applied in a fixed order (rent, EMI, savings ladder, insurance,
//! per-category limits, overall bonus) and produce an ordered list of
//! [`Insight`]s. Comparisons are strict (`<` / `>`): a savings rate of
//! exactly 10% is not "critically low", and rent at exactly 40% is not a
//! warning.
//!
//! Precondition: `salary > 0`. Callers validate before invoking; the engine
//! divides by salary without re-checking and produces infinity/NaN
//! percentages otherwise.

use crate::models::{ExpenseBreakdown, Insurance};

use super::types::{
    FinancialSummary, Insight, InsightCategory, InsightKind, ResolvedBreakdown,
    EMI_SUGGESTION_LIMIT_PCT, EMI_WARNING_LIMIT_PCT, ENTERTAINMENT_LIMIT_PCT, GROCERIES_LIMIT_PCT,
    INSURANCE_MIN_PCT, RENT_SUGGESTION_LIMIT_PCT, RENT_WARNING_LIMIT_PCT, SAVINGS_CRITICAL_PCT,
    SAVINGS_HEALTHY_PCT, SAVINGS_LOW_PCT, TRANSPORT_LIMIT_PCT, UTILITIES_LIMIT_PCT,
};

/// Total monthly outflow: the seven categories plus the insurance premium
/// when covered
pub fn total_expenses(expenses: &ExpenseBreakdown, insurance: &Insurance) -> f64 {
    expenses.total() + insurance.contribution()
}

fn pct_of(amount: f64, salary: f64) -> f64 {
    (amount / salary) * 100.0
}

/// Evaluate the rule set and return insights in rule order
pub fn generate_insights(
    salary: f64,
    expenses: &ExpenseBreakdown,
    insurance: &Insurance,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    let total = total_expenses(expenses, insurance);
    let savings = salary - total;
    let savings_pct = pct_of(savings, salary);
    let rent_pct = pct_of(expenses.rent, salary);
    let emi_pct = pct_of(expenses.emi, salary);

    // Rule 1: rent share of salary
    if rent_pct > RENT_WARNING_LIMIT_PCT {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!(
                "Your rent ({:.1}%) exceeds 40% of your salary. Consider finding more affordable housing to improve your financial health.",
                rent_pct
            ),
            InsightCategory::Rent,
        ));
    } else if rent_pct > RENT_SUGGESTION_LIMIT_PCT {
        insights.push(Insight::new(
            InsightKind::Suggestion,
            format!(
                "Your rent is {:.1}% of your salary. While manageable, keeping it below 30% would give you more financial flexibility.",
                rent_pct
            ),
            InsightCategory::Rent,
        ));
    }

    // Rule 2: EMI share of salary
    if emi_pct > EMI_WARNING_LIMIT_PCT {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!(
                "Your EMI ({:.1}%) exceeds 30% of your salary. This high debt burden may limit your financial flexibility. Consider debt consolidation.",
                emi_pct
            ),
            InsightCategory::Emi,
        ));
    } else if emi_pct > EMI_SUGGESTION_LIMIT_PCT {
        insights.push(Insight::new(
            InsightKind::Suggestion,
            format!(
                "Your EMI is {:.1}% of your salary. Try to keep it below 20% for better financial stability.",
                emi_pct
            ),
            InsightCategory::Emi,
        ));
    }

    // Rule 3: savings ladder, first match wins, always produces exactly one
    if savings_pct < 0.0 {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!(
                "You're spending more than you earn! Your expenses exceed your salary by ₹{:.2}. Immediate action needed to reduce expenses.",
                savings.abs()
            ),
            InsightCategory::Savings,
        ));
    } else if savings_pct < SAVINGS_CRITICAL_PCT {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!(
                "Your savings rate is only {:.1}%. This is critically low. Aim for at least 20-30% savings to build financial security.",
                savings_pct
            ),
            InsightCategory::Savings,
        ));
    } else if savings_pct < SAVINGS_LOW_PCT {
        insights.push(Insight::new(
            InsightKind::Suggestion,
            format!(
                "Your savings rate is {:.1}%. Try to increase it to at least 20-30% for a healthy financial cushion.",
                savings_pct
            ),
            InsightCategory::Savings,
        ));
    } else if savings_pct < SAVINGS_HEALTHY_PCT {
        insights.push(Insight::new(
            InsightKind::Tip,
            format!(
                "Good job! You're saving {:.1}% of your salary. Aim for 30% or more to accelerate wealth building.",
                savings_pct
            ),
            InsightCategory::Savings,
        ));
    } else {
        insights.push(Insight::new(
            InsightKind::Success,
            format!(
                "Excellent! You're saving {:.1}% of your salary. Keep up the great financial discipline!",
                savings_pct
            ),
            InsightCategory::Savings,
        ));
    }

    // Rule 4: insurance coverage
    if !insurance.has_insurance {
        insights.push(Insight::new(
            InsightKind::Tip,
            "You don't have insurance coverage. Consider getting health and life insurance to protect yourself and your family from unexpected expenses.",
            InsightCategory::Insurance,
        ));
    } else {
        let insurance_pct = pct_of(insurance.amount, salary);
        if insurance_pct < INSURANCE_MIN_PCT {
            insights.push(Insight::new(
                InsightKind::Tip,
                format!(
                    "Your insurance premium is {:.1}% of salary. This is a good investment for your financial security.",
                    insurance_pct
                ),
                InsightCategory::Insurance,
            ));
        }
    }

    // Rule 5: per-category limits, each checked independently
    let category_limits = [
        (InsightCategory::Groceries, expenses.groceries, GROCERIES_LIMIT_PCT),
        (InsightCategory::Utilities, expenses.utilities, UTILITIES_LIMIT_PCT),
        (InsightCategory::Transport, expenses.transport, TRANSPORT_LIMIT_PCT),
        (
            InsightCategory::Entertainment,
            expenses.entertainment,
            ENTERTAINMENT_LIMIT_PCT,
        ),
    ];

    for (category, amount, limit) in category_limits {
        let category_pct = pct_of(amount, salary);
        if category_pct > limit {
            insights.push(Insight::new(
                InsightKind::Suggestion,
                format!(
                    "Your {} expense ({:.1}%) is above the recommended {}%. Look for ways to optimize this category.",
                    category, category_pct, limit
                ),
                category,
            ));
        }
    }

    // Rule 6: overall-health bonus, on top of whatever rule 3 produced
    if savings_pct >= SAVINGS_HEALTHY_PCT
        && rent_pct <= RENT_SUGGESTION_LIMIT_PCT
        && emi_pct <= EMI_SUGGESTION_LIMIT_PCT
        && insurance.has_insurance
    {
        insights.push(Insight::new(
            InsightKind::Success,
            "Your overall financial health is excellent! You're managing expenses well, saving adequately, and have insurance coverage.",
            InsightCategory::Overall,
        ));
    }

    insights
}

/// Compute the summary returned to the presentation layer
pub fn financial_summary(
    salary: f64,
    expenses: &ExpenseBreakdown,
    insurance: &Insurance,
) -> FinancialSummary {
    let total = total_expenses(expenses, insurance);
    let savings = salary - total;
    let savings_pct = pct_of(savings, salary);

    FinancialSummary {
        salary,
        total_expenses: total,
        savings,
        savings_percentage: format!("{:.2}", savings_pct),
        expense_breakdown: ResolvedBreakdown {
            rent: expenses.rent,
            emi: expenses.emi,
            groceries: expenses.groceries,
            utilities: expenses.utilities,
            transport: expenses.transport,
            entertainment: expenses.entertainment,
            others: expenses.others,
            insurance: insurance.contribution(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_insurance() -> Insurance {
        Insurance::default()
    }

    fn insured(amount: f64) -> Insurance {
        Insurance {
            has_insurance: true,
            amount,
        }
    }

    fn find<'a>(insights: &'a [Insight], category: InsightCategory) -> Vec<&'a Insight> {
        insights.iter().filter(|i| i.category == category).collect()
    }

    #[test]
    fn test_total_expenses_sums_all_fields() {
        let expenses = ExpenseBreakdown {
            rent: 10000.0,
            emi: 5000.0,
            groceries: 4000.0,
            utilities: 2000.0,
            transport: 1500.0,
            entertainment: 1000.0,
            others: 500.0,
        };
        assert_eq!(total_expenses(&expenses, &no_insurance()), 24000.0);
        assert_eq!(total_expenses(&expenses, &insured(2000.0)), 26000.0);
        // Uncovered insurance amount does not count
        let lapsed = Insurance {
            has_insurance: false,
            amount: 2000.0,
        };
        assert_eq!(total_expenses(&expenses, &lapsed), 24000.0);
    }

    #[test]
    fn test_high_rent_warning() {
        // 50% of salary on rent, savings still 50% -> rent warning + savings success
        let expenses = ExpenseBreakdown {
            rent: 25000.0,
            ..Default::default()
        };
        let insights = generate_insights(50000.0, &expenses, &no_insurance());

        let rent = find(&insights, InsightCategory::Rent);
        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].kind, InsightKind::Warning);
        assert!(rent[0].message.contains("50.0%"));

        let savings = find(&insights, InsightCategory::Savings);
        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].kind, InsightKind::Success);
    }

    #[test]
    fn test_moderate_rent_suggestion() {
        let expenses = ExpenseBreakdown {
            rent: 17500.0, // 35%
            ..Default::default()
        };
        let insights = generate_insights(50000.0, &expenses, &no_insurance());
        let rent = find(&insights, InsightCategory::Rent);
        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].kind, InsightKind::Suggestion);
    }

    #[test]
    fn test_rent_at_exact_boundaries_is_silent_or_downgraded() {
        // Exactly 40% is not a warning (strict >), but is a suggestion
        let at_forty = ExpenseBreakdown {
            rent: 20000.0,
            ..Default::default()
        };
        let insights = generate_insights(50000.0, &at_forty, &no_insurance());
        let rent = find(&insights, InsightCategory::Rent);
        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].kind, InsightKind::Suggestion);

        // Exactly 30% produces no rent insight at all
        let at_thirty = ExpenseBreakdown {
            rent: 15000.0,
            ..Default::default()
        };
        let insights = generate_insights(50000.0, &at_thirty, &no_insurance());
        assert!(find(&insights, InsightCategory::Rent).is_empty());
    }

    #[test]
    fn test_emi_ladder() {
        let salary = 100000.0;

        let heavy = ExpenseBreakdown {
            emi: 35000.0,
            ..Default::default()
        };
        let insights = generate_insights(salary, &heavy, &no_insurance());
        let emi = find(&insights, InsightCategory::Emi);
        assert_eq!(emi.len(), 1);
        assert_eq!(emi[0].kind, InsightKind::Warning);

        let moderate = ExpenseBreakdown {
            emi: 25000.0,
            ..Default::default()
        };
        let insights = generate_insights(salary, &moderate, &no_insurance());
        let emi = find(&insights, InsightCategory::Emi);
        assert_eq!(emi.len(), 1);
        assert_eq!(emi[0].kind, InsightKind::Suggestion);

        // Exactly 30% falls in the suggestion branch (20 < x <= 30)
        let at_thirty = ExpenseBreakdown {
            emi: 30000.0,
            ..Default::default()
        };
        let insights = generate_insights(salary, &at_thirty, &no_insurance());
        let emi = find(&insights, InsightCategory::Emi);
        assert_eq!(emi.len(), 1);
        assert_eq!(emi[0].kind, InsightKind::Suggestion);

        // Exactly 20% produces nothing
        let at_twenty = ExpenseBreakdown {
            emi: 20000.0,
            ..Default::default()
        };
        let insights = generate_insights(salary, &at_twenty, &no_insurance());
        assert!(find(&insights, InsightCategory::Emi).is_empty());
    }

    #[test]
    fn test_overspend_includes_amount() {
        let expenses = ExpenseBreakdown {
            rent: 40000.0,
            groceries: 15000.0,
            ..Default::default()
        };
        let insights = generate_insights(50000.0, &expenses, &no_insurance());
        let savings = find(&insights, InsightCategory::Savings);
        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].kind, InsightKind::Warning);
        assert!(savings[0].message.contains("₹5000.00"));
    }

    #[test]
    fn test_savings_ladder_boundary_at_ten_percent() {
        // salary=30000, rent=15000 (50%), emi=12000 (40%): savings 3000 = exactly 10%
        let expenses = ExpenseBreakdown {
            rent: 15000.0,
            emi: 12000.0,
            ..Default::default()
        };
        let insights = generate_insights(30000.0, &expenses, &no_insurance());

        assert_eq!(find(&insights, InsightCategory::Rent)[0].kind, InsightKind::Warning);
        assert_eq!(find(&insights, InsightCategory::Emi)[0].kind, InsightKind::Warning);

        // Exactly 10% is not critically low; it lands in the < 20 branch
        let savings = find(&insights, InsightCategory::Savings);
        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].kind, InsightKind::Suggestion);
        assert!(savings[0].message.contains("10.0%"));
    }

    #[test]
    fn test_savings_ladder_tip_band() {
        // 25% savings -> tip
        let expenses = ExpenseBreakdown {
            rent: 15000.0,
            groceries: 22500.0,
            ..Default::default()
        };
        let insights = generate_insights(50000.0, &expenses, &no_insurance());
        let savings = find(&insights, InsightCategory::Savings);
        assert_eq!(savings[0].kind, InsightKind::Tip);
    }

    #[test]
    fn test_savings_exactly_one_per_entry() {
        // Savings ladder always produces exactly one insight (ignoring the bonus)
        for (salary, rent) in [
            (50000.0, 60000.0), // negative savings
            (50000.0, 47000.0), // critically low
            (50000.0, 42000.0), // < 20
            (50000.0, 37000.0), // < 30
            (50000.0, 10000.0), // healthy
        ] {
            let expenses = ExpenseBreakdown {
                rent,
                ..Default::default()
            };
            let insights = generate_insights(salary, &expenses, &no_insurance());
            assert_eq!(find(&insights, InsightCategory::Savings).len(), 1);
        }
    }

    #[test]
    fn test_no_insurance_tip() {
        let insights = generate_insights(100000.0, &ExpenseBreakdown::default(), &no_insurance());
        let insurance = find(&insights, InsightCategory::Insurance);
        assert_eq!(insurance.len(), 1);
        assert_eq!(insurance[0].kind, InsightKind::Tip);
        assert!(insurance[0].message.contains("don't have insurance"));
    }

    #[test]
    fn test_affordable_insurance_tip() {
        let insights =
            generate_insights(100000.0, &ExpenseBreakdown::default(), &insured(3000.0));
        let insurance = find(&insights, InsightCategory::Insurance);
        assert_eq!(insurance.len(), 1);
        assert!(insurance[0].message.contains("good investment"));
    }

    #[test]
    fn test_expensive_insurance_is_silent() {
        let insights =
            generate_insights(100000.0, &ExpenseBreakdown::default(), &insured(8000.0));
        assert!(find(&insights, InsightCategory::Insurance).is_empty());
    }

    #[test]
    fn test_category_limits_independent() {
        // Groceries 20% and entertainment 10% both fire; utilities/transport at
        // exactly their limits do not (strict >)
        let expenses = ExpenseBreakdown {
            groceries: 10000.0,
            utilities: 5000.0,
            transport: 5000.0,
            entertainment: 5000.0,
            ..Default::default()
        };
        let insights = generate_insights(50000.0, &expenses, &no_insurance());

        assert_eq!(find(&insights, InsightCategory::Groceries).len(), 1);
        assert!(find(&insights, InsightCategory::Utilities).is_empty());
        assert!(find(&insights, InsightCategory::Transport).is_empty());
        assert_eq!(find(&insights, InsightCategory::Entertainment).len(), 1);
    }

    #[test]
    fn test_overall_bonus_requires_insurance() {
        // All expenses zero, no insurance: success on savings but no bonus
        let insights = generate_insights(100000.0, &ExpenseBreakdown::default(), &no_insurance());
        let savings = find(&insights, InsightCategory::Savings);
        assert_eq!(savings[0].kind, InsightKind::Success);
        assert!(savings[0].message.contains("100.0%"));
        assert!(find(&insights, InsightCategory::Overall).is_empty());

        // Same picture with insurance: bonus appears in addition to the success
        let insights =
            generate_insights(100000.0, &ExpenseBreakdown::default(), &insured(2000.0));
        assert_eq!(find(&insights, InsightCategory::Savings).len(), 1);
        assert_eq!(find(&insights, InsightCategory::Savings)[0].kind, InsightKind::Success);
        assert_eq!(find(&insights, InsightCategory::Overall).len(), 1);
        assert_eq!(find(&insights, InsightCategory::Overall)[0].kind, InsightKind::Success);
    }

    #[test]
    fn test_overall_bonus_blocked_by_high_rent() {
        let expenses = ExpenseBreakdown {
            rent: 35000.0, // 35% > 30
            ..Default::default()
        };
        let insights = generate_insights(100000.0, &expenses, &insured(2000.0));
        assert!(find(&insights, InsightCategory::Overall).is_empty());
    }

    #[test]
    fn test_insight_order_is_stable() {
        // An entry that fires every rule, in order:
        // rent -> emi -> savings -> insurance -> groceries -> utilities ->
        // transport -> entertainment (bonus impossible when rent fires)
        let expenses = ExpenseBreakdown {
            rent: 45000.0,         // 45%
            emi: 35000.0,          // 35%
            groceries: 20000.0,    // 20%
            utilities: 15000.0,    // 15%
            transport: 15000.0,    // 15%
            entertainment: 10000.0, // 10%
            others: 0.0,
        };
        let insights = generate_insights(100000.0, &expenses, &no_insurance());

        let order: Vec<InsightCategory> = insights.iter().map(|i| i.category).collect();
        assert_eq!(
            order,
            vec![
                InsightCategory::Rent,
                InsightCategory::Emi,
                InsightCategory::Savings,
                InsightCategory::Insurance,
                InsightCategory::Groceries,
                InsightCategory::Utilities,
                InsightCategory::Transport,
                InsightCategory::Entertainment,
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let expenses = ExpenseBreakdown {
            rent: 18000.0,
            emi: 9000.0,
            groceries: 7000.0,
            utilities: 2500.0,
            transport: 2000.0,
            entertainment: 3500.0,
            others: 1000.0,
        };
        let insurance = insured(1200.0);
        let first = generate_insights(60000.0, &expenses, &insurance);
        let second = generate_insights(60000.0, &expenses, &insurance);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_arithmetic() {
        let expenses = ExpenseBreakdown {
            rent: 20000.0,
            emi: 10000.0,
            groceries: 5000.0,
            utilities: 2000.0,
            transport: 1000.0,
            entertainment: 1000.0,
            others: 1000.0,
        };
        let summary = financial_summary(80000.0, &expenses, &insured(2000.0));

        assert_eq!(summary.salary, 80000.0);
        assert_eq!(summary.total_expenses, 42000.0);
        assert_eq!(summary.savings, 38000.0);
        assert_eq!(summary.savings_percentage, "47.50");
        assert_eq!(summary.expense_breakdown.insurance, 2000.0);
        assert_eq!(summary.expense_breakdown.rent, 20000.0);
    }

    #[test]
    fn test_summary_negative_savings() {
        let expenses = ExpenseBreakdown {
            rent: 30000.0,
            emi: 25000.0,
            ..Default::default()
        };
        let summary = financial_summary(50000.0, &expenses, &no_insurance());
        assert_eq!(summary.savings, -5000.0);
        assert_eq!(summary.savings_percentage, "-10.00");
    }

    #[test]
    fn test_summary_camel_case_wire_shape() {
        let summary = financial_summary(50000.0, &ExpenseBreakdown::default(), &no_insurance());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalExpenses"], 0.0);
        assert_eq!(json["savingsPercentage"], "100.00");
        assert!(json["expenseBreakdown"]["insurance"].is_number());
    }
}
