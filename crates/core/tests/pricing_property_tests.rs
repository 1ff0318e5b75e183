//! Property-based integration tests for pricing and quote validity.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Days, NaiveDate};
use kitchenquote_core::clients::Client;
use kitchenquote_core::components::{Labor, Material};
use kitchenquote_core::costs::CostCalculator;
use kitchenquote_core::projects::Project;
use kitchenquote_core::quotes::QuoteGenerator;
use kitchenquote_core::utils::money::round_currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Non-negative amount with two decimals, up to 100 000.00.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Coefficient between 0.50 and 2.00.
fn arb_coefficient() -> impl Strategy<Value = Decimal> {
    (50i64..=200).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn arb_material() -> impl Strategy<Value = Material> {
    (
        "[A-Za-z ]{3,20}",
        arb_amount(),
        (0i64..10_000).prop_map(|q| Decimal::new(q, 2)),
        arb_amount(),
        arb_coefficient(),
    )
        .prop_map(|(name, unit_cost, quantity, transport, quality)| {
            Material::new(name, unit_cost, quantity)
                .with_transport_cost(transport)
                .with_quality_coefficient(quality)
        })
}

fn arb_labor() -> impl Strategy<Value = Labor> {
    (
        "[A-Za-z ]{3,20}",
        arb_amount(),
        (0i64..20_000).prop_map(|h| Decimal::new(h, 2)),
        arb_coefficient(),
    )
        .prop_map(|(name, rate, hours, productivity)| {
            Labor::new(name, rate, hours).with_productivity(productivity)
        })
}

fn arb_project() -> impl Strategy<Value = Project> {
    (
        proptest::collection::vec(arb_material(), 0..5),
        proptest::collection::vec(arb_labor(), 0..5),
        (1i64..50_000).prop_map(|s| Decimal::new(s, 2)),
    )
        .prop_map(|(materials, labor_items, surface)| {
            let mut project = Project::new("Kitchen", surface, start_date());
            for material in materials {
                project.add_material(material);
            }
            for labor in labor_items {
                project.add_labor(labor);
            }
            project
        })
}

/// Project with at least one labor item costing 100.00 or more.
fn arb_priced_project() -> impl Strategy<Value = Project> {
    (arb_project(), 100i64..=1_000, 1i64..=10).prop_map(|(mut project, rate, hours)| {
        project.add_labor(Labor::new(
            "Installer",
            Decimal::from(rate),
            Decimal::from(hours),
        ));
        project
    })
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| start_date() + Days::new(offset))
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn professional(discount_rate: Decimal) -> Client {
    Client {
        id: "client-pro".to_string(),
        name: "Bati Pro".to_string(),
        email: "contact@batipro.fr".to_string(),
        address: "3 quai du Rhone, Lyon".to_string(),
        phone: "0472000000".to_string(),
        is_professional: true,
        discount_rate,
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Component costs are never negative for non-negative inputs.
    #[test]
    fn prop_component_costs_are_non_negative(
        material in arb_material(),
        labor in arb_labor(),
    ) {
        prop_assert!(material.calculate_cost().unwrap() >= Decimal::ZERO);
        prop_assert!(labor.calculate_cost().unwrap() >= Decimal::ZERO);
    }

    /// Totals are stored rounded to cents and rounding them again is a no-op.
    #[test]
    fn prop_total_is_rounded_to_cents(mut project in arb_project()) {
        let total = CostCalculator::default().compute_total_cost(&mut project).unwrap();
        prop_assert_eq!(round_currency(total), total);
        prop_assert!(total.scale() <= 2);
        prop_assert_eq!(project.total_cost, Some(total));
    }

    /// Rounding to cents is idempotent.
    #[test]
    fn prop_rounding_is_idempotent(mantissa in any::<i64>(), scale in 0u32..10) {
        let value = Decimal::new(mantissa, scale);
        let once = round_currency(value);
        prop_assert_eq!(round_currency(once), once);
    }

    /// A project without components always costs zero.
    #[test]
    fn prop_empty_project_costs_zero(
        surface in (-10_000i64..10_000).prop_map(|s| Decimal::new(s, 2)),
        vat in 0i64..=100,
    ) {
        let mut project = Project::new("Empty", surface, start_date());
        let calculator = CostCalculator::new(Decimal::from(vat));
        prop_assert_eq!(calculator.compute_total_cost(&mut project).unwrap(), Decimal::ZERO);
    }

    /// A non-positive surface yields a zero cost per square meter.
    #[test]
    fn prop_non_positive_surface_has_zero_unit_cost(
        mut project in arb_project(),
        surface in (-10_000i64..=0).prop_map(|s| Decimal::new(s, 2)),
    ) {
        project.surface = surface;
        let per_m2 = CostCalculator::default()
            .compute_cost_per_square_meter(&mut project)
            .unwrap();
        prop_assert_eq!(per_m2, Decimal::ZERO);
    }

    /// A larger professional discount never increases the total.
    #[test]
    fn prop_discount_is_monotonic(
        project in arb_project(),
        low in 0i64..=100,
        extra in 0i64..=100,
    ) {
        let high = (low + extra).min(100);
        let calculator = CostCalculator::default();

        let mut discounted_less = project.clone().with_client(professional(Decimal::new(low, 2)));
        let mut discounted_more = project.with_client(professional(Decimal::new(high, 2)));

        let less = calculator.compute_total_cost(&mut discounted_less).unwrap();
        let more = calculator.compute_total_cost(&mut discounted_more).unwrap();
        prop_assert!(more <= less);
    }

    /// A higher VAT rate never decreases the total.
    #[test]
    fn prop_vat_is_monotonic(
        project in arb_project(),
        low in 0i64..=50,
        extra in 0i64..=50,
    ) {
        let lower = CostCalculator::new(Decimal::from(low))
            .compute_total_cost(&mut project.clone())
            .unwrap();
        let higher = CostCalculator::new(Decimal::from(low + extra))
            .compute_total_cost(&mut project.clone())
            .unwrap();
        prop_assert!(higher >= lower);
    }

    /// A quote is valid from its issue date through its validity date, inclusive.
    #[test]
    fn prop_validity_window_is_inclusive(mut project in arb_project(), issued in arb_date()) {
        let generator = QuoteGenerator::default();
        let quote = generator.generate_quote_on(&mut project, issued).unwrap();

        prop_assert!(quote.validity_date > quote.issue_date);
        prop_assert!(generator.is_valid_on(&quote, quote.issue_date));
        prop_assert!(generator.is_valid_on(&quote, quote.validity_date));
        prop_assert!(!generator.is_valid_on(&quote, quote.validity_date + Days::new(1)));
        prop_assert_eq!(quote.estimated_amount, project.total_cost.unwrap());
    }

    /// On a priced project, one more point of discount strictly lowers the total.
    #[test]
    fn prop_discount_strictly_lowers_total(
        project in arb_priced_project(),
        low in 0i64..=90,
        extra in 1i64..=9,
    ) {
        let calculator = CostCalculator::default();

        let mut discounted_less = project.clone().with_client(professional(Decimal::new(low, 2)));
        let mut discounted_more =
            project.with_client(professional(Decimal::new(low + extra, 2)));

        let less = calculator.compute_total_cost(&mut discounted_less).unwrap();
        let more = calculator.compute_total_cost(&mut discounted_more).unwrap();
        prop_assert!(more < less);
    }

    /// On a priced project, one more VAT point strictly raises the total.
    #[test]
    fn prop_vat_strictly_raises_total(
        project in arb_priced_project(),
        low in 0i64..=50,
        extra in 1i64..=50,
    ) {
        let lower = CostCalculator::new(Decimal::from(low))
            .compute_total_cost(&mut project.clone())
            .unwrap();
        let higher = CostCalculator::new(Decimal::from(low + extra))
            .compute_total_cost(&mut project.clone())
            .unwrap();
        prop_assert!(higher > lower);
    }
}
