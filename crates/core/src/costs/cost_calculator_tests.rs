//! Tests for the project cost pipeline.

#[cfg(test)]
mod tests {
    use crate::clients::Client;
    use crate::components::{Labor, Material};
    use crate::costs::CostCalculator;
    use crate::errors::{CalculatorError, Error};
    use crate::projects::Project;
    use crate::settings::PricingSettings;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn client(is_professional: bool, discount_rate: Decimal) -> Client {
        Client {
            id: "client-1".to_string(),
            name: "Dupont".to_string(),
            email: "dupont@example.com".to_string(),
            address: "12 rue des Lilas, Lyon".to_string(),
            phone: "0600000000".to_string(),
            is_professional,
            discount_rate,
        }
    }

    fn empty_project(surface: Decimal) -> Project {
        Project::new(
            "Kitchen Lyon",
            surface,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    /// Material 77.00 + labor 200.00 for a professional client at 5%.
    fn reference_project() -> Project {
        let mut project = empty_project(dec!(12)).with_client(client(true, dec!(0.05)));
        project.add_material(
            Material::new("Countertop", dec!(10), dec!(5))
                .with_transport_cost(dec!(20))
                .with_quality_coefficient(dec!(1.1)),
        );
        project.add_labor(Labor::new("Installer", dec!(25), dec!(8)));
        project
    }

    // ==================== compute_total_cost ====================

    #[test]
    fn test_reference_total() {
        let mut project = reference_project();
        let total = CostCalculator::default()
            .compute_total_cost(&mut project)
            .unwrap();
        assert_eq!(total, dec!(315.78));
        assert_eq!(project.total_cost, Some(dec!(315.78)));
    }

    #[test]
    fn test_empty_project_costs_zero() {
        let mut project = empty_project(dec!(10));
        let total = CostCalculator::default()
            .compute_total_cost(&mut project)
            .unwrap();
        assert_eq!(total, Decimal::ZERO);
        assert_eq!(project.total_cost, Some(Decimal::ZERO));
    }

    #[test]
    fn test_project_without_client_gets_no_discount() {
        let mut project = reference_project();
        project.client = None;
        let total = CostCalculator::default()
            .compute_total_cost(&mut project)
            .unwrap();
        // 277 * 1.2
        assert_eq!(total, dec!(332.40));
    }

    #[test]
    fn test_private_client_discount_is_ignored() {
        let mut project = reference_project();
        project.client = Some(client(false, dec!(0.3)));
        let total = CostCalculator::default()
            .compute_total_cost(&mut project)
            .unwrap();
        assert_eq!(total, dec!(332.40));
    }

    #[test]
    fn test_vat_is_applied_once() {
        let mut project = empty_project(dec!(10));
        project.add_labor(Labor::new("Painter", dec!(50), dec!(2)).with_vat_rate(dec!(20)));
        let total = CostCalculator::new(dec!(20))
            .compute_total_cost(&mut project)
            .unwrap();
        assert_eq!(total, dec!(120.00));
    }

    #[test]
    fn test_vat_rate_from_settings() {
        let settings = PricingSettings {
            vat_rate: dec!(10),
            ..PricingSettings::default()
        };
        let calculator = CostCalculator::from_settings(&settings);
        assert_eq!(calculator.vat_rate(), dec!(10));

        let mut project = reference_project();
        // 263.15 * 1.1 = 289.465
        assert_eq!(calculator.compute_total_cost(&mut project).unwrap(), dec!(289.47));
    }

    #[test]
    fn test_total_rounds_half_up() {
        let mut project = empty_project(dec!(1));
        project.add_material(Material::new("Screws", dec!(0.125), dec!(1)));
        let total = CostCalculator::new(Decimal::ZERO)
            .compute_total_cost(&mut project)
            .unwrap();
        assert_eq!(total, dec!(0.13));
    }

    #[test]
    fn test_profit_margin_applies_before_discount() {
        let mut project = reference_project().with_profit_margin(dec!(10));
        let total = CostCalculator::default()
            .compute_total_cost(&mut project)
            .unwrap();
        // 277 * 1.10 = 304.7; * 0.95 = 289.465; * 1.2 = 347.358
        assert_eq!(total, dec!(347.36));
    }

    #[test]
    fn test_recompute_refreshes_stale_cache() {
        let calculator = CostCalculator::default();
        let mut project = reference_project();
        project.total_cost = Some(dec!(1));
        calculator.compute_total_cost(&mut project).unwrap();
        assert_eq!(project.total_cost, Some(dec!(315.78)));

        project.add_labor(Labor::new("Electrician", dec!(40), dec!(1)));
        assert_eq!(project.total_cost, None);
        // (277 + 40) * 0.95 * 1.2 = 361.38
        assert_eq!(calculator.compute_total_cost(&mut project).unwrap(), dec!(361.38));
    }

    #[test]
    fn test_overflow_is_wrapped_with_project_context() {
        let mut project = empty_project(dec!(10));
        project.add_material(Material::new("Huge", Decimal::MAX, dec!(1)));
        project.add_material(Material::new("Huge again", Decimal::MAX, dec!(1)));
        project.total_cost = Some(dec!(5));

        match CostCalculator::default().compute_total_cost(&mut project) {
            Err(Error::Calculation(CalculatorError::ProjectCost { project: name, .. })) => {
                assert_eq!(name, "Kitchen Lyon");
            }
            other => panic!("expected wrapped failure, got {:?}", other),
        }
        assert_eq!(project.total_cost, Some(dec!(5)));
    }

    // ==================== compute_cost_per_square_meter ====================

    #[test]
    fn test_cost_per_square_meter() {
        let mut project = reference_project();
        let per_m2 = CostCalculator::default()
            .compute_cost_per_square_meter(&mut project)
            .unwrap();
        // 315.78 / 12 = 26.315
        assert_eq!(per_m2, dec!(26.32));
    }

    #[test]
    fn test_cost_per_square_meter_zero_surface() {
        let mut project = reference_project();
        project.surface = Decimal::ZERO;
        let per_m2 = CostCalculator::default()
            .compute_cost_per_square_meter(&mut project)
            .unwrap();
        assert_eq!(per_m2, Decimal::ZERO);
    }

    #[test]
    fn test_cost_per_square_meter_negative_surface() {
        let mut project = reference_project();
        project.surface = dec!(-4);
        assert_eq!(
            CostCalculator::default()
                .compute_cost_per_square_meter(&mut project)
                .unwrap(),
            Decimal::ZERO
        );
    }

    // ==================== compute_cost_breakdown ====================

    #[test]
    fn test_breakdown_snapshot() {
        let project = reference_project();
        let breakdown = CostCalculator::default()
            .compute_cost_breakdown(&project)
            .unwrap();

        assert_eq!(breakdown.material_cost, dec!(77.00));
        assert_eq!(breakdown.labor_cost, dec!(200.00));
        assert_eq!(breakdown.subtotal, dec!(277.00));
        assert_eq!(breakdown.margin_amount, Decimal::ZERO);
        assert_eq!(breakdown.discount_amount, dec!(13.85));
        assert_eq!(breakdown.vat_amount, dec!(52.63));
        assert_eq!(breakdown.total_cost, dec!(315.78));
        assert_eq!(breakdown.cost_per_square_meter, dec!(26.32));
    }

    #[test]
    fn test_breakdown_does_not_touch_cache() {
        let project = reference_project();
        CostCalculator::default()
            .compute_cost_breakdown(&project)
            .unwrap();
        assert_eq!(project.total_cost, None);
    }

    #[test]
    fn test_breakdown_components_add_up() {
        let project = reference_project().with_profit_margin(dec!(7.5));
        let b = CostCalculator::default()
            .compute_cost_breakdown(&project)
            .unwrap();
        assert_eq!(
            b.subtotal + b.margin_amount - b.discount_amount + b.vat_amount,
            b.total_cost
        );
    }

    #[test]
    fn test_breakdown_map_keys() {
        let project = reference_project();
        let map = CostCalculator::default()
            .compute_cost_breakdown(&project)
            .unwrap()
            .to_map();

        assert_eq!(map["materialCost"], dec!(77.00));
        assert_eq!(map["laborCost"], dec!(200.00));
        assert_eq!(map["totalCost"], dec!(315.78));
        assert_eq!(map["costPerSquareMeter"], dec!(26.32));
    }

    #[test]
    fn test_breakdown_zero_surface() {
        let mut project = reference_project();
        project.surface = Decimal::ZERO;
        let breakdown = CostCalculator::default()
            .compute_cost_breakdown(&project)
            .unwrap();
        assert_eq!(breakdown.cost_per_square_meter, Decimal::ZERO);
        assert_eq!(breakdown.total_cost, dec!(315.78));
    }
}
