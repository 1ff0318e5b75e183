use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only pricing snapshot of a project, every amount rounded to cents.
///
/// `vat_amount` is the balancing figure, so
/// `subtotal + margin_amount - discount_amount + vat_amount == total_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub material_cost: Decimal,
    pub labor_cost: Decimal,
    pub subtotal: Decimal,
    pub margin_amount: Decimal,
    pub discount_amount: Decimal,
    pub vat_amount: Decimal,
    pub total_cost: Decimal,
    pub cost_per_square_meter: Decimal,
}

impl CostBreakdown {
    /// Keyed view for collaborators that expect a plain map.
    pub fn to_map(&self) -> BTreeMap<String, Decimal> {
        [
            ("materialCost", self.material_cost),
            ("laborCost", self.labor_cost),
            ("subtotal", self.subtotal),
            ("marginAmount", self.margin_amount),
            ("discountAmount", self.discount_amount),
            ("vatAmount", self.vat_amount),
            ("totalCost", self.total_cost),
            ("costPerSquareMeter", self.cost_per_square_meter),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}
