//! Text receipt for a cost breakdown.

use std::fmt;

use tabi_core::{CostBreakdown, CostRange, DisplayMode, TripParameters};

/// Format an amount in Won with thousands separators, e.g. `1,040,000원`.
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('원');
    grouped
}

fn format_band(band: CostRange, display: DisplayMode) -> String {
    match display {
        DisplayMode::Range => format!("{} ~ {}", format_won(band.min), format_won(band.max)),
        DisplayMode::Average => format_won(band.avg),
    }
}

/// Per-person receipt, laid out in the order costs are derived.
pub struct Receipt<'a> {
    params: &'a TripParameters,
    breakdown: &'a CostBreakdown,
    display: DisplayMode,
}

impl<'a> Receipt<'a> {
    pub fn new(params: &'a TripParameters, breakdown: &'a CostBreakdown, display: DisplayMode) -> Self {
        Self {
            params,
            breakdown,
            display,
        }
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CostBreakdown {
            fixed_costs,
            accommodation,
            daily_expenses,
            total_cost,
        } = self.breakdown;

        writeln!(
            f,
            "예상 경비 (1인당): {} {}일, {}명",
            self.params.destination.label(),
            self.params.total_days,
            self.params.traveler_count
        )?;
        if self.display == DisplayMode::Range {
            writeln!(f, "항공권과 숙박비 범위는 참고용이며, 합계는 평균가로 계산됩니다.")?;
        }
        writeln!(f)?;

        writeln!(f, "[고정 지출]")?;
        writeln!(
            f,
            "  항공권 비용: {}",
            format_band(fixed_costs.flight_with_premium(), self.display)
        )?;
        writeln!(f, "  공항 왕복 교통비: {}", format_won(fixed_costs.airport_transport))?;
        writeln!(f, "  기타 비용: {}", format_won(fixed_costs.miscellaneous))?;
        writeln!(f, "  = {}", format_won(fixed_costs.total))?;
        writeln!(f)?;

        writeln!(f, "[숙박 비용]")?;
        writeln!(
            f,
            "  숙박 비용: {} × {}박",
            format_band(accommodation.daily_cost, self.display),
            accommodation.nights
        )?;
        writeln!(f, "  = {}", format_won(accommodation.total_cost))?;
        writeln!(f)?;

        writeln!(f, "[일일 지출]")?;
        writeln!(f, "  식비: {}", format_won(daily_expenses.food))?;
        if self.params.frequent_drinking {
            writeln!(f, "  술 값: {}", format_won(daily_expenses.drink))?;
        }
        writeln!(f, "  일일 교통비: {}", format_won(daily_expenses.transport))?;
        writeln!(f, "  추가 비용: {}", format_won(daily_expenses.miscellaneous))?;
        writeln!(
            f,
            "  {} × {}일 = {}",
            format_won(daily_expenses.total),
            daily_expenses.days,
            format_won(daily_expenses.total_cost)
        )?;
        writeln!(f)?;

        writeln!(f, "총 비용: {}", format_won(total_cost.avg))?;
        if self.display == DisplayMode::Range {
            writeln!(
                f,
                "  (범위: {} ~ {})",
                format_won(total_cost.min),
                format_won(total_cost.max)
            )?;
        }
        Ok(())
    }
}
