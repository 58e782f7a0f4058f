// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Which budget limit was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetField {
    AreaLimit,
    CostLimit,
    TargetPopulation,
}

impl std::fmt::Display for BudgetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetField::AreaLimit => write!(f, "area limit"),
            BudgetField::CostLimit => write!(f, "cost limit"),
            BudgetField::TargetPopulation => write!(f, "target population"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BudgetError {
    field: BudgetField,
}

impl BudgetError {
    pub fn new(field: BudgetField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> BudgetField {
        self.field
    }
}

impl std::fmt::Display for BudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The {} must be a positive integer", self.field)
    }
}

impl std::error::Error for BudgetError {}

/// Resource limits of one planting run.
///
/// `target_population` is the number of people the planting serves and is
/// only used as a per-capita divisor of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Budgets {
    area_limit: u64,
    cost_limit: u64,
    target_population: u64,
}

impl Budgets {
    pub fn new(
        area_limit: u64,
        cost_limit: u64,
        target_population: u64,
    ) -> Result<Self, BudgetError> {
        if area_limit == 0 {
            return Err(BudgetError::new(BudgetField::AreaLimit));
        }
        if cost_limit == 0 {
            return Err(BudgetError::new(BudgetField::CostLimit));
        }
        if target_population == 0 {
            return Err(BudgetError::new(BudgetField::TargetPopulation));
        }
        Ok(Self {
            area_limit,
            cost_limit,
            target_population,
        })
    }

    #[inline]
    pub fn area_limit(&self) -> u64 {
        self.area_limit
    }

    #[inline]
    pub fn cost_limit(&self) -> u64 {
        self.cost_limit
    }

    #[inline]
    pub fn target_population(&self) -> u64 {
        self.target_population
    }

    /// True if the given totals fit within both limits.
    #[inline]
    pub fn admits(&self, total_cost: u64, total_area: u64) -> bool {
        total_cost <= self.cost_limit && total_area <= self.area_limit
    }
}
