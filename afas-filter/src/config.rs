use crate::entity::{Entity, Field};
use crate::error::{AfasError, Result};
use crate::filter::AfasFilter;
use crate::operator::{Operator, OrderDirection};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterRuleConfig {
    pub field: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub operator: Operator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderByConfig {
    pub field: String,
    #[serde(default)]
    pub direction: OrderDirection,
}

/// A filter kept as data (JSON, a settings file) instead of chained calls.
///
/// Unknown keys are rejected on load. Field names are checked against the
/// entity only when the config is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take: Option<i64>,
    #[serde(default)]
    pub filters: Vec<FilterRuleConfig>,
    #[serde(default)]
    pub order_by: Vec<OrderByConfig>,
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AfasError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AfasError::Parse(e.to_string()))
    }

    /// Check every field name against `E` without touching a builder.
    pub fn validate<E: Entity>(&self) -> Result<()> {
        self.resolve_all::<E>().map(|_| ())
    }

    /// Apply skip/take, filters and order-bys, in document order, onto `filter`.
    ///
    /// All field names are resolved before `filter` is changed. On error the
    /// builder passed in is dropped; call [`FilterConfig::validate`] first, or
    /// pass a clone, to keep it.
    pub fn apply<E: Entity>(&self, filter: AfasFilter<E>) -> Result<AfasFilter<E>> {
        let (rule_fields, order_fields) = self.resolve_all::<E>()?;

        let mut filter = filter;
        if let Some(skip) = self.skip {
            filter = filter.skip(skip);
        }
        if let Some(take) = self.take {
            filter = filter.take(take);
        }

        for (rule, field) in self.filters.iter().zip(rule_fields) {
            debug!(field = %rule.field, operator = %rule.operator, "applying filter rule");
            filter = filter.add_filter_with(field, &rule.value, rule.operator);
        }

        for (order, field) in self.order_by.iter().zip(order_fields) {
            debug!(field = %order.field, direction = ?order.direction, "applying order-by");
            filter = filter.add_order_by(field, order.direction);
        }

        Ok(filter)
    }

    pub fn build<E: Entity>(&self) -> Result<AfasFilter<E>> {
        self.apply(AfasFilter::create())
    }

    fn resolve_all<E: Entity>(&self) -> Result<(Vec<E::Field>, Vec<E::Field>)> {
        let rule_fields = self
            .filters
            .iter()
            .map(|rule| resolve::<E>(&rule.field))
            .collect::<Result<Vec<_>>>()?;
        let order_fields = self
            .order_by
            .iter()
            .map(|order| resolve::<E>(&order.field))
            .collect::<Result<Vec<_>>>()?;
        Ok((rule_fields, order_fields))
    }
}

fn resolve<E: Entity>(name: &str) -> Result<E::Field> {
    E::Field::from_name(name).ok_or_else(|| {
        warn!(field = %name, "field is not declared on the entity");
        AfasError::UnknownField(name.to_string())
    })
}

#[derive(Default)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
}

impl FilterConfigBuilder {
    pub fn skip(mut self, skip: i64) -> Self {
        self.config.skip = Some(skip);
        self
    }

    pub fn take(mut self, take: i64) -> Self {
        self.config.take = Some(take);
        self
    }

    pub fn filter(
        mut self,
        field: impl Into<String>,
        value: impl Into<serde_json::Value>,
        operator: Operator,
    ) -> Self {
        self.config.filters.push(FilterRuleConfig {
            field: field.into(),
            value: value.into(),
            operator,
        });
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.config.order_by.push(OrderByConfig {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn build(self) -> FilterConfig {
        self.config
    }
}
