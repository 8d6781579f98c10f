use crate::entity::{Entity, Field};
use crate::operator::{Operator, OrderDirection};
use crate::params::{self, SearchParams};
use crate::value::FilterValue;
use std::marker::PhantomData;
use tracing::debug;

/// One filter condition as it will appear at a single position of the
/// `filterfieldids`, `filtervalues` and `operatortypes` lists.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEntry {
    pub field: &'static str,
    pub value: String,
    pub operator: Operator,
}

/// Builds the query parameters of an AFAS GetConnector request for entity `E`.
///
/// ```
/// use afas_filter::{afas_fields, AfasFilter, Operator, OrderDirection};
///
/// pub struct Employee;
///
/// afas_fields! {
///     pub enum EmployeeField for Employee {
///         Id => "id",
///         Name => "name",
///     }
/// }
///
/// let params = AfasFilter::<Employee>::create()
///     .take(10)
///     .add_filter_with(EmployeeField::Name, "jan", Operator::Contains)
///     .add_order_by(EmployeeField::Id, OrderDirection::Descending)
///     .build_search_params();
///
/// assert_eq!(
///     params.to_string(),
///     "take=10&filterfieldids=name&filtervalues=jan&operatortypes=6&orderbyfieldids=-id"
/// );
/// ```
#[derive(Debug)]
pub struct AfasFilter<E: Entity> {
    skip: Option<i64>,
    take: Option<i64>,
    filters: Vec<FilterEntry>,
    order_bys: Vec<String>,
    entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for AfasFilter<E> {
    fn clone(&self) -> Self {
        Self {
            skip: self.skip,
            take: self.take,
            filters: self.filters.clone(),
            order_bys: self.order_bys.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: Entity> AfasFilter<E> {
    pub fn create() -> Self {
        Self {
            skip: None,
            take: None,
            filters: Vec::new(),
            order_bys: Vec::new(),
            entity: PhantomData,
        }
    }

    /// Number of records to skip. Not range checked; AFAS decides what a negative skip means.
    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Maximum number of records to return. Not range checked.
    pub fn take(mut self, take: i64) -> Self {
        self.take = Some(take);
        self
    }

    /// Add an `EqualTo` condition.
    pub fn add_filter(self, field: E::Field, value: impl Into<FilterValue>) -> Self {
        self.add_filter_with(field, value, Operator::EqualTo)
    }

    pub fn add_filter_with(
        mut self,
        field: E::Field,
        value: impl Into<FilterValue>,
        operator: Operator,
    ) -> Self {
        self.filters.push(FilterEntry {
            field: field.name(),
            value: value.into().encode(),
            operator,
        });
        self
    }

    pub fn add_order_by(mut self, field: E::Field, direction: OrderDirection) -> Self {
        self.order_bys
            .push(format!("{}{}", direction.prefix(), field.name()));
        self
    }

    pub fn skip_value(&self) -> Option<i64> {
        self.skip
    }

    pub fn take_value(&self) -> Option<i64> {
        self.take
    }

    pub fn filters(&self) -> &[FilterEntry] {
        &self.filters
    }

    pub fn order_bys(&self) -> &[String] {
        &self.order_bys
    }

    /// Serialize the accumulated state. Does not modify the builder.
    pub fn build_search_params(&self) -> SearchParams {
        let mut out = SearchParams::new();

        if let Some(skip) = self.skip {
            out.append(params::SKIP, skip.to_string());
        }
        if let Some(take) = self.take {
            out.append(params::TAKE, take.to_string());
        }

        let joined = [
            (params::FILTER_FIELD_IDS, self.join_filters(|f| f.field.to_string())),
            (params::FILTER_VALUES, self.join_filters(|f| f.value.clone())),
            (params::OPERATOR_TYPES, self.join_filters(|f| f.operator.to_string())),
            (params::ORDER_BY_FIELD_IDS, self.order_bys.join(",")),
        ];
        // an empty join means the key is left out, not sent blank
        for (key, value) in joined {
            if !value.is_empty() {
                out.append(key, value);
            }
        }

        debug!(
            filters = self.filters.len(),
            order_bys = self.order_bys.len(),
            "built AFAS search params"
        );
        out
    }

    fn join_filters(&self, part: impl Fn(&FilterEntry) -> String) -> String {
        self.filters.iter().map(part).collect::<Vec<_>>().join(",")
    }
}
