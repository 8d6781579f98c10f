use afas_filter::params::{FILTER_FIELD_IDS, FILTER_VALUES, OPERATOR_TYPES, ORDER_BY_FIELD_IDS};
use afas_filter::testing::{sample, TestField, TestType, SKIP_TAKE_CASES};
use afas_filter::{AfasFilter, FilterConfig, FilterValue, Operator, OrderDirection};
use url::Url;

fn create() -> AfasFilter<TestType> {
    AfasFilter::create()
}

fn encoded(s: &str) -> String {
    s.replace(',', "%2C")
}

// ---- Empty ----

#[test]
fn no_setup_renders_empty_query() {
    assert_eq!(create().build_search_params().to_string(), "");
}

// ---- Full scenario ----

#[test]
fn full_filter_renders_in_fixed_key_order() {
    let t = sample();
    let params = create()
        .skip(50)
        .take(25)
        .add_filter_with(TestField::Id, t.id, Operator::EqualTo)
        .add_filter_with(TestField::Name, t.name, Operator::Contains)
        .add_filter_with(TestField::Valid, t.valid, Operator::NotEqualTo)
        .add_order_by(TestField::Id, OrderDirection::Ascending)
        .add_order_by(TestField::Name, OrderDirection::Descending)
        .build_search_params();

    assert_eq!(
        params.to_string(),
        "skip=50&take=25&filterfieldids=id%2Cname%2Cvalid&filtervalues=123%2Ctest%2Ctrue&operatortypes=1%2C6%2C7&orderbyfieldids=id%2C-name"
    );
}

#[test]
fn building_twice_is_identical() {
    let filter = create()
        .take(3)
        .add_filter(TestField::Name, "a")
        .add_order_by(TestField::Id, OrderDirection::Descending);
    let first = filter.build_search_params();
    let second = filter.build_search_params();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

// ---- Skip / Take ----

#[test]
fn skip_is_rendered_verbatim() {
    for skip in SKIP_TAKE_CASES {
        let params = create().skip(skip).build_search_params();
        assert_eq!(params.get("skip"), Some(skip.to_string().as_str()));
        assert_eq!(params.to_string(), format!("skip={skip}"));
    }
}

#[test]
fn take_is_rendered_verbatim() {
    for take in SKIP_TAKE_CASES {
        let params = create().take(take).build_search_params();
        assert_eq!(params.get("take"), Some(take.to_string().as_str()));
        assert_eq!(params.to_string(), format!("take={take}"));
    }
}

// ---- Filters ----

#[test]
fn single_filter_of_each_type() {
    let t = sample();
    let cases: [(TestField, FilterValue, &str, &str); 3] = [
        (TestField::Id, t.id.into(), "id", "123"),
        (TestField::Name, t.name.into(), "name", "test"),
        (TestField::Valid, t.valid.into(), "valid", "true"),
    ];

    for (field, value, key, text) in cases {
        let params = create()
            .add_filter_with(field, value, Operator::EqualTo)
            .build_search_params();
        assert_eq!(params.get(FILTER_FIELD_IDS), Some(key));
        assert_eq!(params.get(FILTER_VALUES), Some(text));
        assert_eq!(params.get(OPERATOR_TYPES), Some("1"));
        assert_eq!(
            params.to_string(),
            format!("filterfieldids={key}&filtervalues={text}&operatortypes=1")
        );
    }
}

#[test]
fn multiple_filters_keep_positional_order() {
    let t = sample();
    let params = create()
        .add_filter_with(TestField::Name, t.name, Operator::EqualTo)
        .add_filter_with(TestField::Id, t.id, Operator::Contains)
        .add_filter_with(TestField::Valid, t.valid, Operator::NotEqualTo)
        .build_search_params();

    assert_eq!(params.get(FILTER_FIELD_IDS), Some("name,id,valid"));
    assert_eq!(params.get(FILTER_VALUES), Some("test,123,true"));
    assert_eq!(params.get(OPERATOR_TYPES), Some("1,6,7"));
    assert_eq!(
        params.to_string(),
        encoded("filterfieldids=name,id,valid&filtervalues=test,123,true&operatortypes=1,6,7")
    );
}

#[test]
fn filter_lists_always_have_equal_length() {
    let mut filter = create();
    for (i, op) in Operator::ALL.into_iter().enumerate() {
        filter = filter.add_filter_with(TestField::Id, i as i64, op);
    }
    let params = filter.build_search_params();
    let fields: Vec<&str> = params.get(FILTER_FIELD_IDS).unwrap().split(',').collect();
    let values: Vec<&str> = params.get(FILTER_VALUES).unwrap().split(',').collect();
    let ops: Vec<&str> = params.get(OPERATOR_TYPES).unwrap().split(',').collect();

    assert_eq!(fields.len(), Operator::ALL.len());
    assert_eq!(values.len(), fields.len());
    assert_eq!(ops.len(), fields.len());
    assert_eq!(values[4], "4");
    assert_eq!(ops[4], "5");
    assert_eq!(
        ops,
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15"]
    );
}

#[test]
fn empty_string_value_is_quoted() {
    let params = create()
        .add_filter_with(TestField::Name, "", Operator::EqualTo)
        .build_search_params();
    assert_eq!(params.get(FILTER_VALUES), Some("\"\""));
    assert_eq!(
        params.to_string(),
        "filterfieldids=name&filtervalues=%22%22&operatortypes=1"
    );
}

#[test]
fn null_value_is_literal_null() {
    let params = create()
        .add_filter_with(TestField::Name, None::<String>, Operator::EqualTo)
        .build_search_params();
    assert_eq!(params.get(FILTER_VALUES), Some("null"));
    assert_eq!(
        params.to_string(),
        "filterfieldids=name&filtervalues=null&operatortypes=1"
    );
}

#[test]
fn empty_scalar_keeps_all_three_filter_keys() {
    let params = create()
        .add_filter(TestField::Id, FilterValue::Scalar(String::new()))
        .build_search_params();
    assert_eq!(params.get(FILTER_FIELD_IDS), Some("id"));
    assert_eq!(params.get(FILTER_VALUES), Some("\"\""));
    assert_eq!(params.get(OPERATOR_TYPES), Some("1"));
    assert_eq!(
        params.to_string(),
        "filterfieldids=id&filtervalues=%22%22&operatortypes=1"
    );
}

#[test]
fn equal_to_is_the_default_operator() {
    let params = create()
        .add_filter(TestField::Name, "test")
        .build_search_params();
    assert_eq!(params.get(OPERATOR_TYPES), Some("1"));
}

// ---- Order by ----

#[test]
fn descending_order_by_is_prefixed() {
    let params = create()
        .add_order_by(TestField::Id, OrderDirection::Descending)
        .build_search_params();
    assert_eq!(params.get(ORDER_BY_FIELD_IDS), Some("-id"));
    assert_eq!(params.to_string(), "orderbyfieldids=-id");
}

#[test]
fn ascending_order_by_is_bare() {
    let params = create()
        .add_order_by(TestField::Id, OrderDirection::Ascending)
        .build_search_params();
    assert_eq!(params.get(ORDER_BY_FIELD_IDS), Some("id"));
    assert_eq!(params.to_string(), "orderbyfieldids=id");
}

#[test]
fn multiple_order_bys_keep_call_order() {
    let params = create()
        .add_order_by(TestField::Id, OrderDirection::Ascending)
        .add_order_by(TestField::Name, OrderDirection::Descending)
        .build_search_params();
    assert_eq!(params.get(ORDER_BY_FIELD_IDS), Some("id,-name"));
    assert_eq!(params.to_string(), encoded("orderbyfieldids=id,-name"));
}

// ---- Hand-off to an HTTP client ----

#[test]
fn params_append_onto_connector_url() {
    let mut url =
        Url::parse("https://12345.rest.afas.online/ProfitRestServices/connectors/Profit_Employees")
            .unwrap();
    create()
        .take(100)
        .add_filter_with(TestField::Name, "van", Operator::StartsWith)
        .build_search_params()
        .append_to(&mut url);
    assert_eq!(
        url.query(),
        Some("take=100&filterfieldids=name&filtervalues=van&operatortypes=10")
    );
}

#[test]
fn serde_urlencoded_matches_display() {
    let params = create()
        .skip(0)
        .add_filter(TestField::Name, "")
        .add_order_by(TestField::Valid, OrderDirection::Descending)
        .build_search_params();
    assert_eq!(serde_urlencoded::to_string(&params).unwrap(), params.to_string());
}

// ---- Config ----

#[test]
fn config_renders_like_chained_calls() {
    let config = FilterConfig::from_json(
        r#"{
            "skip": 50,
            "take": 25,
            "filters": [
                {"field": "id", "value": 123},
                {"field": "name", "value": "test", "operator": "contains"},
                {"field": "valid", "value": true, "operator": "not_equal_to"}
            ],
            "order_by": [
                {"field": "id"},
                {"field": "name", "direction": "descending"}
            ]
        }"#,
    )
    .unwrap();

    let from_config = config.build::<TestType>().unwrap().build_search_params();
    let chained = create()
        .skip(50)
        .take(25)
        .add_filter(TestField::Id, 123)
        .add_filter_with(TestField::Name, "test", Operator::Contains)
        .add_filter_with(TestField::Valid, true, Operator::NotEqualTo)
        .add_order_by(TestField::Id, OrderDirection::Ascending)
        .add_order_by(TestField::Name, OrderDirection::Descending)
        .build_search_params();

    assert_eq!(from_config, chained);
}
