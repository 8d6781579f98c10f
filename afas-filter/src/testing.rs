use crate::afas_fields;

/// Entity used across the crate's tests: a numeric id, a nullable name and a flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TestType {
    pub id: i64,
    pub name: Option<String>,
    pub valid: bool,
}

afas_fields! {
    pub enum TestField for TestType {
        Id => "id",
        Name => "name",
        Valid => "valid",
    }
}

/// Values the tests attach to each field, in the same shape as [`TestType`].
pub fn sample() -> TestType {
    TestType {
        id: 123,
        name: Some("test".to_string()),
        valid: true,
    }
}

pub const SKIP_TAKE_CASES: [i64; 4] = [-1, 0, 1, 99];
