use super::*;

#[test]
fn login_endpoint_is_relative_for_same_origin() {
    assert_eq!(login_endpoint(""), "/login");
}

#[test]
fn login_endpoint_joins_base_without_double_slash() {
    assert_eq!(login_endpoint("http://localhost:5000"), "http://localhost:5000/login");
    assert_eq!(login_endpoint("http://localhost:5000/"), "http://localhost:5000/login");
}
