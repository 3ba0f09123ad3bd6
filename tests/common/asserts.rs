#![allow(dead_code)]

use super::builders::Exchange;
use super::headers::header_value;
use corsen_rs::{CorsDecision, Headers, ResponseParts};

pub fn assert_simple(exchange: Exchange) -> (Headers, ResponseParts) {
    match exchange.decision {
        CorsDecision::Simple(result) => {
            assert!(result.status.is_none(), "simple requests keep their status");
            (result.headers, exchange.response)
        }
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(exchange: Exchange) -> (Headers, ResponseParts) {
    match exchange.decision {
        CorsDecision::Preflight(result) => {
            assert_eq!(result.status, Some(204));
            (result.headers, exchange.response)
        }
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_not_applicable(exchange: Exchange) -> ResponseParts {
    match exchange.decision {
        CorsDecision::NotApplicable => exchange.response,
        other => panic!("expected not applicable decision, got {:?}", other),
    }
}

pub fn assert_header_eq(response: &ResponseParts, name: &str, expected: &str) {
    assert_eq!(
        header_value(response, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_no_cors_headers(response: &ResponseParts) {
    let leaked: Vec<_> = response
        .headers()
        .keys()
        .filter(|name| name.starts_with("access-control-"))
        .collect();
    assert!(leaked.is_empty(), "unexpected CORS headers: {leaked:?}");
}
