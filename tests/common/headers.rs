#![allow(dead_code)]

use corsen_rs::constants::header;
use corsen_rs::{CorsResponse, ResponseParts};

pub fn header_value<'a>(response: &'a ResponseParts, name: &str) -> Option<&'a str> {
    response.header(name)
}

pub fn has_header(response: &ResponseParts, name: &str) -> bool {
    header_value(response, name).is_some()
}

pub fn vary_values(response: &ResponseParts) -> Vec<String> {
    header_value(response, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
