#![allow(dead_code)]

pub mod mocks;
pub mod test_utils;
