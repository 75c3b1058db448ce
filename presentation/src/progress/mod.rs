//! Progress indicators for the line-oriented modes

pub mod spinner;
