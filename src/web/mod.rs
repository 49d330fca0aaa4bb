//! HTML pages served alongside the JSON API

pub mod handlers;
