//! Progress reporting while remote calls are in flight

pub mod reporter;
