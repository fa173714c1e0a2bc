//! Patterns sub-module: observable.

pub mod observable;
