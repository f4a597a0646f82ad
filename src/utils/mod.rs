//! Small helpers shared by report generators

pub mod string;
