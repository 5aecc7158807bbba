//! Output artifacts: the CSV frequency table and the PNG bar chart.

pub mod chart;
pub mod table;
mod text;
