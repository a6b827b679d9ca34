pub mod dashboard;
pub mod heatmap;
pub mod space_elasticity;
pub mod tail_analysis;
