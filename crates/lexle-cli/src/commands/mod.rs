pub mod category;
pub mod seed;
pub mod startup;
