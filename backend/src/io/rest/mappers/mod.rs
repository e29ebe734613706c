pub mod profile_mapper;
pub mod growth_mapper;
pub mod meal_mapper;

pub use profile_mapper::ProfileMapper;
pub use growth_mapper::GrowthMapper;
pub use meal_mapper::MealMapper;
