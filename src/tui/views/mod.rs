pub mod filters;
pub mod option_picker;
pub mod results;
