mod root;
mod view_model;

pub use root::App;
pub use view_model::ChartViewModel;
