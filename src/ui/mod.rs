pub mod footer;
pub mod panels;
pub mod plot;
pub mod table;
