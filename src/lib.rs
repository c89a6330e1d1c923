pub mod axis;
pub mod chart;
pub mod cli;
pub mod io;
pub mod model;
pub mod schema;
