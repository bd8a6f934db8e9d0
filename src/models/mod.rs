pub mod calendar;
pub mod decision;
pub mod forecast;
