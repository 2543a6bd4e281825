pub mod aggregate;
pub mod countries;
pub mod dataset;
pub mod export;
pub mod remote;
pub mod state;
