// Model module exports

pub mod calendar_day;
pub mod ledger;
pub mod settings;
