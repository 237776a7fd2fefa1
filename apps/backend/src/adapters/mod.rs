//! SeaORM adapters translating entity rows and database errors for the
//! repository layer.

pub mod drinks_sea;
