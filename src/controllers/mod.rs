pub mod inventory_controller;

pub use inventory_controller::InventoryController;
