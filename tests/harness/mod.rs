pub mod temp_inventory;
