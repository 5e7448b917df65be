pub mod local_catalog;
