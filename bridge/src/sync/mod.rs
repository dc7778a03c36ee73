pub mod attribute_synchronizer;
pub mod event_binding_manager;
