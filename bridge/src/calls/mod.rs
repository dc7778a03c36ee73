pub(crate) mod pending_call_queue;
pub mod stream_ref;
