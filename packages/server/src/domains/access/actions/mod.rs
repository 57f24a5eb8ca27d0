pub mod approve_request;
pub mod authorize_viewer;
pub mod request_access;

pub use approve_request::approve_request;
pub use authorize_viewer::authorize_viewer;
pub use request_access::request_access;
