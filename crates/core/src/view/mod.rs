//! Request views: the state behind a validation screen

pub mod options;
pub mod request_view;

pub use options::ViewOptions;
pub use request_view::RequestView;
