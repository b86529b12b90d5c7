pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use models::api_envelope::ApiEnvelope;
pub use models::assignee::Assignee;
pub use models::assignment_type::AssignmentType;
pub use models::create_rfi_by_name_request::CreateRfiByNameRequest;
pub use models::create_rfi_request::CreateRfiRequest;
pub use models::page_request::PageRequest;
pub use models::resolve_rfi_request::ResolveRfiRequest;
pub use models::rfi_dto::RfiDto;
pub use models::rfi_reply_dto::RfiReplyDto;
pub use models::rfi_status::RfiStatus;
pub use models::rfi_user_ref::RfiUserRef;
pub use models::update_rfi_request::UpdateRfiRequest;
