pub mod api_envelope;
pub mod assignee;
pub mod assignment_type;
pub mod create_rfi_by_name_request;
pub mod create_rfi_request;
pub mod page_request;
pub mod resolve_rfi_request;
pub mod rfi_dto;
pub mod rfi_reply_dto;
pub mod rfi_status;
pub mod rfi_user_ref;
pub mod update_rfi_request;
