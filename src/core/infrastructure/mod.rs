pub mod api_client;
pub mod icinga_response;
