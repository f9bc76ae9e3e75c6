pub mod api_response;
pub mod storage_key;
pub mod validator_utils;
