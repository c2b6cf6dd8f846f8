pub mod api_response;
pub mod image_url;
pub mod validated_wrapper;
